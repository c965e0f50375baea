//! Equivalence of quivers up to relabelling of vertices.
//!
//! [`EquivQuiverMatrix`] and [`EquivUnderlyingGraph`] wrap a matrix together with its
//! WL invariant. `Hash` writes only the fingerprint, and `Eq` searches for a vertex
//! permutation mapping one matrix exactly onto the other, so both wrappers can key
//! `HashSet`s where membership means "isomorphic to a member".
//!
//! # Determinism
//! The permutation search visits vertices in a fixed order (smallest colour class
//! first, ties by index) and candidates in increasing index order, so
//! [`isomorphism`] always returns the same permutation for the same inputs.

use crate::fingerprint::{HashValue, Invariant, MatrixView};
use crate::matrix::QuiverMatrix;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Searches for a permutation `π` with `b[π(i)][π(j)] == a[i][j]` for all `i, j`.
///
/// Only colour-preserving maps are tried; every newly placed vertex is checked
/// against all previously placed ones before the search goes deeper.
fn search(
    a: MatrixView<'_>,
    a_inv: &Invariant,
    b: MatrixView<'_>,
    b_inv: &Invariant,
) -> Option<Vec<usize>> {
    let n = a.size();
    if n != b.size() || a_inv.fingerprint != b_inv.fingerprint {
        return None;
    }

    // Candidate targets per colour, and the order in which to place vertices.
    let mut order: Vec<usize> = (0..n).collect();
    let class_size = |v: usize| {
        a_inv
            .colours
            .iter()
            .filter(|c| **c == a_inv.colours[v])
            .count()
    };
    order.sort_by_key(|&v| (class_size(v), v));

    let candidates: Vec<Vec<usize>> = (0..n)
        .map(|v| {
            (0..n)
                .filter(|&w| b_inv.colours[w] == a_inv.colours[v])
                .collect()
        })
        .collect();
    if candidates.iter().any(|c| c.is_empty()) {
        return None;
    }

    let mut assignment = vec![usize::MAX; n];
    let mut used = vec![false; n];
    if place(0, &order, &candidates, a, b, &mut assignment, &mut used) {
        Some(assignment)
    } else {
        None
    }
}

fn place(
    depth: usize,
    order: &[usize],
    candidates: &[Vec<usize>],
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    assignment: &mut [usize],
    used: &mut [bool],
) -> bool {
    if depth == order.len() {
        return true;
    }
    let v = order[depth];
    for &w in &candidates[v] {
        if used[w] {
            continue;
        }
        let consistent = order[..depth].iter().all(|&u| {
            let x = assignment[u];
            a.get(v, u) == b.get(w, x) && a.get(u, v) == b.get(x, w)
        });
        if !consistent {
            continue;
        }
        assignment[v] = w;
        used[w] = true;
        if place(depth + 1, order, candidates, a, b, assignment, used) {
            return true;
        }
        used[w] = false;
        assignment[v] = usize::MAX;
    }
    false
}

/// Returns a permutation `π` with `b == a.permuted(π)`, if the quivers are isomorphic.
pub fn isomorphism(a: &QuiverMatrix, b: &QuiverMatrix) -> Option<Vec<usize>> {
    let a_inv = Invariant::of(a.view());
    let b_inv = Invariant::of(b.view());
    search(a.view(), &a_inv, b.view(), &b_inv)
}

/// A quiver matrix compared up to simultaneous row/column permutation.
///
/// # Invariants
/// - `invariant` is always the invariant of `matrix`.
/// - `a == b` implies `hash(a) == hash(b)`.
#[derive(Debug, Clone)]
pub struct EquivQuiverMatrix {
    matrix: QuiverMatrix,
    invariant: Invariant,
}

impl EquivQuiverMatrix {
    /// Wraps `matrix`, computing its invariant.
    pub fn new(matrix: QuiverMatrix) -> Self {
        let invariant = Invariant::of(matrix.view());
        Self { matrix, invariant }
    }

    /// The wrapped matrix.
    #[inline]
    pub fn matrix(&self) -> &QuiverMatrix {
        &self.matrix
    }

    /// Unwraps the matrix.
    pub fn into_matrix(self) -> QuiverMatrix {
        self.matrix
    }

    /// Relabelling-invariant fingerprint.
    #[inline]
    pub fn fingerprint(&self) -> HashValue {
        self.invariant.fingerprint
    }

    /// Permutation `π` with `other == self.permuted(π)`, if one exists.
    pub fn isomorphism_to(&self, other: &EquivQuiverMatrix) -> Option<Vec<usize>> {
        search(
            self.matrix.view(),
            &self.invariant,
            other.matrix.view(),
            &other.invariant,
        )
    }
}

impl From<QuiverMatrix> for EquivQuiverMatrix {
    fn from(matrix: QuiverMatrix) -> Self {
        Self::new(matrix)
    }
}

impl PartialEq for EquivQuiverMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix || self.isomorphism_to(other).is_some()
    }
}

impl Eq for EquivQuiverMatrix {}

impl Hash for EquivQuiverMatrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.invariant.fingerprint.hash(state);
    }
}

impl fmt::Display for EquivQuiverMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.matrix.fmt(f)
    }
}

/// The undirected, unweighted graph underlying a quiver, compared up to relabelling.
///
/// One instance can be reused as a scratch projection through [`set_matrix`](Self::set_matrix).
#[derive(Debug, Clone)]
pub struct EquivUnderlyingGraph {
    size: usize,
    adjacency: Vec<i32>,
    invariant: Invariant,
}

impl EquivUnderlyingGraph {
    /// Projects `matrix` to its underlying graph.
    pub fn new(matrix: &QuiverMatrix) -> Self {
        let mut graph = Self {
            size: 0,
            adjacency: Vec::with_capacity(matrix.as_slice().len()),
            invariant: Invariant::default(),
        };
        graph.set_matrix(matrix);
        graph
    }

    /// Replaces the graph with the projection of `matrix`, reusing buffers.
    pub fn set_matrix(&mut self, matrix: &QuiverMatrix) {
        self.size = matrix.num_vertices();
        self.adjacency.clear();
        self.adjacency
            .extend(matrix.as_slice().iter().map(|&v| i32::from(v != 0)));
        self.invariant = Invariant::of(self.view());
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.size
    }

    /// Whether vertices `i` and `j` are adjacent.
    #[inline]
    pub fn adjacent(&self, i: usize, j: usize) -> bool {
        self.adjacency[i * self.size + j] != 0
    }

    /// Relabelling-invariant fingerprint.
    #[inline]
    pub fn fingerprint(&self) -> HashValue {
        self.invariant.fingerprint
    }

    /// A quiver with this underlying graph, every edge oriented towards the larger index.
    pub fn to_quiver(&self) -> QuiverMatrix {
        let mut quiver = QuiverMatrix::zero(self.size);
        for i in 0..self.size {
            for j in i + 1..self.size {
                if self.adjacent(i, j) {
                    quiver.set(i, j, 1);
                }
            }
        }
        quiver
    }

    fn view(&self) -> MatrixView<'_> {
        MatrixView::new(self.size, &self.adjacency)
    }
}

impl PartialEq for EquivUnderlyingGraph {
    fn eq(&self, other: &Self) -> bool {
        (self.size == other.size && self.adjacency == other.adjacency)
            || search(self.view(), &self.invariant, other.view(), &other.invariant).is_some()
    }
}

impl Eq for EquivUnderlyingGraph {}

impl Hash for EquivUnderlyingGraph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.invariant.fingerprint.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn m(text: &str) -> QuiverMatrix {
        text.parse().unwrap()
    }

    #[test]
    fn relabelled_path_is_equivalent() {
        let a = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
        let b = a.permuted(&[2, 0, 1]);
        let perm = isomorphism(&a, &b).unwrap();
        assert_eq!(a.permuted(&perm), b);
        assert_eq!(EquivQuiverMatrix::new(a), EquivQuiverMatrix::new(b));
    }

    #[test]
    fn orientation_distinguishes_quivers() {
        let linear = EquivQuiverMatrix::new(m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }"));
        let sink = EquivQuiverMatrix::new(m("{ { 0 1 0 } { -1 0 -1 } { 0 1 0 } }"));
        let source = EquivQuiverMatrix::new(m("{ { 0 -1 0 } { 1 0 1 } { 0 -1 0 } }"));
        assert_ne!(linear, sink);
        assert_ne!(sink, source);
        assert_ne!(linear, source);
    }

    #[test]
    fn regular_graphs_need_the_search() {
        // Oriented 6-cycle versus two oriented triangles: every vertex has one
        // incoming and one outgoing arrow in both, so WL colours cannot split them.
        let cycle = m("{ { 0 1 0 0 0 -1 } { -1 0 1 0 0 0 } { 0 -1 0 1 0 0 } \
                       { 0 0 -1 0 1 0 } { 0 0 0 -1 0 1 } { 1 0 0 0 -1 0 } }");
        let triangles = m("{ { 0 1 -1 0 0 0 } { -1 0 1 0 0 0 } { 1 -1 0 0 0 0 } \
                           { 0 0 0 0 1 -1 } { 0 0 0 -1 0 1 } { 0 0 0 1 -1 0 } }");
        let a = EquivQuiverMatrix::new(cycle);
        let b = EquivQuiverMatrix::new(triangles);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a, b);
    }

    #[test]
    fn hash_set_membership_is_up_to_relabelling() {
        let a = m("{ { 0 1 0 0 } { -1 0 1 1 } { 0 -1 0 1 } { 0 -1 -1 0 } }");
        let mut set = HashSet::new();
        set.insert(EquivQuiverMatrix::new(a.clone()));
        assert!(set.contains(&EquivQuiverMatrix::new(a.permuted(&[3, 1, 0, 2]))));
        assert!(!set.contains(&EquivQuiverMatrix::new(m("{ { 0 1 } { -1 0 } }"))));
    }

    #[test]
    fn underlying_graph_forgets_orientation() {
        let linear = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
        let sink = m("{ { 0 2 0 } { -2 0 -1 } { 0 1 0 } }");
        let triangle = m("{ { 0 1 -1 } { -1 0 1 } { 1 -1 0 } }");

        let mut scratch = EquivUnderlyingGraph::new(&sink);
        assert!(scratch.adjacent(0, 1));
        assert!(!scratch.adjacent(0, 2));
        assert_eq!(scratch, EquivUnderlyingGraph::new(&linear));

        scratch.set_matrix(&triangle);
        assert_eq!(scratch.num_vertices(), 3);
        assert_ne!(scratch, EquivUnderlyingGraph::new(&linear));
        assert_eq!(
            scratch.to_quiver().to_string(),
            "{ { 0 1 1 } { -1 0 1 } { -1 -1 0 } }"
        );
    }

    fn quiver_and_permutation() -> impl Strategy<Value = (QuiverMatrix, Vec<usize>)> {
        (1usize..7).prop_flat_map(|n| {
            let upper = prop::collection::vec(-2i32..=2, n * (n - 1) / 2);
            let perm = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
            (Just(n), upper, perm).prop_map(|(n, upper, perm)| {
                let mut matrix = QuiverMatrix::zero(n);
                let mut entries = upper.into_iter();
                for i in 0..n {
                    for j in i + 1..n {
                        matrix.set(i, j, entries.next().unwrap_or(0));
                    }
                }
                (matrix, perm)
            })
        })
    }

    /// Few vertices and unit weights, so independent draws often coincide.
    fn small_quiver() -> impl Strategy<Value = QuiverMatrix> {
        (1usize..5).prop_flat_map(|n| {
            prop::collection::vec(-1i32..=1, n * (n - 1) / 2).prop_map(move |upper| {
                let mut matrix = QuiverMatrix::zero(n);
                let mut entries = upper.into_iter();
                for i in 0..n {
                    for j in i + 1..n {
                        matrix.set(i, j, entries.next().unwrap_or(0));
                    }
                }
                matrix
            })
        })
    }

    proptest! {
        #[test]
        fn equality_is_symmetric_and_agrees_with_hash(a in small_quiver(), b in small_quiver()) {
            let (qa, qb) = (EquivQuiverMatrix::new(a.clone()), EquivQuiverMatrix::new(b.clone()));
            prop_assert_eq!(qa == qb, qb == qa);
            if qa == qb {
                prop_assert_eq!(qa.fingerprint(), qb.fingerprint());
            }
            let (ga, gb) = (EquivUnderlyingGraph::new(&a), EquivUnderlyingGraph::new(&b));
            prop_assert_eq!(ga == gb, gb == ga);
            if ga == gb {
                prop_assert_eq!(ga.fingerprint(), gb.fingerprint());
            }
        }

        #[test]
        fn permutation_preserves_class((matrix, perm) in quiver_and_permutation()) {
            let a = EquivQuiverMatrix::new(matrix.clone());
            let b = EquivQuiverMatrix::new(matrix.permuted(&perm));
            prop_assert_eq!(a.fingerprint(), b.fingerprint());
            prop_assert!(a == b);
            prop_assert!(b == a);
            let found = a.isomorphism_to(&b).unwrap();
            prop_assert_eq!(&matrix.permuted(&found), b.matrix());
        }

        #[test]
        fn equivalence_is_transitive(
            (matrix, p) in quiver_and_permutation(),
            seed in any::<u64>(),
        ) {
            let b = matrix.permuted(&p);
            // A second relabelling derived from `seed`: a rotation of the vertices.
            let n = matrix.num_vertices();
            let shift = (seed % n as u64) as usize;
            let q: Vec<usize> = (0..n).map(|i| (i + shift) % n).collect();
            let c = b.permuted(&q);
            let (a, b, c) = (
                EquivQuiverMatrix::new(matrix),
                EquivQuiverMatrix::new(b),
                EquivQuiverMatrix::new(c),
            );
            prop_assert!(a == a.clone());
            prop_assert!(a == b && b == c);
            prop_assert!(a == c);
        }

        #[test]
        fn underlying_graph_is_permutation_invariant((matrix, perm) in quiver_and_permutation()) {
            let a = EquivUnderlyingGraph::new(&matrix);
            let b = EquivUnderlyingGraph::new(&matrix.permuted(&perm));
            prop_assert_eq!(a.fingerprint(), b.fingerprint());
            prop_assert!(a == b);
        }
    }
}
