//! Breadth-first, deduplicating move-class loader.

use super::Depth;
use crate::equiv::EquivQuiverMatrix;
use crate::finite::FiniteCheck;
use crate::matrix::QuiverMatrix;
use crate::moves::{MoveApplicator, MoveLibrary};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// Discovers the move class of a seed quiver, one new class member per step.
///
/// The seed is yielded first at depth `0(0)`. Afterwards frontier entries are
/// expanded in discovery order; within one entry rules are tried in library order,
/// forward before reverse, matches in enumeration order. Each quiver not
/// equivalent to an already visited one is yielded once, with the parent's depth
/// advanced on the counter selected by the rule's [`MoveKind`](crate::moves::MoveKind).
///
/// # Determinism
/// The first path to reach a class fixes its reported depth. This is breadth-first
/// discovery order, not a shortest-path guarantee across rule kinds.
pub struct MoveClassLoader<'a> {
    /// Rules consulted at every expansion.
    moves: &'a MoveLibrary,
    /// Matcher sharing the caller's finiteness check.
    applicator: MoveApplicator<'a>,
    /// Discovered, not yet yielded.
    ready: VecDeque<(QuiverMatrix, Depth)>,
    /// Discovered, not yet expanded.
    frontier: VecDeque<(QuiverMatrix, Depth)>,
    /// Every class discovered so far.
    visited: HashSet<EquivQuiverMatrix>,
    /// Depth of the last yielded quiver.
    depth: Depth,
    /// Frontier ran dry.
    exhausted: bool,
}

impl<'a> MoveClassLoader<'a> {
    /// Seeds a loader with `seed`.
    pub fn new(seed: QuiverMatrix, moves: &'a MoveLibrary, finite: &'a dyn FiniteCheck) -> Self {
        let mut visited = HashSet::new();
        visited.insert(EquivQuiverMatrix::new(seed.clone()));
        let mut frontier = VecDeque::new();
        frontier.push_back((seed.clone(), Depth::default()));
        let mut ready = VecDeque::new();
        ready.push_back((seed, Depth::default()));
        Self {
            moves,
            applicator: MoveApplicator::new(finite),
            ready,
            frontier,
            visited,
            depth: Depth::default(),
            exhausted: false,
        }
    }

    /// Whether another class member remains.
    ///
    /// May expand frontier entries to find out; calling it repeatedly has no
    /// further effect until [`next`](Iterator::next) is called.
    pub fn has_next(&mut self) -> bool {
        self.fill();
        !self.ready.is_empty()
    }

    /// Depth of the most recently yielded quiver.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Number of distinct classes discovered so far, yielded or not.
    pub fn visited(&self) -> usize {
        self.visited.len()
    }

    /// Expands frontier entries until something is ready or the frontier is empty.
    fn fill(&mut self) {
        while self.ready.is_empty() {
            let Some((matrix, depth)) = self.frontier.pop_front() else {
                if !self.exhausted {
                    self.exhausted = true;
                    debug!(classes = self.visited.len(), "move class exhausted");
                }
                return;
            };
            self.expand(&matrix, depth);
        }
    }

    /// Applies every rule to `matrix` and records unseen results.
    fn expand(&mut self, matrix: &QuiverMatrix, depth: Depth) {
        for rule in self.moves {
            for (_, result) in self.applicator.applications(matrix, rule) {
                let key = EquivQuiverMatrix::new(result);
                if self.visited.contains(&key) {
                    continue;
                }
                let next_depth = depth.advanced(rule.kind());
                let result = key.matrix().clone();
                trace!(depth = %next_depth, matrix = %result, "discovered class");
                self.visited.insert(key);
                self.frontier.push_back((result.clone(), next_depth));
                self.ready.push_back((result, next_depth));
            }
        }
    }
}

impl Iterator for MoveClassLoader<'_> {
    type Item = QuiverMatrix;

    fn next(&mut self) -> Option<Self::Item> {
        self.fill();
        let (matrix, depth) = self.ready.pop_front()?;
        self.depth = depth;
        Some(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finite::{Finiteness, MutationFiniteCheck};
    use crate::moves::{MoveKind, MoveRule};

    fn m(text: &str) -> QuiverMatrix {
        text.parse().unwrap()
    }

    fn finite_always(_: &QuiverMatrix) -> Finiteness {
        Finiteness::Finite
    }

    fn collect(loader: &mut MoveClassLoader<'_>) -> Vec<(String, Depth)> {
        let mut out = Vec::new();
        while let Some(matrix) = loader.next() {
            out.push((matrix.to_string(), loader.depth()));
        }
        out
    }

    #[test]
    fn seed_comes_first_and_alone_without_moves() {
        let library = MoveLibrary::new();
        let check = finite_always;
        let seed = m("{ { 0 1 } { -1 0 } }");
        let mut loader = MoveClassLoader::new(seed.clone(), &library, &check);
        assert!(loader.has_next());
        assert_eq!(loader.next(), Some(seed));
        assert_eq!(loader.depth(), Depth::default());
        assert!(!loader.has_next());
        assert_eq!(loader.next(), None);
        assert_eq!(loader.visited(), 1);
    }

    #[test]
    fn a3_path_under_leaf_flips() {
        let library = MoveLibrary::from(vec![MoveRule::sink_source()]);
        let check = finite_always;
        let mut loader =
            MoveClassLoader::new(m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }"), &library, &check);
        assert_eq!(
            collect(&mut loader),
            vec![
                ("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }".to_string(), Depth::new(0, 0)),
                ("{ { 0 1 0 } { -1 0 -1 } { 0 1 0 } }".to_string(), Depth::new(0, 1)),
                ("{ { 0 -1 0 } { 1 0 1 } { 0 -1 0 } }".to_string(), Depth::new(0, 1)),
            ]
        );
    }

    #[test]
    fn a4_path_reaches_depth_two() {
        let library = MoveLibrary::from(vec![MoveRule::sink_source()]);
        let check = finite_always;
        let seed = m("{ { 0 1 0 0 } { -1 0 1 0 } { 0 -1 0 1 } { 0 0 -1 0 } }");
        let mut loader = MoveClassLoader::new(seed, &library, &check);
        let depths: Vec<u32> = collect(&mut loader)
            .into_iter()
            .map(|(_, d)| d.sink_source)
            .collect();
        assert_eq!(depths, vec![0, 1, 1, 2]);
    }

    #[test]
    fn standard_moves_use_the_general_counter() {
        let library =
            MoveLibrary::from(vec![MoveRule::sink_source().with_kind(MoveKind::Standard)]);
        let check = finite_always;
        let mut loader =
            MoveClassLoader::new(m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }"), &library, &check);
        let depths: Vec<Depth> = collect(&mut loader).into_iter().map(|(_, d)| d).collect();
        assert_eq!(
            depths,
            vec![Depth::new(0, 0), Depth::new(1, 0), Depth::new(1, 0)]
        );
    }

    #[test]
    fn has_next_is_idempotent() {
        let library = MoveLibrary::from(vec![MoveRule::sink_source()]);
        let check = finite_always;
        let mut loader =
            MoveClassLoader::new(m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }"), &library, &check);
        loader.next();
        assert!(loader.has_next());
        assert!(loader.has_next());
        assert_eq!(loader.visited(), 3);
        let second = loader.next().unwrap();
        assert_eq!(second.to_string(), "{ { 0 1 0 } { -1 0 -1 } { 0 1 0 } }");
    }

    #[test]
    fn exhausted_loader_stays_exhausted() {
        let library = MoveLibrary::from(vec![MoveRule::sink_source()]);
        let check = finite_always;
        let mut loader =
            MoveClassLoader::new(m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }"), &library, &check);
        assert_eq!(collect(&mut loader).len(), 3);
        assert!(loader.exhausted);
        for _ in 0..3 {
            assert!(!loader.has_next());
            assert_eq!(loader.next(), None);
        }
        assert!(loader.exhausted);
        assert_eq!(loader.visited(), 3);
        assert_eq!(loader.depth(), Depth::new(0, 1));
    }

    #[test]
    fn two_vertex_flip_stays_in_the_seed_class() {
        let library = MoveLibrary::from(vec![MoveRule::sink_source()]);
        let check = finite_always;
        let mut loader = MoveClassLoader::new(m("{ { 0 1 } { -1 0 } }"), &library, &check);
        assert_eq!(collect(&mut loader).len(), 1);
        assert_eq!(loader.visited(), 1);
    }

    #[test]
    fn yields_are_pairwise_inequivalent() {
        let library = MoveLibrary::from(vec![MoveRule::sink_source()]);
        let check = MutationFiniteCheck::new();
        // D4 with a branching centre: 0 -> 1, 2 -> 1, 1 -> 3.
        let seed = m("{ { 0 1 0 0 } { -1 0 -1 1 } { 0 1 0 0 } { 0 -1 0 0 } }");
        let mut loader = MoveClassLoader::new(seed, &library, &check);
        let mut yielded: Vec<EquivQuiverMatrix> = Vec::new();
        while let Some(matrix) = loader.next() {
            let key = EquivQuiverMatrix::new(matrix);
            assert!(yielded.iter().all(|seen| *seen != key));
            yielded.push(key);
        }
        assert_eq!(yielded.len(), loader.visited());
    }
}
