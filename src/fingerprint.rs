//! Fingerprinting and WL (Weisfeiler–Lehman) colour refinement for square integer matrices.
//!
//! Provides deterministic, relabelling-invariant hashing of quiver matrices and of
//! their underlying graphs. Vertex colours produced here are also used to restrict
//! the permutation search in [`crate::equiv`].
//!
//! # Citations
//! - Weisfeiler–Lehman graph isomorphism test: Weisfeiler & Lehman, "A reduction of a graph to a canonical form" (1968)
//! - SHA-256: NIST FIPS 180-4 (2015)
//! - Domain separation & length prefixing: Bernstein et al., "How to hash into elliptic curves" (2009)

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Domain for initial vertex colours.
const DOMAIN_VERTEX_INIT_V0: &[u8] = b"QV_VERTEX_INIT_V0";

/// Domain for refined vertex colours.
const DOMAIN_VERTEX_ROUND_V0: &[u8] = b"QV_VERTEX_ROUND_V0";

/// Domain for whole-matrix fingerprints.
const DOMAIN_MATRIX_FP_V0: &[u8] = b"QV_MATRIX_FP_V0";

/// A 256‑bit hash value.
///
/// Wraps a byte array for type safety.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HashValue(pub [u8; 32]);

impl HashValue {
    /// Creates a zero hash (all zeros).
    #[inline]
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns the raw byte array.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the first eight bytes as a little-endian `u64`.
    ///
    /// Used to feed `std::hash::Hasher`s without writing all 32 bytes.
    #[inline]
    pub fn prefix_u64(&self) -> u64 {
        let mut head = [0u8; 8];
        head.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(head)
    }

    /// Computes SHA‑256 of the given data with domain separation.
    ///
    /// Domain separation prefix is applied as `b"QVM:<domain>:v1" || length_prefix(data) || data`.
    /// Length prefix is a 64‑bit little‑endian count of bytes.
    pub fn hash_with_domain(domain: &[u8], data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"QVM:");
        hasher.update(domain);
        hasher.update(b":v1");
        let len = data.len() as u64;
        hasher.update(len.to_le_bytes());
        hasher.update(data);
        Self(hasher.finalize().into())
    }
}

impl std::fmt::Display for HashValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HashValue({:02x}{:02x}{:02x}{:02x}…)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Borrowed view of a row-major square matrix.
///
/// Both quiver matrices and underlying-graph adjacency matrices are fingerprinted
/// through this view, so the refinement does not care whether entries are
/// skew-symmetric or symmetric.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a> {
    size: usize,
    data: &'a [i32],
}

impl<'a> MatrixView<'a> {
    /// Creates a view over `data`, which must hold `size * size` entries.
    #[inline]
    pub fn new(size: usize, data: &'a [i32]) -> Self {
        debug_assert_eq!(data.len(), size * size);
        Self { size, data }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.data[i * self.size + j]
    }

    /// Number of non-zero off-diagonal entries in row `i`.
    pub fn degree(&self, i: usize) -> usize {
        (0..self.size)
            .filter(|&j| j != i && self.get(i, j) != 0)
            .count()
    }
}

/// Relabelling-invariant summary of a matrix.
///
/// `colours[v]` is the stable WL colour of vertex `v`; `fingerprint` hashes the
/// dimension together with the sorted colour multiset.
///
/// # Invariant
/// Two matrices related by a simultaneous row/column permutation `π` have equal
/// fingerprints, and `colours_b[π(v)] == colours_a[v]` for every vertex `v`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invariant {
    /// Whole-matrix fingerprint.
    pub fingerprint: HashValue,
    /// Per-vertex colour, indexed by vertex.
    pub colours: Vec<HashValue>,
}

impl Invariant {
    /// Computes the invariant of `view`.
    pub fn of(view: MatrixView<'_>) -> Self {
        let colours = wl_colours(view);
        let fingerprint = matrix_fingerprint(view.size(), &colours);
        Self {
            fingerprint,
            colours,
        }
    }

    /// Sorted copy of the colour multiset.
    pub fn sorted_colours(&self) -> Vec<HashValue> {
        let mut sorted = self.colours.clone();
        sorted.sort();
        sorted
    }
}

/// Counts distinct colours in a colouring.
fn distinct(colours: &[HashValue]) -> usize {
    let mut sorted = colours.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted.len()
}

/// Computes stable WL colours for every vertex of a square matrix.
///
/// The initial colour of a vertex is the sorted multiset of its non-zero row
/// entries. Each round replaces a colour with
/// `H(old colour || sorted[(weight, neighbour colour)])`. Refinement stops as soon
/// as a round does not increase the number of distinct colours, or after `n`
/// rounds. Both criteria depend only on the isomorphism class of the input.
///
/// # Citations
/// - Colour refinement: Grohe et al., "Color refinement and its applications" (2021)
pub fn wl_colours(view: MatrixView<'_>) -> Vec<HashValue> {
    let n = view.size();
    let mut colours: Vec<HashValue> = (0..n)
        .map(|v| {
            let mut weights: Vec<i32> = (0..n)
                .filter(|&j| j != v)
                .map(|j| view.get(v, j))
                .filter(|&w| w != 0)
                .collect();
            weights.sort_unstable();
            let mut data = Vec::with_capacity(8 + weights.len() * 4);
            data.extend_from_slice(&(weights.len() as u64).to_le_bytes());
            for w in weights {
                data.extend_from_slice(&w.to_le_bytes());
            }
            HashValue::hash_with_domain(DOMAIN_VERTEX_INIT_V0, &data)
        })
        .collect();

    let mut classes = distinct(&colours);
    for _round in 0..n {
        if classes == n {
            break;
        }
        let refined: Vec<HashValue> = (0..n)
            .map(|v| {
                let mut neighbours: Vec<(i32, HashValue)> = (0..n)
                    .filter(|&j| j != v && view.get(v, j) != 0)
                    .map(|j| (view.get(v, j), colours[j]))
                    .collect();
                neighbours.sort();
                let mut data = Vec::with_capacity(32 + neighbours.len() * 36);
                data.extend_from_slice(colours[v].as_bytes());
                for (w, c) in neighbours {
                    data.extend_from_slice(&w.to_le_bytes());
                    data.extend_from_slice(c.as_bytes());
                }
                HashValue::hash_with_domain(DOMAIN_VERTEX_ROUND_V0, &data)
            })
            .collect();
        let refined_classes = distinct(&refined);
        colours = refined;
        if refined_classes <= classes {
            break;
        }
        classes = refined_classes;
    }
    colours
}

/// Hashes the dimension together with the sorted colour multiset.
pub fn matrix_fingerprint(size: usize, colours: &[HashValue]) -> HashValue {
    let mut sorted = colours.to_vec();
    sorted.sort();
    let mut data = Vec::with_capacity(8 + sorted.len() * 32);
    data.extend_from_slice(&(size as u64).to_le_bytes());
    for c in sorted {
        data.extend_from_slice(c.as_bytes());
    }
    HashValue::hash_with_domain(DOMAIN_MATRIX_FP_V0, &data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_a3() -> Vec<i32> {
        vec![0, 1, 0, -1, 0, 1, 0, -1, 0]
    }

    #[test]
    fn default_invariant_is_all_zero() {
        assert_eq!(HashValue::default(), HashValue::zero());
        let invariant = Invariant::default();
        assert_eq!(invariant.fingerprint, HashValue::zero());
    }

    #[test]
    fn hash_with_domain_separates_domains() {
        let a = HashValue::hash_with_domain(b"one", b"data");
        let b = HashValue::hash_with_domain(b"two", b"data");
        assert_ne!(a, b);
        assert_eq!(a, HashValue::hash_with_domain(b"one", b"data"));
    }

    #[test]
    fn colours_follow_relabelling() {
        let data = path_a3();
        // Relabel 0 <-> 2: the path becomes 2 -> 1 -> 0.
        let relabelled = vec![0, -1, 0, 1, 0, -1, 0, 1, 0];
        let a = Invariant::of(MatrixView::new(3, &data));
        let b = Invariant::of(MatrixView::new(3, &relabelled));
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a.colours[0], b.colours[2]);
        assert_eq!(a.colours[1], b.colours[1]);
        assert_eq!(a.colours[2], b.colours[0]);
    }

    #[test]
    fn orientation_changes_fingerprint() {
        let linear = path_a3();
        // 0 -> 1 <- 2: vertex 1 is a sink.
        let sink = vec![0, 1, 0, -1, 0, -1, 0, 1, 0];
        let a = Invariant::of(MatrixView::new(3, &linear));
        let b = Invariant::of(MatrixView::new(3, &sink));
        assert_ne!(a.fingerprint, b.fingerprint);
    }

    #[test]
    fn empty_matrix_has_stable_fingerprint() {
        let a = Invariant::of(MatrixView::new(0, &[]));
        let b = Invariant::of(MatrixView::new(0, &[]));
        assert!(a.colours.is_empty());
        assert_eq!(a.fingerprint, b.fingerprint);
    }

    #[test]
    fn view_degree_ignores_diagonal() {
        let data = path_a3();
        let view = MatrixView::new(3, &data);
        assert_eq!(view.degree(0), 1);
        assert_eq!(view.degree(1), 2);
    }
}
