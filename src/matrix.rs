//! Skew-symmetric integer matrices encoding quivers.
//!
//! A `QuiverMatrix` of dimension `n` describes a quiver on vertices `0..n`:
//! a positive entry `b[i][j]` counts arrows `i -> j`, and `b[j][i] == -b[i][j]`.
//! Skew-symmetry is enforced by every constructor and setter, so code elsewhere
//! never re-checks it.
//!
//! # Text form
//! `{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }`: an outer brace pair enclosing one brace
//! pair per row, entries separated by whitespace.
//!
//! # Citations
//! - Exchange matrices and mutation: Fomin & Zelevinsky, "Cluster algebras I: Foundations" (2002)

use crate::fingerprint::MatrixView;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error raised when matrix data is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A brace was expected but something else was found.
    UnexpectedToken {
        /// Byte offset of the token.
        offset: usize,
        /// The offending token, or `"end of input"`.
        found: String,
    },
    /// A token inside a row is not an integer.
    InvalidInteger {
        /// Byte offset of the token.
        offset: usize,
        /// The offending token.
        token: String,
    },
    /// Input continues after the closing brace.
    TrailingInput {
        /// Byte offset of the first trailing character.
        offset: usize,
    },
    /// A row's length differs from the number of rows.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },
    /// `b[i][j] != -b[j][i]` (or a non-zero diagonal entry when `i == j`).
    NotSkewSymmetric {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::UnexpectedToken { offset, found } => {
                write!(f, "unexpected {} at offset {}", found, offset)
            }
            MatrixError::InvalidInteger { offset, token } => {
                write!(f, "invalid integer '{}' at offset {}", token, offset)
            }
            MatrixError::TrailingInput { offset } => {
                write!(f, "trailing input at offset {}", offset)
            }
            MatrixError::NotSquare { rows, row, len } => write!(
                f,
                "row {} has {} entries but the matrix has {} rows",
                row, len, rows
            ),
            MatrixError::NotSkewSymmetric { row, col } => {
                write!(f, "entries ({}, {}) and ({}, {}) are not skew-symmetric", row, col, col, row)
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// A skew-symmetric integer matrix.
///
/// # Invariants
/// - `data.len() == size * size`, row-major.
/// - `data[i * size + j] == -data[j * size + i]` for all `i, j` (so the diagonal is zero).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct QuiverMatrix {
    size: usize,
    data: Vec<i32>,
}

impl QuiverMatrix {
    /// Creates the `size × size` zero matrix (a quiver with no arrows).
    pub fn zero(size: usize) -> Self {
        Self {
            size,
            data: vec![0; size * size],
        }
    }

    /// Builds a matrix from its rows, validating shape and skew-symmetry.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != size {
                return Err(MatrixError::NotSquare {
                    rows: size,
                    row,
                    len: entries.len(),
                });
            }
            data.extend(entries);
        }
        let matrix = Self { size, data };
        matrix.check_skew_symmetric()?;
        Ok(matrix)
    }

    fn check_skew_symmetric(&self) -> Result<(), MatrixError> {
        for i in 0..self.size {
            for j in i..self.size {
                if self.get(i, j).checked_neg() != Some(self.get(j, i)) {
                    return Err(MatrixError::NotSkewSymmetric { row: i, col: j });
                }
            }
        }
        Ok(())
    }

    /// Number of vertices of the quiver.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.size
    }

    /// Entry at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.data[i * self.size + j]
    }

    /// Sets `b[i][j] = value` and `b[j][i] = -value`.
    ///
    /// Setting a diagonal entry is a no-op: the diagonal of a quiver matrix is zero.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: i32) {
        if i == j {
            return;
        }
        self.data[i * self.size + j] = value;
        self.data[j * self.size + i] = -value;
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Row-major entries.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Borrowed view used by fingerprinting and isomorphism search.
    #[inline]
    pub fn view(&self) -> MatrixView<'_> {
        MatrixView::new(self.size, &self.data)
    }

    /// Returns the relabelled matrix `c` with `c[perm[i]][perm[j]] == b[i][j]`.
    ///
    /// `perm` must be a permutation of `0..n`.
    pub fn permuted(&self, perm: &[usize]) -> QuiverMatrix {
        debug_assert_eq!(perm.len(), self.size);
        let mut out = QuiverMatrix::zero(self.size);
        for i in 0..self.size {
            for j in 0..self.size {
                out.data[perm[i] * self.size + perm[j]] = self.get(i, j);
            }
        }
        out
    }

    /// Returns the matrix mutated at vertex `k`.
    ///
    /// `b'_ij = -b_ij` if `k ∈ {i, j}`, otherwise
    /// `b'_ij = b_ij + (|b_ik| b_kj + b_ik |b_kj|) / 2`.
    pub fn mutate(&self, k: usize) -> QuiverMatrix {
        let mut out = self.clone();
        for i in 0..self.size {
            for j in 0..self.size {
                let value = if i == k || j == k {
                    -self.get(i, j)
                } else {
                    let bik = self.get(i, k);
                    let bkj = self.get(k, j);
                    self.get(i, j) + (bik.abs() * bkj + bik * bkj.abs()) / 2
                };
                out.data[i * self.size + j] = value;
            }
        }
        out
    }

    /// The opposite quiver: every arrow reversed.
    pub fn opposite(&self) -> QuiverMatrix {
        QuiverMatrix {
            size: self.size,
            data: self.data.iter().map(|v| -v).collect(),
        }
    }

    /// Largest absolute value among the entries.
    pub fn max_abs_entry(&self) -> i32 {
        self.data.iter().map(|v| v.abs()).max().unwrap_or(0)
    }

    /// Splits the vertex set into connected components of the underlying graph.
    ///
    /// Components are listed by their smallest vertex; vertices within a component
    /// are sorted.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.size];
        let mut out = Vec::new();
        for start in 0..self.size {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut component = vec![start];
            let mut stack = vec![start];
            while let Some(v) = stack.pop() {
                for w in 0..self.size {
                    if !seen[w] && self.get(v, w) != 0 {
                        seen[w] = true;
                        component.push(w);
                        stack.push(w);
                    }
                }
            }
            component.sort_unstable();
            out.push(component);
        }
        out
    }

    /// Returns the full submatrix on `vertices`, in the order given.
    pub fn submatrix(&self, vertices: &[usize]) -> QuiverMatrix {
        let mut out = QuiverMatrix::zero(vertices.len());
        for (a, &i) in vertices.iter().enumerate() {
            for (b, &j) in vertices.iter().enumerate() {
                out.data[a * vertices.len() + b] = self.get(i, j);
            }
        }
        out
    }

    fn rows(&self) -> Vec<Vec<i32>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<i32>>> for QuiverMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        QuiverMatrix::from_rows(rows)
    }
}

impl From<QuiverMatrix> for Vec<Vec<i32>> {
    fn from(matrix: QuiverMatrix) -> Self {
        matrix.rows()
    }
}

impl fmt::Display for QuiverMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for i in 0..self.size {
            write!(f, "{{ ")?;
            for value in self.row(i) {
                write!(f, "{} ", value)?;
            }
            write!(f, "}} ")?;
        }
        write!(f, "}}")
    }
}

/// Lexical token of the matrix text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Word(&'a str),
}

/// Splits input into braces and whitespace-separated words, with byte offsets.
fn tokenize(input: &str) -> Vec<(usize, Token<'_>)> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (offset, ch) in input.char_indices() {
        let boundary = ch.is_whitespace() || ch == '{' || ch == '}';
        if boundary {
            if let Some(s) = start.take() {
                tokens.push((s, Token::Word(&input[s..offset])));
            }
            match ch {
                '{' => tokens.push((offset, Token::Open)),
                '}' => tokens.push((offset, Token::Close)),
                _ => {}
            }
        } else if start.is_none() {
            start = Some(offset);
        }
    }
    if let Some(s) = start {
        tokens.push((s, Token::Word(&input[s..])));
    }
    tokens
}

fn unexpected(token: Option<&(usize, Token<'_>)>, end: usize) -> MatrixError {
    match token {
        Some((offset, Token::Open)) => MatrixError::UnexpectedToken {
            offset: *offset,
            found: "'{'".to_string(),
        },
        Some((offset, Token::Close)) => MatrixError::UnexpectedToken {
            offset: *offset,
            found: "'}'".to_string(),
        },
        Some((offset, Token::Word(w))) => MatrixError::UnexpectedToken {
            offset: *offset,
            found: format!("'{}'", w),
        },
        None => MatrixError::UnexpectedToken {
            offset: end,
            found: "end of input".to_string(),
        },
    }
}

impl FromStr for QuiverMatrix {
    type Err = MatrixError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(input);
        let end = input.len();
        let mut iter = tokens.iter().peekable();

        match iter.next() {
            Some((_, Token::Open)) => {}
            other => return Err(unexpected(other, end)),
        }

        let mut rows = Vec::new();
        loop {
            match iter.next() {
                Some((_, Token::Close)) => break,
                Some((_, Token::Open)) => {
                    let mut row = Vec::new();
                    loop {
                        match iter.next() {
                            Some((_, Token::Close)) => break,
                            Some((offset, Token::Word(w))) => {
                                let value = w.parse::<i32>().map_err(|_| {
                                    MatrixError::InvalidInteger {
                                        offset: *offset,
                                        token: (*w).to_string(),
                                    }
                                })?;
                                row.push(value);
                            }
                            other => return Err(unexpected(other, end)),
                        }
                    }
                    rows.push(row);
                }
                other => return Err(unexpected(other, end)),
            }
        }

        if let Some((offset, _)) = iter.next() {
            return Err(MatrixError::TrailingInput { offset: *offset });
        }
        QuiverMatrix::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let m: QuiverMatrix = "{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }".parse().unwrap();
        assert_eq!(m.num_vertices(), 3);
        assert_eq!(m.get(0, 1), 1);
        assert_eq!(m.get(2, 1), -1);
        assert_eq!(m.to_string(), "{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
    }

    #[test]
    fn parse_tolerates_irregular_whitespace() {
        let m: QuiverMatrix = "{{0  1}\n{-1 0}}  ".parse().unwrap();
        assert_eq!(m.to_string(), "{ { 0 1 } { -1 0 } }");
    }

    #[test]
    fn parse_empty_matrix() {
        let m: QuiverMatrix = "{ }".parse().unwrap();
        assert_eq!(m.num_vertices(), 0);
        assert_eq!(m.to_string(), "{ }");
    }

    #[test]
    fn parse_rejects_unbalanced_braces() {
        let err = "{ { 0 1 } { -1 0 }".parse::<QuiverMatrix>().unwrap_err();
        assert!(matches!(err, MatrixError::UnexpectedToken { .. }));
        let err = "{ { 0 1 } { -1 0 } } }".parse::<QuiverMatrix>().unwrap_err();
        assert!(matches!(err, MatrixError::TrailingInput { .. }));
    }

    #[test]
    fn parse_rejects_non_integer() {
        let err = "{ { 0 x } { -1 0 } }".parse::<QuiverMatrix>().unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidInteger {
                offset: 6,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_non_square_and_non_skew() {
        let err = "{ { 0 1 0 } { -1 0 } }".parse::<QuiverMatrix>().unwrap_err();
        assert!(matches!(err, MatrixError::NotSquare { rows: 2, row: 0, len: 3 }));
        let err = "{ { 0 1 } { 1 0 } }".parse::<QuiverMatrix>().unwrap_err();
        assert_eq!(err, MatrixError::NotSkewSymmetric { row: 0, col: 1 });
        let err = "{ { 1 0 } { 0 0 } }".parse::<QuiverMatrix>().unwrap_err();
        assert_eq!(err, MatrixError::NotSkewSymmetric { row: 0, col: 0 });
    }

    #[test]
    fn parse_rejects_unnegatable_entries() {
        let err = "{ { 0 -2147483648 } { -2147483648 0 } }"
            .parse::<QuiverMatrix>()
            .unwrap_err();
        assert_eq!(err, MatrixError::NotSkewSymmetric { row: 0, col: 1 });
        let err = "{ { 0 -2147483648 } { 2147483647 0 } }"
            .parse::<QuiverMatrix>()
            .unwrap_err();
        assert_eq!(err, MatrixError::NotSkewSymmetric { row: 0, col: 1 });
        let err = "{ { -2147483648 } }".parse::<QuiverMatrix>().unwrap_err();
        assert_eq!(err, MatrixError::NotSkewSymmetric { row: 0, col: 0 });
    }

    #[test]
    fn set_keeps_skew_symmetry() {
        let mut m = QuiverMatrix::zero(3);
        m.set(0, 2, 2);
        assert_eq!(m.get(2, 0), -2);
        m.set(1, 1, 5);
        assert_eq!(m.get(1, 1), 0);
    }

    #[test]
    fn permuted_relabels_vertices() {
        let m: QuiverMatrix = "{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }".parse().unwrap();
        // Vertex 0 -> 2, 1 -> 0, 2 -> 1.
        let p = m.permuted(&[2, 0, 1]);
        assert_eq!(p.get(2, 0), 1);
        assert_eq!(p.get(0, 1), 1);
        assert_eq!(p.get(1, 2), 0);
    }

    #[test]
    fn mutation_at_middle_of_path() {
        let m: QuiverMatrix = "{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }".parse().unwrap();
        let mutated = m.mutate(1);
        // 0 -> 1 -> 2 becomes 0 <- 1 <- 2 plus a new arrow 0 -> 2.
        assert_eq!(
            mutated.to_string(),
            "{ { 0 -1 1 } { 1 0 -1 } { -1 1 0 } }"
        );
        // Mutation is an involution.
        assert_eq!(mutated.mutate(1), m);
    }

    #[test]
    fn opposite_reverses_arrows() {
        let m: QuiverMatrix = "{ { 0 1 0 } { -1 0 2 } { 0 -2 0 } }".parse().unwrap();
        assert_eq!(m.opposite().to_string(), "{ { 0 -1 0 } { 1 0 -2 } { 0 2 0 } }");
        assert_eq!(m.opposite().opposite(), m);
    }

    #[test]
    fn components_split_disconnected_quiver() {
        let m: QuiverMatrix = "{ { 0 0 1 } { 0 0 0 } { -1 0 0 } }".parse().unwrap();
        assert_eq!(m.components(), vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn cbor_roundtrip_revalidates() {
        let m: QuiverMatrix = "{ { 0 2 } { -2 0 } }".parse().unwrap();
        let bytes = serde_cbor::to_vec(&m).unwrap();
        let back: QuiverMatrix = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(back, m);

        let bad = serde_cbor::to_vec(&vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert!(serde_cbor::from_slice::<QuiverMatrix>(&bad).is_err());
    }
}
