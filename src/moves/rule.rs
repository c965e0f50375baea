//! Move rule definitions.

use super::{Connection, Direction, MoveError, MoveKind, MoveMatch};
use crate::matrix::QuiverMatrix;
use serde::{Deserialize, Serialize};

/// A pattern/replacement pair over a window of vertices.
///
/// # Invariants
/// - `pattern` and `replacement` have the same dimension `m` (the window size).
/// - `pivots` are distinct window vertices, each with exactly one connection, and
///   every connection target is another pivot.
/// - Finiteness masks, when present, are `m × m`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleData", into = "RuleData")]
pub struct MoveRule {
    pattern: QuiverMatrix,
    replacement: QuiverMatrix,
    pivots: Vec<usize>,
    connections: Vec<Connection>,
    forward_mask: Option<QuiverMatrix>,
    reverse_mask: Option<QuiverMatrix>,
    kind: MoveKind,
}

/// Serialised form of a [`MoveRule`]; validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RuleData {
    pattern: QuiverMatrix,
    replacement: QuiverMatrix,
    pivots: Vec<usize>,
    connections: Vec<Connection>,
    #[serde(default)]
    forward_mask: Option<QuiverMatrix>,
    #[serde(default)]
    reverse_mask: Option<QuiverMatrix>,
    #[serde(default)]
    kind: MoveKind,
}

impl TryFrom<RuleData> for MoveRule {
    type Error = MoveError;

    fn try_from(data: RuleData) -> Result<Self, Self::Error> {
        let mut rule = MoveRule::new(data.pattern, data.replacement, data.pivots, data.connections)?
            .with_kind(data.kind);
        if let Some(mask) = data.forward_mask {
            rule = rule.with_forward_mask(mask)?;
        }
        if let Some(mask) = data.reverse_mask {
            rule = rule.with_reverse_mask(mask)?;
        }
        Ok(rule)
    }
}

impl From<MoveRule> for RuleData {
    fn from(rule: MoveRule) -> Self {
        RuleData {
            pattern: rule.pattern,
            replacement: rule.replacement,
            pivots: rule.pivots,
            connections: rule.connections,
            forward_mask: rule.forward_mask,
            reverse_mask: rule.reverse_mask,
            kind: rule.kind,
        }
    }
}

impl MoveRule {
    /// Creates a [`MoveKind::Standard`] rule without finiteness masks.
    ///
    /// `connections[k]` is the requirement of window vertex `pivots[k]`.
    pub fn new(
        pattern: QuiverMatrix,
        replacement: QuiverMatrix,
        pivots: Vec<usize>,
        connections: Vec<Connection>,
    ) -> Result<Self, MoveError> {
        let size = pattern.num_vertices();
        if replacement.num_vertices() != size {
            return Err(MoveError::DimensionMismatch {
                pattern: size,
                replacement: replacement.num_vertices(),
            });
        }
        for (k, &pivot) in pivots.iter().enumerate() {
            if pivot >= size {
                return Err(MoveError::PivotOutOfRange { pivot, size });
            }
            if pivots[..k].contains(&pivot) {
                return Err(MoveError::DuplicatePivot(pivot));
            }
        }
        if connections.len() != pivots.len() {
            return Err(MoveError::ConnectionCount {
                pivots: pivots.len(),
                connections: connections.len(),
            });
        }
        for (&pivot, connection) in pivots.iter().zip(&connections) {
            for &target in connection.targets() {
                if target == pivot || !pivots.contains(&target) {
                    return Err(MoveError::InvalidTarget { pivot, target });
                }
            }
        }
        Ok(Self {
            pattern,
            replacement,
            pivots,
            connections,
            forward_mask: None,
            reverse_mask: None,
            kind: MoveKind::Standard,
        })
    }

    /// Assembles a rule from parts already known to satisfy the invariants.
    pub(crate) fn from_parts(
        pattern: QuiverMatrix,
        replacement: QuiverMatrix,
        pivots: Vec<usize>,
        connections: Vec<Connection>,
        kind: MoveKind,
    ) -> Self {
        Self {
            pattern,
            replacement,
            pivots,
            connections,
            forward_mask: None,
            reverse_mask: None,
            kind,
        }
    }

    /// The leaf sink-source move: a leaf attached by a single arrow flips that arrow.
    ///
    /// `{ { 0 -1 } { 1 0 } } -> { { 0 1 } { -1 0 } }`, pivot 1, [`Connection::Unconnected`].
    pub fn sink_source() -> Self {
        let mut pattern = QuiverMatrix::zero(2);
        pattern.set(0, 1, -1);
        let replacement = pattern.opposite();
        Self::from_parts(
            pattern,
            replacement,
            vec![1],
            vec![Connection::Unconnected],
            MoveKind::SinkSource,
        )
    }

    /// Sets the depth counter this rule advances.
    pub fn with_kind(mut self, kind: MoveKind) -> Self {
        self.kind = kind;
        self
    }

    /// Requires the ambient quiver with the window replaced by `mask` to be
    /// mutation-finite before a forward application.
    pub fn with_forward_mask(mut self, mask: QuiverMatrix) -> Result<Self, MoveError> {
        self.check_mask(&mask)?;
        self.forward_mask = Some(mask);
        Ok(self)
    }

    /// Same as [`with_forward_mask`](Self::with_forward_mask) for reverse applications.
    pub fn with_reverse_mask(mut self, mask: QuiverMatrix) -> Result<Self, MoveError> {
        self.check_mask(&mask)?;
        self.reverse_mask = Some(mask);
        Ok(self)
    }

    fn check_mask(&self, mask: &QuiverMatrix) -> Result<(), MoveError> {
        if mask.num_vertices() != self.window_size() {
            return Err(MoveError::MaskDimension {
                expected: self.window_size(),
                found: mask.num_vertices(),
            });
        }
        Ok(())
    }

    /// Number of vertices in the window.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.pattern.num_vertices()
    }

    /// The pattern side.
    pub fn pattern(&self) -> &QuiverMatrix {
        &self.pattern
    }

    /// The replacement side.
    pub fn replacement(&self) -> &QuiverMatrix {
        &self.replacement
    }

    /// Pivot window vertices.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Connection requirements, aligned with [`pivots`](Self::pivots).
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The depth counter this rule advances.
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Whether window vertex `i` is a pivot.
    pub fn is_pivot(&self, i: usize) -> bool {
        self.pivots.contains(&i)
    }

    /// The block matched in `direction`.
    pub fn source(&self, direction: Direction) -> &QuiverMatrix {
        match direction {
            Direction::Forward => &self.pattern,
            Direction::Reverse => &self.replacement,
        }
    }

    /// The block written in `direction`.
    pub fn target(&self, direction: Direction) -> &QuiverMatrix {
        self.source(direction.reversed())
    }

    /// The finiteness mask gating `direction`, if any.
    pub fn mask(&self, direction: Direction) -> Option<&QuiverMatrix> {
        match direction {
            Direction::Forward => self.forward_mask.as_ref(),
            Direction::Reverse => self.reverse_mask.as_ref(),
        }
    }

    /// Returns `matrix` with the window block at `found` overwritten by the target block.
    ///
    /// Edges between the window and the rest are untouched.
    pub fn apply(&self, matrix: &QuiverMatrix, found: &MoveMatch) -> QuiverMatrix {
        overwrite(matrix, self.target(found.direction()), found.assignment())
    }
}

/// Copies `matrix` and writes `block[i][j]` at `(image[i], image[j])`.
pub(crate) fn overwrite(matrix: &QuiverMatrix, block: &QuiverMatrix, image: &[usize]) -> QuiverMatrix {
    let mut out = matrix.clone();
    for (i, &a) in image.iter().enumerate() {
        for (j, &b) in image.iter().enumerate().skip(i + 1) {
            out.set(a, b, block.get(i, j));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(text: &str) -> QuiverMatrix {
        text.parse().unwrap()
    }

    #[test]
    fn sink_source_rule_shape() {
        let rule = MoveRule::sink_source();
        assert_eq!(rule.kind(), MoveKind::SinkSource);
        assert_eq!(rule.pattern().to_string(), "{ { 0 -1 } { 1 0 } }");
        assert_eq!(rule.replacement().to_string(), "{ { 0 1 } { -1 0 } }");
        assert_eq!(rule.pivots(), &[1]);
        assert_eq!(rule.target(Direction::Reverse), rule.pattern());
    }

    #[test]
    fn validation_rejects_malformed_rules() {
        let two = m("{ { 0 1 } { -1 0 } }");
        let three = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
        assert_eq!(
            MoveRule::new(two.clone(), three.clone(), vec![], vec![]).unwrap_err(),
            MoveError::DimensionMismatch {
                pattern: 2,
                replacement: 3
            }
        );
        assert_eq!(
            MoveRule::new(two.clone(), two.clone(), vec![2], vec![Connection::Line]).unwrap_err(),
            MoveError::PivotOutOfRange { pivot: 2, size: 2 }
        );
        assert_eq!(
            MoveRule::new(
                two.clone(),
                two.clone(),
                vec![1, 1],
                vec![Connection::Line, Connection::Line]
            )
            .unwrap_err(),
            MoveError::DuplicatePivot(1)
        );
        assert_eq!(
            MoveRule::new(two.clone(), two.clone(), vec![1], vec![]).unwrap_err(),
            MoveError::ConnectionCount {
                pivots: 1,
                connections: 0
            }
        );
        assert_eq!(
            MoveRule::new(
                three.clone(),
                three.clone(),
                vec![0, 2],
                vec![Connection::connected_to([1]), Connection::Line]
            )
            .unwrap_err(),
            MoveError::InvalidTarget { pivot: 0, target: 1 }
        );
        assert_eq!(
            MoveRule::new(two.clone(), two, vec![], vec![])
                .unwrap()
                .with_forward_mask(three)
                .unwrap_err(),
            MoveError::MaskDimension {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn forward_then_reverse_restores_the_matrix() {
        let rule = MoveRule::sink_source();
        let q = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
        // Window vertex 0 (the leaf) on ambient 2, pivot on ambient 1.
        let image = vec![2, 1];
        let forward = MoveMatch::new(Direction::Forward, image.clone());
        let flipped = rule.apply(&q, &forward);
        assert_eq!(flipped.get(1, 2), -1);
        assert_eq!(flipped.get(0, 1), 1);
        let back = rule.apply(&flipped, &MoveMatch::new(Direction::Reverse, image));
        assert_eq!(back, q);
    }

    #[test]
    fn cbor_roundtrip_keeps_masks_and_kind() {
        let pattern = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
        let replacement = m("{ { 0 -1 1 } { 1 0 -1 } { -1 1 0 } }");
        let rule = MoveRule::new(
            pattern,
            replacement,
            vec![0, 2],
            vec![Connection::connected_to([2]), Connection::connected_to([0])],
        )
        .unwrap()
        .with_forward_mask(m("{ { 0 0 1 } { 0 0 0 } { -1 0 0 } }"))
        .unwrap()
        .with_kind(MoveKind::SinkSource);
        let bytes = serde_cbor::to_vec(&rule).unwrap();
        let back: MoveRule = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(back, rule);
        assert!(back.mask(Direction::Forward).is_some());
        assert!(back.mask(Direction::Reverse).is_none());
    }
}
