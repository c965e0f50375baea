//! Local quiver moves and their matching.
//!
//! A [`MoveRule`] rewrites a small window of vertices: wherever the ambient quiver
//! contains the rule's pattern on some vertices, attached to the rest of the quiver
//! only through the rule's pivots and as each pivot's [`Connection`] allows, the
//! pattern may be replaced by the rule's replacement. Every rule is usable in both
//! [`Direction`]s.
//!
//! [`MoveApplicator`] enumerates the assignments under which a rule applies.

mod connection;
mod matcher;
mod rule;

pub use connection::Connection;
pub use matcher::{MoveApplicator, MoveMatch};
pub use rule::MoveRule;

use serde::{Deserialize, Serialize};

/// Which side of a rule is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Match the pattern, write the replacement.
    Forward,
    /// Match the replacement, write the pattern.
    Reverse,
}

impl Direction {
    /// Both directions in exploration order.
    pub const BOTH: [Direction; 2] = [Direction::Forward, Direction::Reverse];

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Which depth counter an application of the rule advances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// An ordinary move.
    #[default]
    Standard,
    /// A sink-source move.
    SinkSource,
}

/// Error raised when a move rule is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Pattern and replacement have different dimensions.
    DimensionMismatch {
        /// Pattern dimension.
        pattern: usize,
        /// Replacement dimension.
        replacement: usize,
    },
    /// A pivot index lies outside the window.
    PivotOutOfRange {
        /// The pivot.
        pivot: usize,
        /// Window size.
        size: usize,
    },
    /// A pivot is listed twice.
    DuplicatePivot(usize),
    /// The number of connections differs from the number of pivots.
    ConnectionCount {
        /// Number of pivots.
        pivots: usize,
        /// Number of connections.
        connections: usize,
    },
    /// A connection refers to a vertex that is not another pivot.
    InvalidTarget {
        /// Pivot owning the connection.
        pivot: usize,
        /// Offending target.
        target: usize,
    },
    /// A finiteness mask does not have the window's dimension.
    MaskDimension {
        /// Window size.
        expected: usize,
        /// Mask dimension.
        found: usize,
    },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::DimensionMismatch {
                pattern,
                replacement,
            } => write!(
                f,
                "pattern is {0}x{0} but replacement is {1}x{1}",
                pattern, replacement
            ),
            MoveError::PivotOutOfRange { pivot, size } => {
                write!(f, "pivot {} outside a window of {} vertices", pivot, size)
            }
            MoveError::DuplicatePivot(p) => write!(f, "pivot {} listed twice", p),
            MoveError::ConnectionCount {
                pivots,
                connections,
            } => write!(
                f,
                "{} pivots but {} connection requirements",
                pivots, connections
            ),
            MoveError::InvalidTarget { pivot, target } => write!(
                f,
                "pivot {} refers to {}, which is not another pivot",
                pivot, target
            ),
            MoveError::MaskDimension { expected, found } => write!(
                f,
                "finiteness mask is {0}x{0}, expected {1}x{1}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for MoveError {}

/// Ordered list of move rules; the order is the exploration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveLibrary {
    rules: Vec<MoveRule>,
}

impl MoveLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: MoveRule) {
        self.rules.push(rule);
    }

    /// Rules in library order.
    pub fn iter(&self) -> std::slice::Iter<'_, MoveRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the library has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<MoveRule>> for MoveLibrary {
    fn from(rules: Vec<MoveRule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<MoveRule> for MoveLibrary {
    fn from_iter<I: IntoIterator<Item = MoveRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveLibrary {
    type Item = &'a MoveRule;
    type IntoIter = std::slice::Iter<'a, MoveRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
