//! Lazy exploration of move classes.
//!
//! A move class is the set of quivers reachable from a seed through the rules of a
//! [`MoveLibrary`](crate::moves::MoveLibrary), taken up to relabelling of vertices.
//! [`MoveClassLoader`] discovers it one class member at a time.

mod loader;

pub use loader::MoveClassLoader;

use crate::moves::MoveKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of moves along the path by which a quiver was first discovered.
///
/// Displays as `moves(sink_source)`, e.g. `2(1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Depth {
    /// Ordinary moves.
    pub moves: u32,
    /// Sink-source moves.
    pub sink_source: u32,
}

impl Depth {
    /// Creates a depth from its two counters.
    pub const fn new(moves: u32, sink_source: u32) -> Self {
        Self { moves, sink_source }
    }

    /// The depth one move of `kind` further.
    pub fn advanced(self, kind: MoveKind) -> Self {
        match kind {
            MoveKind::Standard => Self {
                moves: self.moves + 1,
                ..self
            },
            MoveKind::SinkSource => Self {
                sink_source: self.sink_source + 1,
                ..self
            },
        }
    }

    /// Total number of moves of either kind.
    pub fn total(self) -> u32 {
        self.moves + self.sink_source
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.moves, self.sink_source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_touches_one_counter() {
        let d = Depth::default();
        assert_eq!(d.advanced(MoveKind::SinkSource), Depth::new(0, 1));
        assert_eq!(d.advanced(MoveKind::Standard), Depth::new(1, 0));
        assert_eq!(
            d.advanced(MoveKind::Standard)
                .advanced(MoveKind::SinkSource)
                .total(),
            2
        );
    }

    #[test]
    fn display_matches_report_format() {
        assert_eq!(Depth::new(3, 1).to_string(), "3(1)");
        assert_eq!(Depth::default().to_string(), "0(0)");
    }
}
