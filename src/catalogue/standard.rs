//! Built-in move library and class representatives.
//!
//! The library starts with the sink-source family (leaf flips and star flips),
//! counted on the sink-source counter, followed by the mutation moves. Every
//! mutation move is listed next to its transpose, so both orientations of a
//! window are searched.

use super::CatalogueError;
use crate::matrix::QuiverMatrix;
use crate::moves::{Connection, MoveKind, MoveLibrary, MoveRule};

/// Pivot requirement as written in the tables below.
#[derive(Debug, Clone, Copy)]
enum Req {
    Unconnected,
    ConnectedTo(usize),
    Line,
    LineTo(usize),
}

use self::Req::*;

impl From<Req> for Connection {
    fn from(req: Req) -> Self {
        match req {
            Unconnected => Connection::Unconnected,
            ConnectedTo(target) => Connection::ConnectedTo(vec![target]),
            Line => Connection::Line,
            LineTo(target) => Connection::LineTo(target),
        }
    }
}

/// Static description of a mutation move.
#[derive(Debug, Clone, Copy)]
struct RuleEntry {
    pattern: &'static str,
    replacement: &'static str,
    pivots: &'static [(usize, Req)],
    forward_mask: Option<&'static str>,
    reverse_mask: Option<&'static str>,
}

const fn rule(
    pattern: &'static str,
    replacement: &'static str,
    pivots: &'static [(usize, Req)],
) -> RuleEntry {
    RuleEntry {
        pattern,
        replacement,
        pivots,
        forward_mask: None,
        reverse_mask: None,
    }
}

impl RuleEntry {
    const fn mask_forward(self, mask: &'static str) -> Self {
        RuleEntry {
            forward_mask: Some(mask),
            ..self
        }
    }

    const fn mask_both(self, forward: &'static str, reverse: &'static str) -> Self {
        RuleEntry {
            forward_mask: Some(forward),
            reverse_mask: Some(reverse),
            ..self
        }
    }

    fn build(&self) -> Result<MoveRule, CatalogueError> {
        let pivots = self.pivots.iter().map(|&(pivot, _)| pivot).collect();
        let connections = self.pivots.iter().map(|&(_, req)| req.into()).collect();
        let mut built = MoveRule::new(
            matrix(self.pattern)?,
            matrix(self.replacement)?,
            pivots,
            connections,
        )?;
        if let Some(mask) = self.forward_mask {
            built = built.with_forward_mask(matrix(mask)?)?;
        }
        if let Some(mask) = self.reverse_mask {
            built = built.with_reverse_mask(matrix(mask)?)?;
        }
        Ok(built)
    }
}

fn matrix(text: &str) -> Result<QuiverMatrix, CatalogueError> {
    Ok(text.parse()?)
}

/// Quiver on `size` vertices with a single arrow for each `(from, to)` pair.
fn quiver(size: usize, arrows: &[(usize, usize)]) -> QuiverMatrix {
    let mut matrix = QuiverMatrix::zero(size);
    for &(from, to) in arrows {
        matrix.set(from, to, 1);
    }
    matrix
}

/// Flips a source of degree `leaves` into a sink; every leaf must reach every
/// other leaf outside the window.
fn star(leaves: usize) -> MoveRule {
    let arrows: Vec<(usize, usize)> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    let pattern = quiver(leaves + 1, &arrows);
    let pivots: Vec<usize> = (1..=leaves).collect();
    let connections = pivots
        .iter()
        .map(|&p| Connection::connected_to(pivots.iter().copied().filter(|&q| q != p)))
        .collect();
    MoveRule::from_parts(
        pattern.clone(),
        pattern.opposite(),
        pivots,
        connections,
        MoveKind::SinkSource,
    )
}

/// Leaf flip, two leaves of a degree-two vertex joined outside the window, and
/// stars with three to five leaves.
fn sink_source_family() -> Vec<MoveRule> {
    let pair = quiver(3, &[(0, 1), (2, 1)]);
    let mut rules = vec![
        MoveRule::sink_source(),
        MoveRule::from_parts(
            pair.clone(),
            pair.opposite(),
            vec![0, 2],
            vec![Connection::connected_to([2]), Connection::connected_to([0])],
            MoveKind::SinkSource,
        ),
    ];
    rules.extend((3..=5).map(star));
    rules
}

/// The full built-in library, in exploration order.
pub(super) fn library() -> Result<MoveLibrary, CatalogueError> {
    let mut library: MoveLibrary = sink_source_family().into_iter().collect();
    for entry in MUTATION_MOVES {
        library.push(entry.build()?);
    }
    Ok(library)
}

/// The built-in class representatives.
pub(super) fn representatives() -> Result<Vec<QuiverMatrix>, CatalogueError> {
    REPRESENTATIVES.iter().copied().map(matrix).collect()
}

static MUTATION_MOVES: &[RuleEntry] = &[
    rule(
        "{ { 0 1 0 0 } { -1 0 1 1 } { 0 -1 0 0 } { 0 -1 0 0 } }",
        "{ { 0 -1 1 1 } { 1 0 -1 -1 } { -1 1 0 0 } { -1 1 0 0 } }",
        &[(0, Line), (2, ConnectedTo(3)), (3, ConnectedTo(2))],
    ),
    rule(
        "{ { 0 -1 0 0 } { 1 0 -1 -1 } { 0 1 0 0 } { 0 1 0 0 } }",
        "{ { 0 1 -1 -1 } { -1 0 1 1 } { 1 -1 0 0 } { 1 -1 0 0 } }",
        &[(0, Line), (2, ConnectedTo(3)), (3, ConnectedTo(2))],
    ),
    rule(
        "{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }",
        "{ { 0 -1 1 } { 1 0 -1 } { -1 1 0 } }",
        &[(0, Unconnected), (2, Line)],
    ),
    rule(
        "{ { 0 -1 0 } { 1 0 -1 } { 0 1 0 } }",
        "{ { 0 1 -1 } { -1 0 1 } { 1 -1 0 } }",
        &[(0, Unconnected), (2, Line)],
    ),
    rule(
        "{ { 0 0 -1 0 0 } { 0 0 -1 0 0 } { 1 1 0 1 -1 } { 0 0 -1 0 2 } { 0 0 1 -2 0 } }",
        "{ { 0 -1 0 0 1 } { 1 0 -1 1 -1 } { 0 1 0 0 1 } { 0 -1 0 0 1 } { -1 1 -1 -1 0 } }",
        &[(0, Unconnected)],
    ),
    rule(
        "{ { 0 1 0 0 0 } { -1 0 -1 -1 1 } { 0 1 0 0 0 } { 0 1 0 0 0 } { 0 -1 0 0 0 } }",
        "{ { 0 -1 0 0 1 } { 1 0 1 1 -1 } { 0 -1 0 0 1 } { 0 -1 0 0 1 } { -1 1 -1 -1 0 } }",
        &[(0, Unconnected), (4, Line)],
    ),
    rule(
        "{ { 0 -1 0 0 0 } { 1 0 1 1 -1 } { 0 -1 0 0 0 } { 0 -1 0 0 0 } { 0 1 0 0 0 } }",
        "{ { 0 1 0 0 -1 } { -1 0 -1 -1 1 } { 0 1 0 0 -1 } { 0 1 0 0 -1 } { 1 -1 1 1 0 } }",
        &[(0, Unconnected), (4, Line)],
    ),
    rule(
        "{ { 0 -1 -1 -1 -1 1 } { 1 0 0 0 0 0 } { 1 0 0 0 0 0 } { 1 0 0 0 0 0 } { 1 0 0 0 0 0 } { -1 0 0 0 0 0 } }",
        "{ { 0 1 1 1 1 -1 } { -1 0 0 0 0 1 } { -1 0 0 0 0 1 } { -1 0 0 0 0 1 } { -1 0 0 0 0 1 } { 1 -1 -1 -1 -1 0 } }",
        &[],
    ),
    rule(
        "{ { 0 -1 -1 -1 1 -1 } { 1 0 0 0 0 0 } { 1 0 0 0 0 0 } { 1 0 0 0 0 0 } { -1 0 0 0 0 2 } { 1 0 0 0 -2 0 } }",
        "{ { 0 1 1 1 -1 1 } { -1 0 0 0 1 0 } { -1 0 0 0 1 0 } { -1 0 0 0 1 0 } { 1 -1 -1 -1 0 1 } { -1 0 0 0 -1 0 } }",
        &[],
    ),
    rule(
        "{ { 0 1 0 -1 } { -1 0 1 1 } { 0 -1 0 -1 } { 1 -1 1 0 } }",
        "{ { 0 1 0 0 } { -1 0 -1 1 } { 0 1 0 -2 } { 0 -1 2 0 } }",
        &[(0, Unconnected)],
    ),
    rule(
        "{ { 0 -1 0 1 } { 1 0 -1 -1 } { 0 1 0 1 } { -1 1 -1 0 } }",
        "{ { 0 -1 0 0 } { 1 0 1 -1 } { 0 -1 0 2 } { 0 1 -2 0 } }",
        &[(0, Unconnected)],
    ),
    rule(
        "{ { 0 1 0 0 } { -1 0 1 -1 } { 0 -1 0 1 } { 0 1 -1 0 } }",
        "{ { 0 -1 1 0 } { 1 0 -1 1 } { -1 1 0 0 } { 0 -1 0 0 } }",
        &[(0, Unconnected), (2, LineTo(3)), (3, LineTo(2))],
    ),
    rule(
        "{ { 0 -1 0 0 } { 1 0 -1 1 } { 0 1 0 -1 } { 0 -1 1 0 } }",
        "{ { 0 1 -1 0 } { -1 0 1 -1 } { 1 -1 0 0 } { 0 1 0 0 } }",
        &[(0, Unconnected), (2, LineTo(3)), (3, LineTo(2))],
    ),
    rule(
        "{ { 0 1 0 0 0 } { -1 0 -1 1 -1 } { 0 1 0 0 0 } { 0 -1 0 0 1 } { 0 1 0 -1 0 } }",
        "{ { 0 -1 0 1 0 } { 1 0 1 -1 1 } { 0 -1 0 1 0 } { -1 1 -1 0 0 } { 0 -1 0 0 0 } }",
        &[(0, Unconnected), (3, LineTo(4)), (4, LineTo(3))],
    ),
    rule(
        "{ { 0 -1 0 0 0 } { 1 0 1 -1 1 } { 0 -1 0 0 0 } { 0 1 0 0 -1 } { 0 -1 0 1 0 } }",
        "{ { 0 1 0 -1 0 } { -1 0 -1 1 -1 } { 0 1 0 -1 0 } { 1 -1 1 0 0 } { 0 1 0 0 0 } }",
        &[(0, Unconnected), (3, LineTo(4)), (4, LineTo(3))],
    ),
    rule(
        "{ { 0 0 -1 0 0 0 } { 0 0 -1 0 0 0 } { 1 1 0 1 -1 0 } { 0 0 -1 0 1 -1 } { 0 0 1 -1 0 1 } { 0 0 0 1 -1 0 } }",
        "{ { 0 1 0 0 -1 0 } { -1 0 -1 -1 1 0 } { 0 1 0 0 0 -1 } { 0 1 0 0 -1 0 } { 1 -1 0 1 0 1 } { 0 0 1 0 -1 0 } }",
        &[(5, Line)],
    ),
    rule(
        "{ { 0 0 1 0 0 0 } { 0 0 1 0 0 0 } { -1 -1 0 -1 1 0 } { 0 0 1 0 -1 1 } { 0 0 -1 1 0 -1 } { 0 0 0 -1 1 0 } }",
        "{ { 0 -1 0 0 1 0 } { 1 0 1 1 -1 0 } { 0 -1 0 0 0 1 } { 0 -1 0 0 1 0 } { -1 1 0 -1 0 -1 } { 0 0 -1 0 1 0 } }",
        &[(5, Line)],
    ),
    rule(
        "{ { 0 1 0 0 0 } { -1 0 -1 0 0 } { 0 1 0 -1 1 } { 0 0 1 0 0 } { 0 0 -1 0 0 } }",
        "{ { 0 -1 1 0 0 } { 1 0 -1 1 0 } { -1 1 0 0 -1 } { 0 -1 0 0 1 } { 0 0 1 -1 0 } }",
        &[(0, Unconnected), (3, Line), (4, Line)],
    ),
    rule(
        "{ { 0 1 0 -1 } { -1 0 -1 1 } { 0 1 0 0 } { 1 -1 0 0 } }",
        "{ { 0 -1 0 0 } { 1 0 1 -1 } { 0 -1 0 1 } { 0 1 -1 0 } }",
        &[(0, Unconnected), (2, Unconnected), (3, Unconnected)],
    ),
    rule(
        "{ { 0 -1 0 0 0 0 } { 1 0 1 0 0 0 } { 0 -1 0 1 -1 0 } { 0 0 -1 0 0 0 } { 0 0 1 0 0 1 } { 0 0 0 0 -1 0 } }",
        "{ { 0 1 -1 0 0 0 } { -1 0 1 -1 0 0 } { 1 -1 0 1 -1 1 } { 0 1 -1 0 1 0 } { 0 0 1 -1 0 -1 } { 0 0 -1 0 1 0 } }",
        &[(0, Line), (3, Line), (5, Line)],
    ),
    rule(
        "{ { 0 1 0 0 0 0 } { -1 0 -1 0 0 0 } { 0 1 0 -1 1 0 } { 0 0 1 0 0 0 } { 0 0 -1 0 0 -1 } { 0 0 0 0 1 0 } }",
        "{ { 0 -1 1 0 0 0 } { 1 0 -1 1 0 0 } { -1 1 0 -1 1 -1 } { 0 -1 1 0 -1 0 } { 0 0 -1 1 0 1 } { 0 0 1 0 -1 0 } }",
        &[(0, Line), (3, Line), (5, Line)],
    ),
    rule(
        "{ { 0 0 0 -1 1 } { 0 0 0 0 -1 } { 0 0 0 -1 1 } { 1 0 1 0 -1 } { -1 1 -1 1 0 } }",
        "{ { 0 1 0 0 -1 } { -1 0 -1 0 1 } { 0 1 0 0 -1 } { 0 0 0 0 1 } { 1 -1 1 -1 0 } }",
        &[(0, Unconnected), (1, Unconnected), (2, Unconnected), (3, Unconnected)],
    ),
    rule(
        "{ { 0 1 0 0 0 0 0 0 } { -1 0 -1 1 0 0 0 0 } { 0 1 0 0 0 0 0 0 } { 0 -1 0 0 -1 0 0 0 } { 0 0 0 1 0 1 -1 0 } { 0 0 0 0 -1 0 0 0 } { 0 0 0 0 1 0 0 1 } { 0 0 0 0 0 0 -1 0 } }",
        "{ { 0 -1 0 0 1 0 0 0 } { 1 0 1 1 -1 0 0 0 } { 0 -1 0 0 1 0 0 0 } { 0 -1 0 0 0 0 1 0 } { -1 1 -1 0 0 -1 0 0 } { 0 0 0 0 1 0 -1 0 } { 0 0 0 -1 0 1 0 1 } { 0 0 0 0 0 0 -1 0 } }",
        &[],
    ),
    rule(
        "{ { 0 1 0 0 -1 0 0 -1 } { -1 0 -1 0 1 0 -1 0 } { 0 1 0 -1 0 0 0 0 } { 0 0 1 0 -1 0 0 0 } { 1 -1 0 1 0 1 0 0 } { 0 0 0 0 -1 0 1 0 } { 0 1 0 0 0 -1 0 0 } { 1 0 0 0 0 0 0 0 } }",
        "{ { 0 0 0 0 1 0 0 -1 } { 0 0 -1 1 -1 1 -1 0 } { 0 1 0 -1 0 0 0 0 } { 0 -1 1 0 1 0 0 0 } { -1 1 0 -1 0 -1 0 0 } { 0 -1 0 0 1 0 1 0 } { 0 1 0 0 0 -1 0 0 } { 1 0 0 0 0 0 0 0 } }",
        &[],
    ),
    rule(
        "{ { 0 1 0 0 0 -1 } { -1 0 -1 0 0 1 } { 0 1 0 -1 0 0 } { 0 0 1 0 -1 0 } { 0 0 0 1 0 -1 } { 1 -1 0 0 1 0 } }",
        "{ { 0 0 0 0 0 1 } { 0 0 -1 0 1 -1 } { 0 1 0 -1 0 0 } { 0 0 1 0 -1 0 } { 0 -1 0 1 0 1 } { -1 1 0 0 -1 0 } }",
        &[(0, Unconnected), (3, Line), (4, Unconnected)],
    ),
    rule(
        "{ { 0 -1 1 -1 0 } { 1 0 -1 0 0 } { -1 1 0 1 -1 } { 1 0 -1 0 1 } { 0 0 1 -1 0 } }",
        "{ { 0 -1 0 0 0 } { 1 0 -1 1 0 } { 0 1 0 0 0 } { 0 -1 0 0 1 } { 0 0 0 -1 0 } }",
        &[(0, Line), (4, Line)],
    ),
    rule(
        "{ { 0 1 -1 1 0 } { -1 0 1 0 0 } { 1 -1 0 -1 1 } { -1 0 1 0 -1 } { 0 0 -1 1 0 } }",
        "{ { 0 1 0 0 0 } { -1 0 1 -1 0 } { 0 -1 0 0 0 } { 0 1 0 0 -1 } { 0 0 0 1 0 } }",
        &[(0, Line), (4, Line)],
    ),
    rule(
        "{ { 0 -1 0 1 } { 1 0 -1 0 } { 0 1 0 -1 } { -1 0 1 0 } }",
        "{ { 0 1 0 0 } { -1 0 1 1 } { 0 -1 0 0 } { 0 -1 0 0 } }",
        &[(0, Line), (3, Line)],
    ),
    rule(
        "{ { 0 -1 1 0 0 0 } { 1 0 -1 0 0 0 } { -1 1 0 1 0 0 } { 0 0 -1 0 1 1 } { 0 0 0 -1 0 0 } { 0 0 0 -1 0 0 } }",
        "{ { 0 -1 1 0 0 0 } { 1 0 -1 0 0 0 } { -1 1 0 -1 1 1 } { 0 0 1 0 -1 -1 } { 0 0 -1 1 0 0 } { 0 0 -1 1 0 0 } }",
        &[(0, ConnectedTo(5)), (1, Line), (5, ConnectedTo(0))],
    ),
    rule(
        "{ { 0 1 -1 0 0 0 } { -1 0 1 0 0 0 } { 1 -1 0 -1 0 0 } { 0 0 1 0 -1 -1 } { 0 0 0 1 0 0 } { 0 0 0 1 0 0 } }",
        "{ { 0 1 -1 0 0 0 } { -1 0 1 0 0 0 } { 1 -1 0 1 -1 -1 } { 0 0 -1 0 1 1 } { 0 0 1 -1 0 0 } { 0 0 1 -1 0 0 } }",
        &[(0, ConnectedTo(5)), (1, Line), (5, ConnectedTo(0))],
    ),
    rule(
        "{ { 0 1 -1 0 0 0 } { -1 0 1 -1 0 0 } { 1 -1 0 1 -1 0 } { 0 1 -1 0 1 -1 } { 0 0 1 -1 0 1 } { 0 0 0 1 -1 0 } }",
        "{ { 0 -1 0 0 0 0 } { 1 0 1 0 0 0 } { 0 -1 0 1 -1 0 } { 0 0 -1 0 0 0 } { 0 0 1 0 0 -1 } { 0 0 0 0 1 0 } }",
        &[(0, Line), (5, Line)],
    ),
    rule(
        "{ { 0 -1 1 0 0 0 } { 1 0 -1 1 0 0 } { -1 1 0 -1 1 0 } { 0 -1 1 0 -1 1 } { 0 0 -1 1 0 -1 } { 0 0 0 -1 1 0 } }",
        "{ { 0 1 0 0 0 0 } { -1 0 -1 0 0 0 } { 0 1 0 -1 1 0 } { 0 0 1 0 0 0 } { 0 0 -1 0 0 1 } { 0 0 0 0 -1 0 } }",
        &[(0, Line), (5, Line)],
    ),
    rule(
        "{ { 0 1 -1 0 0 0 } { -1 0 1 1 0 -1 } { 1 -1 0 0 -1 1 } { 0 -1 0 0 0 1 } { 0 0 1 0 0 -1 } { 0 1 -1 -1 1 0 } }",
        "{ { 0 1 0 0 0 0 } { -1 0 -1 0 0 0 } { 0 1 0 -1 0 0 } { 0 0 1 0 -1 1 } { 0 0 0 1 0 0 } { 0 0 0 -1 0 0 } }",
        &[(0, Line), (5, Line)],
    ),
    rule(
        "{ { 0 -1 0 1 0 0 0 } { 1 0 -1 -1 1 0 0 } { 0 1 0 0 0 0 0 } { -1 1 0 0 -1 1 -1 } { 0 -1 0 1 0 -1 0 } { 0 0 0 -1 1 0 1 } { 0 0 0 1 0 -1 0 } }",
        "{ { 0 1 0 0 0 0 0 } { -1 0 -1 0 0 0 0 } { 0 1 0 -1 -1 0 0 } { 0 0 1 0 0 0 0 } { 0 0 1 0 0 1 0 } { 0 0 0 0 -1 0 1 } { 0 0 0 0 0 -1 0 } }",
        &[(0, Line), (6, Line)],
    ),
    rule(
        "{ { 0 1 0 -1 0 0 0 } { -1 0 1 1 -1 0 0 } { 0 -1 0 0 0 0 0 } { 1 -1 0 0 1 -1 1 } { 0 1 0 -1 0 1 0 } { 0 0 0 1 -1 0 -1 } { 0 0 0 -1 0 1 0 } }",
        "{ { 0 -1 0 0 0 0 0 } { 1 0 1 0 0 0 0 } { 0 -1 0 1 1 0 0 } { 0 0 -1 0 0 0 0 } { 0 0 -1 0 0 -1 0 } { 0 0 0 0 1 0 -1 } { 0 0 0 0 0 1 0 } }",
        &[(0, Line), (6, Line)],
    ),
    rule(
        "{ { 0 1 -1 0 0 0 } { -1 0 1 -1 0 0 } { 1 -1 0 0 -1 1 } { 0 1 0 0 0 -1 } { 0 0 1 0 0 -1 } { 0 0 -1 1 1 0 } }",
        "{ { 0 1 0 0 0 0 } { -1 0 1 0 0 0 } { 0 -1 0 -1 0 0 } { 0 0 1 0 1 -1 } { 0 0 0 -1 0 0 } { 0 0 0 1 0 0 } }",
        &[(0, Line), (5, Line)],
    ),
    rule(
        "{ { 0 -1 1 0 0 0 } { 1 0 -1 1 0 0 } { -1 1 0 0 1 -1 } { 0 -1 0 0 0 1 } { 0 0 -1 0 0 1 } { 0 0 1 -1 -1 0 } }",
        "{ { 0 -1 0 0 0 0 } { 1 0 -1 0 0 0 } { 0 1 0 1 0 0 } { 0 0 -1 0 -1 1 } { 0 0 0 1 0 0 } { 0 0 0 -1 0 0 } }",
        &[(0, Line), (5, Line)],
    ),
    rule(
        "{ { 0 1 -1 0 0 0 } { -1 0 1 0 0 -1 } { 1 -1 0 -1 1 0 } { 0 0 1 0 0 0 } { 0 0 -1 0 0 1 } { 0 1 0 0 -1 0 } }",
        "{ { 0 0 -1 0 0 0 } { 0 0 -1 -1 1 0 } { 1 1 0 0 0 0 } { 0 1 0 0 0 -1 } { 0 -1 0 0 0 0 } { 0 0 0 1 0 0 } }",
        &[(0, Line), (5, Line)],
    ),
    rule(
        "{ { 0 -1 1 0 0 0 } { 1 0 -1 0 0 1 } { -1 1 0 1 -1 0 } { 0 0 -1 0 0 0 } { 0 0 1 0 0 -1 } { 0 -1 0 0 1 0 } }",
        "{ { 0 0 1 0 0 0 } { 0 0 1 1 -1 0 } { -1 -1 0 0 0 0 } { 0 -1 0 0 0 1 } { 0 1 0 0 0 0 } { 0 0 0 -1 0 0 } }",
        &[(0, Line), (5, Line)],
    ),
    rule(
        "{ { 0 -1 0 1 0 0 0 } { 1 0 1 -1 0 0 0 } { 0 -1 0 1 0 -1 0 } { -1 1 -1 0 1 0 0 } { 0 0 0 -1 0 1 -1 } { 0 0 1 0 -1 0 1 } { 0 0 0 0 1 -1 0 } }",
        "{ { 0 1 0 0 0 0 0 } { -1 0 -1 0 0 0 0 } { 0 1 0 -1 -1 0 0 } { 0 0 1 0 0 0 0 } { 0 0 1 0 0 1 0 } { 0 0 0 0 -1 0 1 } { 0 0 0 0 0 -1 0 } }",
        &[(0, Line), (6, Line)],
    ),
    rule(
        "{ { 0 1 0 -1 0 0 0 } { -1 0 -1 1 0 0 0 } { 0 1 0 -1 0 1 0 } { 1 -1 1 0 -1 0 0 } { 0 0 0 1 0 -1 1 } { 0 0 -1 0 1 0 -1 } { 0 0 0 0 -1 1 0 } }",
        "{ { 0 -1 0 0 0 0 0 } { 1 0 1 0 0 0 0 } { 0 -1 0 1 1 0 0 } { 0 0 -1 0 0 0 0 } { 0 0 -1 0 0 -1 0 } { 0 0 0 0 1 0 -1 } { 0 0 0 0 0 1 0 } }",
        &[(0, Line), (6, Line)],
    ),
    rule(
        "{ { 0 -1 1 0 0 0 0 0 } { 1 0 -1 1 0 0 0 0 } { -1 1 0 0 -1 0 0 0 } { 0 -1 0 0 1 -1 0 0 } { 0 0 1 -1 0 0 1 0 } { 0 0 0 1 0 0 -1 1 } { 0 0 0 0 -1 1 0 -1 } { 0 0 0 0 0 -1 1 0 } }",
        "{ { 0 1 0 0 0 0 0 0 } { -1 0 -1 0 0 0 0 0 } { 0 1 0 1 0 0 0 0 } { 0 0 -1 0 1 -1 0 0 } { 0 0 0 -1 0 0 0 0 } { 0 0 0 1 0 0 1 0 } { 0 0 0 0 0 -1 0 -1 } { 0 0 0 0 0 0 1 0 } }",
        &[(0, Line), (7, Line)],
    ),
    rule(
        "{ { 0 -1 1 0 0 -1 } { 1 0 -1 0 0 0 } { -1 1 0 1 0 0 } { 0 0 -1 0 1 1 } { 0 0 0 -1 0 0 } { 1 0 0 -1 0 0 } }",
        "{ { 0 -1 1 0 0 -1 } { 1 0 -1 0 0 0 } { -1 1 0 -1 1 1 } { 0 0 1 0 -1 -1 } { 0 0 -1 1 0 0 } { 1 0 -1 1 0 0 } }",
        &[(0, ConnectedTo(5)), (1, Line), (5, ConnectedTo(0))],
    ),
    rule(
        "{ { 0 -1 0 0 0 0 0 0 0 } { 1 0 1 0 0 0 -1 0 0 } { 0 -1 0 -1 0 0 1 0 0 } { 0 0 1 0 -1 0 0 1 0 } { 0 0 0 1 0 -1 0 0 0 } { 0 0 0 0 1 0 -1 0 1 } { 0 1 -1 0 0 1 0 0 0 } { 0 0 0 -1 0 0 0 0 0 } { 0 0 0 0 0 -1 0 0 0 } }",
        "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 } { 0 -1 0 -1 0 0 0 0 0 } { 0 0 1 0 1 0 0 0 0 } { 0 0 0 -1 0 -1 1 0 0 } { 0 0 0 0 1 0 0 0 0 } { 0 0 0 0 -1 0 0 1 0 } { 0 0 0 0 0 0 -1 0 -1 } { 0 0 0 0 0 0 0 1 0 } }",
        &[],
    ),
    rule(
        "{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }",
        "{ { 0 -1 1 } { 1 0 -1 } { -1 1 0 } }",
        &[(0, ConnectedTo(2)), (2, ConnectedTo(0))],
    )
    .mask_both(
        "{ { 0 0 1 } { 0 0 0 } { -1 0 0 } }",
        "{ { 0 0 0 } { 0 0 0 } { 0 0 0 } }",
    ),
    rule(
        "{ { 0 -1 0 } { 1 0 -1 } { 0 1 0 } }",
        "{ { 0 1 -1 } { -1 0 1 } { 1 -1 0 } }",
        &[(0, ConnectedTo(2)), (2, ConnectedTo(0))],
    )
    .mask_both(
        "{ { 0 0 -1 } { 0 0 0 } { 1 0 0 } }",
        "{ { 0 0 0 } { 0 0 0 } { 0 0 0 } }",
    ),
    rule(
        "{ { 0 1 -1 0 0 } { -1 0 1 0 -1 } { 1 -1 0 1 0 } { 0 0 -1 0 1 } { 0 1 0 -1 0 } }",
        "{ { 0 -1 0 0 0 } { 1 0 -1 0 1 } { 0 1 0 1 -1 } { 0 0 -1 0 1 } { 0 -1 1 -1 0 } }",
        &[(2, Unconnected), (4, Unconnected)],
    )
    .mask_forward("{ { 0 0 0 0 0 } { 0 0 -1 0 0 } { 0 1 0 1 0 } { 0 0 -1 0 1 } { 0 0 0 -1 0 } }"),
    rule(
        "{ { 0 -1 1 0 0 } { 1 0 -1 0 1 } { -1 1 0 -1 0 } { 0 0 1 0 -1 } { 0 -1 0 1 0 } }",
        "{ { 0 1 0 0 0 } { -1 0 1 0 -1 } { 0 -1 0 -1 1 } { 0 0 1 0 -1 } { 0 1 -1 1 0 } }",
        &[(2, Unconnected), (4, Unconnected)],
    )
    .mask_forward("{ { 0 0 0 0 0 } { 0 0 1 0 0 } { 0 -1 0 -1 0 } { 0 0 1 0 -1 } { 0 0 0 1 0 } }"),
    rule(
        "{ { 0 -1 0 0 0 0 0 0 } { 1 0 -1 0 0 0 0 1 } { 0 1 0 1 0 0 0 -1 } { 0 0 -1 0 1 0 0 0 } { 0 0 0 -1 0 1 0 0 } { 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 -1 0 0 } { 0 -1 1 0 0 0 0 0 } }",
        "{ { 0 1 -1 0 0 0 0 0 } { -1 0 1 0 0 0 0 -1 } { 1 -1 0 1 0 0 0 0 } { 0 0 -1 0 1 0 0 0 } { 0 0 0 -1 0 1 0 0 } { 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 -1 0 0 } { 0 1 0 0 0 0 0 0 } }",
        &[(0, Line), (5, LineTo(7)), (7, LineTo(5))],
    )
    .mask_forward("{ { 0 0 -1 0 0 0 0 0 } { 0 0 0 0 0 0 0 0 } { 1 0 0 1 0 0 0 0 } { 0 0 -1 0 1 0 0 0 } { 0 0 0 -1 0 1 0 0 } { 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 -1 0 0 } { 0 0 0 0 0 0 0 0 } }"),
    rule(
        "{ { 0 1 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 -1 } { 0 -1 0 -1 0 0 0 1 } { 0 0 1 0 -1 0 0 0 } { 0 0 0 1 0 -1 0 0 } { 0 0 0 0 1 0 -1 0 } { 0 0 0 0 0 1 0 0 } { 0 1 -1 0 0 0 0 0 } }",
        "{ { 0 -1 1 0 0 0 0 0 } { 1 0 -1 0 0 0 0 1 } { -1 1 0 -1 0 0 0 0 } { 0 0 1 0 -1 0 0 0 } { 0 0 0 1 0 -1 0 0 } { 0 0 0 0 1 0 -1 0 } { 0 0 0 0 0 1 0 0 } { 0 -1 0 0 0 0 0 0 } }",
        &[(0, Line), (5, LineTo(7)), (7, LineTo(5))],
    )
    .mask_forward("{ { 0 0 1 0 0 0 0 0 } { 0 0 0 0 0 0 0 0 } { -1 0 0 -1 0 0 0 0 } { 0 0 1 0 -1 0 0 0 } { 0 0 0 1 0 -1 0 0 } { 0 0 0 0 1 0 -1 0 } { 0 0 0 0 0 1 0 0 } { 0 0 0 0 0 0 0 0 } }"),
    rule(
        "{ { 0 -1 0 0 0 0 0 } { 1 0 -1 0 0 1 0 } { 0 1 0 1 0 -1 0 } { 0 0 -1 0 1 0 0 } { 0 0 0 -1 0 1 0 } { 0 -1 1 0 -1 0 1 } { 0 0 0 0 0 -1 0 } }",
        "{ { 0 1 -1 0 0 0 0 } { -1 0 1 0 0 -1 0 } { 1 -1 0 1 0 0 0 } { 0 0 -1 0 1 0 0 } { 0 0 0 -1 0 1 0 } { 0 1 0 0 -1 0 1 } { 0 0 0 0 0 -1 0 } }",
        &[(0, Line)],
    ),
    rule(
        "{ { 0 -1 0 0 0 0 0 0 } { 1 0 1 -1 0 0 0 0 } { 0 -1 0 1 0 0 -1 0 } { 0 1 -1 0 1 0 0 0 } { 0 0 0 -1 0 1 0 0 } { 0 0 0 0 -1 0 1 0 } { 0 0 1 0 0 -1 0 1 } { 0 0 0 0 0 0 -1 0 } }",
        "{ { 0 1 0 -1 0 0 0 0 } { -1 0 -1 1 0 0 0 0 } { 0 1 0 0 0 0 -1 0 } { 1 -1 0 0 1 0 0 0 } { 0 0 0 -1 0 1 0 0 } { 0 0 0 0 -1 0 1 0 } { 0 0 1 0 0 -1 0 1 } { 0 0 0 0 0 0 -1 0 } }",
        &[(0, Line)],
    ),
    rule(
        "{ { 0 1 0 0 0 0 0 0 } { -1 0 -1 1 0 0 0 0 } { 0 1 0 -1 0 0 1 0 } { 0 -1 1 0 -1 0 0 0 } { 0 0 0 1 0 -1 0 0 } { 0 0 0 0 1 0 -1 0 } { 0 0 -1 0 0 1 0 -1 } { 0 0 0 0 0 0 1 0 } }",
        "{ { 0 -1 0 1 0 0 0 0 } { 1 0 1 -1 0 0 0 0 } { 0 -1 0 0 0 0 1 0 } { -1 1 0 0 -1 0 0 0 } { 0 0 0 1 0 -1 0 0 } { 0 0 0 0 1 0 -1 0 } { 0 0 -1 0 0 1 0 -1 } { 0 0 0 0 0 0 1 0 } }",
        &[(0, Line)],
    ),
    rule(
        "{ { 0 1 0 0 0 0 } { -1 0 1 0 0 0 } { 0 -1 0 -1 0 1 } { 0 0 1 0 1 -1 } { 0 0 0 -1 0 0 } { 0 0 -1 1 0 0 } }",
        "{ { 0 -1 1 0 0 0 } { 1 0 -1 0 0 0 } { -1 1 0 1 0 0 } { 0 0 -1 0 -1 1 } { 0 0 0 1 0 -1 } { 0 0 0 -1 1 0 } }",
        &[(0, ConnectedTo(5)), (5, ConnectedTo(0)), (4, Line)],
    )
    .mask_both(
        "{ { 0 -1 1 0 0 0 } { 1 0 -1 0 0 0 } { -1 1 0 0 0 0 } { 0 0 0 0 0 0 } { 0 0 0 0 0 -1 } { 0 0 0 0 1 0 } }",
        "{ { 0 0 0 0 0 0 } { 0 0 0 0 0 0 } { 0 0 0 -1 0 1 } { 0 0 1 0 1 -1 } { 0 0 0 -1 0 0 } { 0 0 -1 1 0 0 } }",
    ),
    rule(
        "{ { 0 -1 0 0 0 0 } { 1 0 -1 0 0 0 } { 0 1 0 1 0 -1 } { 0 0 -1 0 -1 1 } { 0 0 0 1 0 0 } { 0 0 1 -1 0 0 } }",
        "{ { 0 1 -1 0 0 0 } { -1 0 1 0 0 0 } { 1 -1 0 -1 0 0 } { 0 0 1 0 1 -1 } { 0 0 0 -1 0 1 } { 0 0 0 1 -1 0 } }",
        &[(0, ConnectedTo(5)), (5, ConnectedTo(0)), (4, Line)],
    )
    .mask_both(
        "{ { 0 1 -1 0 0 0 } { -1 0 1 0 0 0 } { 1 -1 0 0 0 0 } { 0 0 0 0 0 0 } { 0 0 0 0 0 1 } { 0 0 0 0 -1 0 } }",
        "{ { 0 0 0 0 0 0 } { 0 0 0 0 0 0 } { 0 0 0 1 0 -1 } { 0 0 -1 0 -1 1 } { 0 0 0 1 0 0 } { 0 0 1 -1 0 0 } }",
    ),
    rule(
        "{ { 0 1 0 -1 0 0 } { -1 0 1 1 0 0 } { 0 -1 0 0 0 0 } { 1 -1 0 0 1 -1 } { 0 0 0 -1 0 1 } { 0 0 0 1 -1 0 } }",
        "{ { 0 -1 1 0 0 0 } { 1 0 -1 -1 0 0 } { -1 1 0 0 0 0 } { 0 1 0 0 1 -1 } { 0 0 0 -1 0 1 } { 0 0 0 1 -1 0 } }",
        &[(0, ConnectedTo(5)), (5, ConnectedTo(0)), (2, Line)],
    )
    .mask_forward("{ { 0 0 1 0 0 0 } { 0 0 0 0 0 0 } { -1 0 0 0 0 0 } { 0 0 0 0 -1 0 } { 0 0 0 1 0 -1 } { 0 0 0 0 1 0 } }"),
    rule(
        "{ { 0 -1 0 1 0 0 } { 1 0 -1 -1 0 0 } { 0 1 0 0 0 0 } { -1 1 0 0 -1 1 } { 0 0 0 1 0 -1 } { 0 0 0 -1 1 0 } }",
        "{ { 0 1 -1 0 0 0 } { -1 0 1 1 0 0 } { 1 -1 0 0 0 0 } { 0 -1 0 0 -1 1 } { 0 0 0 1 0 -1 } { 0 0 0 -1 1 0 } }",
        &[(0, ConnectedTo(5)), (5, ConnectedTo(0)), (2, Line)],
    )
    .mask_forward("{ { 0 0 -1 0 0 0 } { 0 0 0 0 0 0 } { 1 0 0 0 0 0 } { 0 0 0 0 1 0 } { 0 0 0 -1 0 1 } { 0 0 0 0 -1 0 } }"),
    rule(
        "{ { 0 -1 0 0 0 } { 1 0 1 0 -1 } { 0 -1 0 -1 1 } { 0 0 1 0 0 } { 0 1 -1 0 0 } }",
        "{ { 0 1 -1 0 0 } { -1 0 1 0 0 } { 1 -1 0 1 -1 } { 0 0 -1 0 1 } { 0 0 1 -1 0 } }",
        &[(0, ConnectedTo(4)), (4, ConnectedTo(0)), (3, Line)],
    )
    .mask_both(
        "{ { 0 1 0 0 0 } { -1 0 0 0 0 } { 0 0 0 0 0 } { 0 0 0 0 1 } { 0 0 0 -1 0 } }",
        "{ { 0 0 0 0 0 } { 0 0 0 0 0 } { 0 0 0 1 0 } { 0 0 -1 0 1 } { 0 0 0 -1 0 } }",
    ),
    rule(
        "{ { 0 1 0 0 0 } { -1 0 -1 0 1 } { 0 1 0 1 -1 } { 0 0 -1 0 0 } { 0 -1 1 0 0 } }",
        "{ { 0 -1 1 0 0 } { 1 0 -1 0 0 } { -1 1 0 -1 1 } { 0 0 1 0 -1 } { 0 0 -1 1 0 } }",
        &[(0, ConnectedTo(4)), (4, ConnectedTo(0)), (3, Line)],
    )
    .mask_both(
        "{ { 0 -1 0 0 0 } { 1 0 0 0 0 } { 0 0 0 0 0 } { 0 0 0 0 -1 } { 0 0 0 1 0 } }",
        "{ { 0 0 0 0 0 } { 0 0 0 0 0 } { 0 0 0 -1 0 } { 0 0 1 0 -1 } { 0 0 0 1 0 } }",
    ),
    rule(
        "{ { 0 -1 0 0 0 0 1 0 } { 1 0 1 0 0 0 -1 0 } { 0 -1 0 1 0 0 0 0 } { 0 0 -1 0 -1 0 1 0 } { 0 0 0 1 0 1 -1 -1 } { 0 0 0 0 -1 0 1 0 } { -1 1 0 -1 1 -1 0 0 } { 0 0 0 0 1 0 0 0 } }",
        "{ { 0 -1 0 0 0 0 0 0 } { 1 0 -1 0 0 0 1 0 } { 0 1 0 1 0 0 -1 0 } { 0 0 -1 0 1 0 0 0 } { 0 0 0 -1 0 0 1 -1 } { 0 0 0 0 0 0 1 -1 } { 0 -1 1 0 -1 -1 0 1 } { 0 0 0 0 1 1 -1 0 } }",
        &[(0, Line), (7, Line)],
    )
    .mask_both(
        "{ { 0 -1 0 0 0 0 0 0 } { 1 0 -1 0 0 0 0 0 } { 0 1 0 1 0 0 0 0 } { 0 0 -1 0 1 0 0 0 } { 0 0 0 -1 0 0 0 -1 } { 0 0 0 0 0 0 0 0 } { 0 0 0 0 0 0 0 -1 } { 0 0 0 0 1 0 1 0 } }",
        "{ { 0 -1 0 0 0 0 0 0 } { 1 0 1 0 0 0 0 0 } { 0 -1 0 1 0 0 0 0 } { 0 0 -1 0 -1 0 0 0 } { 0 0 0 1 0 1 0 -1 } { 0 0 0 0 -1 0 0 0 } { 0 0 0 0 0 0 0 0 } { 0 0 0 0 1 0 0 0 } }",
    ),
    rule(
        "{ { 0 1 0 0 0 0 -1 0 } { -1 0 -1 0 0 0 1 0 } { 0 1 0 -1 0 0 0 0 } { 0 0 1 0 1 0 -1 0 } { 0 0 0 -1 0 -1 1 1 } { 0 0 0 0 1 0 -1 0 } { 1 -1 0 1 -1 1 0 0 } { 0 0 0 0 -1 0 0 0 } }",
        "{ { 0 1 0 0 0 0 0 0 } { -1 0 1 0 0 0 -1 0 } { 0 -1 0 -1 0 0 1 0 } { 0 0 1 0 -1 0 0 0 } { 0 0 0 1 0 0 -1 1 } { 0 0 0 0 0 0 -1 1 } { 0 1 -1 0 1 1 0 -1 } { 0 0 0 0 -1 -1 1 0 } }",
        &[(0, Line), (7, Line)],
    )
    .mask_both(
        "{ { 0 1 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 } { 0 -1 0 -1 0 0 0 0 } { 0 0 1 0 -1 0 0 0 } { 0 0 0 1 0 0 0 1 } { 0 0 0 0 0 0 0 0 } { 0 0 0 0 0 0 0 1 } { 0 0 0 0 -1 0 -1 0 } }",
        "{ { 0 1 0 0 0 0 0 0 } { -1 0 -1 0 0 0 0 0 } { 0 1 0 -1 0 0 0 0 } { 0 0 1 0 1 0 0 0 } { 0 0 0 -1 0 -1 0 1 } { 0 0 0 0 1 0 0 0 } { 0 0 0 0 0 0 0 0 } { 0 0 0 0 -1 0 0 0 } }",
    ),
    rule(
        "{ { 0 1 0 -1 0 1 } { -1 0 1 1 0 0 } { 0 -1 0 0 0 0 } { 1 -1 0 0 1 -1 } { 0 0 0 -1 0 1 } { -1 0 0 1 -1 0 } }",
        "{ { 0 -1 1 0 0 1 } { 1 0 -1 -1 0 0 } { -1 1 0 0 0 0 } { 0 1 0 0 1 -1 } { 0 0 0 -1 0 1 } { -1 0 0 1 -1 0 } }",
        &[(0, ConnectedTo(5)), (5, ConnectedTo(0)), (2, Line), (4, Line)],
    )
    .mask_forward("{ { 0 0 1 0 0 1 } { 0 0 0 0 0 0 } { -1 0 0 0 0 0 } { 0 0 0 0 1 -1 } { 0 0 0 -1 0 1 } { -1 0 0 1 -1 0 } }"),
    rule(
        "{ { 0 -1 0 1 0 -1 } { 1 0 -1 -1 0 0 } { 0 1 0 0 0 0 } { -1 1 0 0 -1 1 } { 0 0 0 1 0 -1 } { 1 0 0 -1 1 0 } }",
        "{ { 0 1 -1 0 0 -1 } { -1 0 1 1 0 0 } { 1 -1 0 0 0 0 } { 0 -1 0 0 -1 1 } { 0 0 0 1 0 -1 } { 1 0 0 -1 1 0 } }",
        &[(0, ConnectedTo(5)), (5, ConnectedTo(0)), (2, Line), (4, Line)],
    )
    .mask_forward("{ { 0 0 -1 0 0 -1 } { 0 0 0 0 0 0 } { 1 0 0 0 0 0 } { 0 0 0 0 -1 1 } { 0 0 0 1 0 -1 } { 1 0 0 -1 1 0 } }"),
    rule(
        "{ { 0 -1 0 0 0 0 0 0 0 0 } { 1 0 -1 0 0 0 0 0 0 0 } { 0 1 0 -1 0 0 0 0 0 1 } { 0 0 1 0 1 0 0 0 0 -1 } { 0 0 0 -1 0 1 0 0 0 0 } { 0 0 0 0 -1 0 -1 0 1 0 } { 0 0 0 0 0 1 0 1 -1 0 } { 0 0 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 -1 1 -1 0 1 } { 0 0 -1 1 0 0 0 0 -1 0 } }",
        "{ { 0 -1 0 0 0 0 0 0 0 0 } { 1 0 -1 0 0 0 0 0 0 1 } { 0 1 0 1 0 0 0 0 0 -1 } { 0 0 -1 0 1 0 0 0 0 0 } { 0 0 0 -1 0 -1 0 0 1 0 } { 0 0 0 0 1 0 -1 1 -1 0 } { 0 0 0 0 0 1 0 0 0 0 } { 0 0 0 0 0 -1 0 0 1 0 } { 0 0 0 0 -1 1 0 -1 0 1 } { 0 -1 1 0 0 0 0 0 -1 0 } }",
        &[],
    ),
    rule(
        "{ { 0 1 0 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 0 } { 0 -1 0 1 0 0 0 0 0 -1 } { 0 0 -1 0 -1 0 0 0 0 1 } { 0 0 0 1 0 -1 0 0 0 0 } { 0 0 0 0 1 0 1 0 -1 0 } { 0 0 0 0 0 -1 0 -1 1 0 } { 0 0 0 0 0 0 1 0 -1 0 } { 0 0 0 0 0 1 -1 1 0 -1 } { 0 0 1 -1 0 0 0 0 1 0 } }",
        "{ { 0 1 0 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 -1 } { 0 -1 0 -1 0 0 0 0 0 1 } { 0 0 1 0 -1 0 0 0 0 0 } { 0 0 0 1 0 1 0 0 -1 0 } { 0 0 0 0 -1 0 1 -1 1 0 } { 0 0 0 0 0 -1 0 0 0 0 } { 0 0 0 0 0 1 0 0 -1 0 } { 0 0 0 0 1 -1 0 1 0 -1 } { 0 1 -1 0 0 0 0 0 1 0 } }",
        &[],
    ),
    rule(
        "{ { 0 0 0 -1 1 0 } { 0 0 0 1 0 -1 } { 0 0 0 -1 0 0 } { 1 -1 1 0 -1 1 } { -1 0 0 1 0 0 } { 0 1 0 -1 0 0 } }",
        "{ { 0 -1 0 1 0 0 } { 1 0 1 -1 0 0 } { 0 -1 0 1 -1 0 } { -1 1 -1 0 1 -1 } { 0 0 1 -1 0 1 } { 0 0 0 1 -1 0 } }",
        &[(0, Line), (4, Line)],
    )
    .mask_forward("{ { 0 -1 0 0 0 0 } { 1 0 1 0 0 0 } { 0 -1 0 0 -1 0 } { 0 0 0 0 0 0 } { 0 0 1 0 0 1 } { 0 0 0 0 -1 0 } }"),
    rule(
        "{ { 0 0 0 1 -1 0 } { 0 0 0 -1 0 1 } { 0 0 0 1 0 0 } { -1 1 -1 0 1 -1 } { 1 0 0 -1 0 0 } { 0 -1 0 1 0 0 } }",
        "{ { 0 1 0 -1 0 0 } { -1 0 -1 1 0 0 } { 0 1 0 -1 1 0 } { 1 -1 1 0 -1 1 } { 0 0 -1 1 0 -1 } { 0 0 0 -1 1 0 } }",
        &[(0, Line), (4, Line)],
    )
    .mask_forward("{ { 0 1 0 0 0 0 } { -1 0 -1 0 0 0 } { 0 1 0 0 1 0 } { 0 0 0 0 0 0 } { 0 0 -1 0 0 -1 } { 0 0 0 0 1 0 } }"),
    rule(
        "{ { 0 -1 0 1 0 0 } { 1 0 1 -1 0 0 } { 0 -1 0 1 -1 0 } { -1 1 -1 0 1 -1 } { 0 0 1 -1 0 1 } { 0 0 0 1 -1 0 } }",
        "{ { 0 -1 0 1 0 0 } { 1 0 -1 0 0 0 } { 0 1 0 -1 1 0 } { -1 0 1 0 0 -1 } { 0 0 -1 0 0 1 } { 0 0 0 1 -1 0 } }",
        &[(0, Line), (4, Line)],
    )
    .mask_both(
        "{ { 0 -1 0 1 0 0 } { 1 0 0 0 0 0 } { 0 0 0 0 0 0 } { -1 0 0 0 0 -1 } { 0 0 0 0 0 1 } { 0 0 0 1 -1 0 } }",
        "{ { 0 -1 0 1 0 0 } { 1 0 0 -1 0 0 } { 0 0 0 0 0 0 } { -1 1 0 0 1 -1 } { 0 0 0 -1 0 1 } { 0 0 0 1 -1 0 } }",
    ),
    rule(
        "{ { 0 1 0 -1 0 0 } { -1 0 -1 1 0 0 } { 0 1 0 -1 1 0 } { 1 -1 1 0 -1 1 } { 0 0 -1 1 0 -1 } { 0 0 0 -1 1 0 } }",
        "{ { 0 1 0 -1 0 0 } { -1 0 1 0 0 0 } { 0 -1 0 1 -1 0 } { 1 0 -1 0 0 1 } { 0 0 1 0 0 -1 } { 0 0 0 -1 1 0 } }",
        &[(0, Line), (4, Line)],
    )
    .mask_both(
        "{ { 0 1 0 -1 0 0 } { -1 0 0 0 0 0 } { 0 0 0 0 0 0 } { 1 0 0 0 0 1 } { 0 0 0 0 0 -1 } { 0 0 0 -1 1 0 } }",
        "{ { 0 1 0 -1 0 0 } { -1 0 0 1 0 0 } { 0 0 0 0 0 0 } { 1 -1 0 0 -1 1 } { 0 0 0 1 0 -1 } { 0 0 0 -1 1 0 } }",
    ),
    rule(
        "{ { 0 1 -1 0 0 0 0 } { -1 0 1 -1 0 1 0 } { 1 -1 0 1 0 0 0 } { 0 1 -1 0 1 -1 0 } { 0 0 0 -1 0 1 0 } { 0 -1 0 1 -1 0 -1 } { 0 0 0 0 0 1 0 } }",
        "{ { 0 -1 0 0 0 1 0 } { 1 0 -1 1 0 -1 0 } { 0 1 0 0 0 0 0 } { 0 -1 0 0 1 0 0 } { 0 0 0 -1 0 1 0 } { -1 1 0 0 -1 0 -1 } { 0 0 0 0 0 1 0 } }",
        &[(0, Line)],
    ),
    rule(
        "{ { 0 -1 1 0 0 0 0 } { 1 0 -1 1 0 -1 0 } { -1 1 0 -1 0 0 0 } { 0 -1 1 0 -1 1 0 } { 0 0 0 1 0 -1 0 } { 0 1 0 -1 1 0 1 } { 0 0 0 0 0 -1 0 } }",
        "{ { 0 1 0 0 0 -1 0 } { -1 0 1 -1 0 1 0 } { 0 -1 0 0 0 0 0 } { 0 1 0 0 -1 0 0 } { 0 0 0 1 0 -1 0 } { 1 -1 0 0 1 0 1 } { 0 0 0 0 0 -1 0 } }",
        &[(0, Line)],
    ),
    rule(
        "{ { 0 -1 0 0 0 1 0 } { 1 0 -1 1 0 -1 0 } { 0 1 0 0 0 0 0 } { 0 -1 0 0 1 0 0 } { 0 0 0 -1 0 1 0 } { -1 1 0 0 -1 0 -1 } { 0 0 0 0 0 1 0 } }",
        "{ { 0 0 0 0 0 -1 0 } { 0 0 -1 1 -1 1 -1 } { 0 1 0 0 0 0 0 } { 0 -1 0 0 1 0 0 } { 0 1 0 -1 0 -1 0 } { 1 -1 0 0 1 0 1 } { 0 1 0 0 0 -1 0 } }",
        &[(0, Line)],
    ),
    rule(
        "{ { 0 1 0 0 0 -1 0 } { -1 0 1 -1 0 1 0 } { 0 -1 0 0 0 0 0 } { 0 1 0 0 -1 0 0 } { 0 0 0 1 0 -1 0 } { 1 -1 0 0 1 0 1 } { 0 0 0 0 0 -1 0 } }",
        "{ { 0 0 0 0 0 1 0 } { 0 0 1 -1 1 -1 1 } { 0 -1 0 0 0 0 0 } { 0 1 0 0 -1 0 0 } { 0 -1 0 1 0 1 0 } { -1 1 0 0 -1 0 -1 } { 0 -1 0 0 0 1 0 } }",
        &[(0, Line)],
    ),
    rule(
        "{ { 0 -1 0 1 0 0 0 0 -1 0 } { 1 0 1 -1 0 0 0 0 0 0 } { 0 -1 0 1 -1 0 0 0 0 0 } { -1 1 -1 0 1 -1 0 0 0 0 } { 0 0 1 -1 0 0 1 0 0 0 } { 0 0 0 1 0 0 -1 0 0 0 } { 0 0 0 0 -1 1 0 1 0 0 } { 0 0 0 0 0 0 -1 0 0 1 } { 1 0 0 0 0 0 0 0 0 0 } { 0 0 0 0 0 0 0 -1 0 0 } }",
        "{ { 0 -1 0 1 0 0 0 0 -1 0 } { 1 0 1 -1 0 0 0 0 0 0 } { 0 -1 0 1 -1 0 0 0 0 0 } { -1 1 -1 0 1 -1 0 0 0 0 } { 0 0 1 -1 0 1 -1 1 0 0 } { 0 0 0 1 -1 0 1 0 0 0 } { 0 0 0 0 1 -1 0 -1 0 0 } { 0 0 0 0 -1 0 1 0 0 1 } { 1 0 0 0 0 0 0 0 0 0 } { 0 0 0 0 0 0 0 -1 0 0 } }",
        &[],
    ),
    rule(
        "{ { 0 1 0 -1 0 0 0 0 1 0 } { -1 0 -1 1 0 0 0 0 0 0 } { 0 1 0 -1 1 0 0 0 0 0 } { 1 -1 1 0 -1 1 0 0 0 0 } { 0 0 -1 1 0 0 -1 0 0 0 } { 0 0 0 -1 0 0 1 0 0 0 } { 0 0 0 0 1 -1 0 -1 0 0 } { 0 0 0 0 0 0 1 0 0 -1 } { -1 0 0 0 0 0 0 0 0 0 } { 0 0 0 0 0 0 0 1 0 0 } }",
        "{ { 0 1 0 -1 0 0 0 0 1 0 } { -1 0 -1 1 0 0 0 0 0 0 } { 0 1 0 -1 1 0 0 0 0 0 } { 1 -1 1 0 -1 1 0 0 0 0 } { 0 0 -1 1 0 -1 1 -1 0 0 } { 0 0 0 -1 1 0 -1 0 0 0 } { 0 0 0 0 -1 1 0 1 0 0 } { 0 0 0 0 1 0 -1 0 0 -1 } { -1 0 0 0 0 0 0 0 0 0 } { 0 0 0 0 0 0 0 1 0 0 } }",
        &[],
    ),
    rule(
        "{ { 0 -1 0 1 0 0 0 0 -1 0 } { 1 0 1 -1 0 0 0 0 0 0 } { 0 -1 0 1 -1 0 0 0 0 0 } { -1 1 -1 0 1 -1 0 0 0 0 } { 0 0 1 -1 0 1 -1 1 0 0 } { 0 0 0 1 -1 0 1 0 0 0 } { 0 0 0 0 1 -1 0 -1 0 0 } { 0 0 0 0 -1 0 1 0 0 1 } { 1 0 0 0 0 0 0 0 0 0 } { 0 0 0 0 0 0 0 -1 0 0 } }",
        "{ { 0 -1 0 1 0 0 0 0 -1 0 } { 1 0 1 -1 0 0 0 0 0 0 } { 0 -1 0 0 1 0 -1 0 0 0 } { -1 1 0 0 -1 0 0 1 0 0 } { 0 0 -1 1 0 -1 1 -1 0 0 } { 0 0 0 0 1 0 0 0 0 0 } { 0 0 1 0 -1 0 0 0 0 0 } { 0 0 0 -1 1 0 0 0 0 1 } { 1 0 0 0 0 0 0 0 0 0 } { 0 0 0 0 0 0 0 -1 0 0 } }",
        &[],
    ),
];

static REPRESENTATIVES: &[&str] = &[
    "{ { 0 1 0 0 0 0 } { -1 0 1 0 0 0 } { 0 -1 0 -1 1 -1 } { 0 0 1 0 0 0 } { 0 0 -1 0 0 2 } { 0 0 1 0 -2 0 } }",
    "{ { 0 2 -1 0 0 0 } { -2 0 1 0 0 0 } { 1 -1 0 1 1 1 } { 0 0 -1 0 0 0 } { 0 0 -1 0 0 0 } { 0 0 -1 0 0 0 } }",
    "{ { 0 1 0 0 0 0 0 } { -1 0 1 0 0 0 0 } { 0 -1 0 -1 1 0 0 } { 0 0 1 0 0 0 0 } { 0 0 -1 0 0 1 -1 } { 0 0 0 0 -1 0 2 } { 0 0 0 0 1 -2 0 } }",
    "{ { 0 1 0 0 0 0 0 } { -1 0 1 0 0 0 0 } { 0 -1 0 -1 1 0 -1 } { 0 0 1 0 0 0 0 } { 0 0 -1 0 0 1 1 } { 0 0 0 0 -1 0 1 } { 0 0 1 0 -1 -1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 } { 0 -1 0 -1 1 0 0 0 } { 0 0 1 0 0 0 0 0 } { 0 0 -1 0 0 1 0 0 } { 0 0 0 0 -1 0 1 -1 } { 0 0 0 0 0 -1 0 2 } { 0 0 0 0 0 1 -2 0 } }",
    "{ { 0 1 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 } { 0 -1 0 -1 1 0 0 0 } { 0 0 1 0 0 0 0 0 } { 0 0 -1 0 0 1 0 -1 } { 0 0 0 0 -1 0 1 1 } { 0 0 0 0 0 -1 0 1 } { 0 0 0 0 1 -1 -1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 } { 0 -1 0 -1 1 0 0 -1 } { 0 0 1 0 0 0 0 0 } { 0 0 -1 0 0 1 0 1 } { 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 -1 0 1 } { 0 0 1 0 -1 0 -1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 } { 0 -1 0 -1 1 0 0 0 0 } { 0 0 1 0 0 0 0 0 0 } { 0 0 -1 0 0 1 0 0 0 } { 0 0 0 0 -1 0 1 0 0 } { 0 0 0 0 0 -1 0 1 -1 } { 0 0 0 0 0 0 -1 0 2 } { 0 0 0 0 0 0 1 -2 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 } { 0 -1 0 -1 1 0 0 0 -1 } { 0 0 1 0 0 0 0 0 0 } { 0 0 -1 0 0 1 0 0 1 } { 0 0 0 0 -1 0 1 0 0 } { 0 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 0 -1 0 1 } { 0 0 1 0 -1 0 0 -1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 } { 0 -1 0 -1 1 0 0 0 0 } { 0 0 1 0 0 0 0 0 0 } { 0 0 -1 0 0 1 0 0 -1 } { 0 0 0 0 -1 0 1 0 1 } { 0 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 0 -1 0 1 } { 0 0 0 0 1 -1 0 -1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 } { 0 -1 0 -1 1 0 0 0 0 } { 0 0 1 0 0 0 0 0 0 } { 0 0 -1 0 0 1 0 0 0 } { 0 0 0 0 -1 0 1 0 -1 } { 0 0 0 0 0 -1 0 1 1 } { 0 0 0 0 0 0 -1 0 1 } { 0 0 0 0 0 1 -1 -1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 0 } { 0 -1 0 -1 1 0 0 0 0 0 } { 0 0 1 0 0 0 0 0 0 0 } { 0 0 -1 0 0 1 0 0 0 0 } { 0 0 0 0 -1 0 1 0 0 0 } { 0 0 0 0 0 -1 0 1 0 0 } { 0 0 0 0 0 0 -1 0 1 -1 } { 0 0 0 0 0 0 0 -1 0 2 } { 0 0 0 0 0 0 0 1 -2 0 } }",
    "{ { 0 1 1 -1 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 0 } { -1 -1 0 1 0 0 0 0 0 0 } { 1 0 -1 0 1 0 0 0 0 0 } { 0 0 0 -1 0 1 0 0 0 0 } { 0 0 0 0 -1 0 1 0 0 0 } { 0 0 0 0 0 -1 0 1 0 1 } { 0 0 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 0 0 -1 0 0 } { 0 0 0 0 0 0 -1 0 0 0 } }",
    "{ { 0 1 0 1 -1 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 0 } { 0 -1 0 1 0 0 0 0 0 0 } { -1 0 -1 0 1 0 0 0 0 0 } { 1 0 0 -1 0 1 0 0 0 0 } { 0 0 0 0 -1 0 1 0 0 0 } { 0 0 0 0 0 -1 0 1 0 1 } { 0 0 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 0 0 -1 0 0 } { 0 0 0 0 0 0 -1 0 0 0 } }",
    "{ { 0 1 0 0 1 -1 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 0 } { 0 -1 0 1 0 0 0 0 0 0 } { 0 0 -1 0 1 0 0 0 0 0 } { -1 0 0 -1 0 1 0 0 0 0 } { 1 0 0 0 -1 0 -1 0 0 0 } { 0 0 0 0 0 1 0 -1 0 -1 } { 0 0 0 0 0 0 1 0 1 0 } { 0 0 0 0 0 0 0 -1 0 0 } { 0 0 0 0 0 0 1 0 0 0 } }",
    "{ { 0 1 0 0 0 1 -1 0 0 0 } { -1 0 1 0 0 0 0 0 0 0 } { 0 -1 0 1 0 0 0 0 0 0 } { 0 0 -1 0 1 0 0 0 0 0 } { 0 0 0 -1 0 1 0 0 0 0 } { -1 0 0 0 -1 0 1 0 0 0 } { 1 0 0 0 0 -1 0 1 0 1 } { 0 0 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 0 0 -1 0 0 } { 0 0 0 0 0 0 -1 0 0 0 } }",
    "{ { 0 1 0 0 } { -1 0 1 1 } { 0 -1 0 1 } { 0 -1 -1 0 } }",
    "{ { 0 1 1 -1 } { -1 0 -1 0 } { -1 1 0 -1 } { 1 0 1 0 } }",
    "{ { 0 1 1 1 } { -1 0 -1 0 } { -1 1 0 -1 } { -1 0 1 0 } }",
    "{ { 0 1 1 1 } { -1 0 -1 1 } { -1 1 0 1 } { -1 -1 -1 0 } }",
    "{ { 0 1 1 -1 } { -1 0 -1 1 } { -1 1 0 1 } { 1 -1 -1 0 } }",
    "{ { 0 1 1 1 } { -1 0 1 -1 } { -1 -1 0 1 } { -1 1 -1 0 } }",
    "{ { 0 1 0 0 0 } { -1 0 1 0 1 } { 0 -1 0 1 0 } { 0 0 -1 0 1 } { 0 -1 0 -1 0 } }",
    "{ { 0 1 0 1 0 } { -1 0 1 0 1 } { 0 -1 0 1 0 } { -1 0 -1 0 1 } { 0 -1 0 -1 0 } }",
    "{ { 0 1 0 0 1 } { -1 0 1 0 0 } { 0 -1 0 1 -1 } { 0 0 -1 0 0 } { -1 0 1 0 0 } }",
    "{ { 0 1 0 0 1 } { -1 0 1 1 0 } { 0 -1 0 0 -1 } { 0 -1 0 0 -1 } { -1 0 1 1 0 } }",
    "{ { 0 1 1 1 1 1 } { -1 0 0 0 0 0 } { -1 0 0 0 0 0 } { -1 0 0 0 0 0 } { -1 0 0 0 0 0 } { -1 0 0 0 0 0 } }",
    "{ { 0 1 0 0 0 0 } { -1 0 1 0 0 0 } { 0 -1 0 1 1 1 } { 0 0 -1 0 0 0 } { 0 0 -1 0 0 0 } { 0 0 -1 0 0 0 } }",
    "{ { 0 1 0 0 0 0 } { -1 0 1 0 0 1 } { 0 -1 0 -1 0 0 } { 0 0 1 0 -1 0 } { 0 0 0 1 0 -1 } { 0 -1 0 0 1 0 } }",
    "{ { 0 1 0 0 0 1 } { -1 0 1 0 0 0 } { 0 -1 0 1 0 0 } { 0 0 -1 0 1 -1 } { 0 0 0 -1 0 0 } { -1 0 0 1 0 0 } }",
    "{ { 0 1 0 0 0 0 0 } { -1 0 1 0 0 0 1 } { 0 -1 0 -1 0 0 0 } { 0 0 1 0 -1 0 0 } { 0 0 0 1 0 -1 0 } { 0 0 0 0 1 0 -1 } { 0 -1 0 0 0 1 0 } }",
    "{ { 0 1 0 0 0 0 0 } { -1 0 1 0 0 0 0 } { 0 -1 0 1 1 0 0 } { 0 0 -1 0 0 0 0 } { 0 0 -1 0 0 1 1 } { 0 0 0 0 -1 0 0 } { 0 0 0 0 -1 0 0 } }",
    "{ { 0 1 1 0 0 0 0 } { -1 0 0 -1 0 -1 0 } { -1 0 0 0 0 0 -1 } { 0 1 0 0 1 0 0 } { 0 0 0 -1 0 0 -1 } { 0 1 0 0 0 0 0 } { 0 0 1 0 1 0 0 } }",
    "{ { 0 1 0 1 0 0 0 } { -1 0 1 0 0 0 0 } { 0 -1 0 0 -1 0 -1 } { -1 0 0 0 0 -1 0 } { 0 0 1 0 0 1 0 } { 0 0 0 1 -1 0 0 } { 0 0 1 0 0 0 0 } }",
    "{ { 0 1 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 } { 0 -1 0 1 0 0 0 0 } { 0 0 -1 0 1 0 1 0 } { 0 0 0 -1 0 1 0 0 } { 0 0 0 0 -1 0 0 0 } { 0 0 0 -1 0 0 0 1 } { 0 0 0 0 0 0 -1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 } { 0 -1 0 1 1 0 0 0 } { 0 0 -1 0 0 0 0 0 } { 0 0 -1 0 0 1 0 0 } { 0 0 0 0 -1 0 1 1 } { 0 0 0 0 0 -1 0 0 } { 0 0 0 0 0 -1 0 0 } }",
    "{ { 0 1 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 1 } { 0 -1 0 -1 0 0 0 0 } { 0 0 1 0 -1 0 0 0 } { 0 0 0 1 0 -1 0 0 } { 0 0 0 0 1 0 -1 0 } { 0 0 0 0 0 1 0 -1 } { 0 -1 0 0 0 0 1 0 } }",
    "{ { 0 1 0 1 0 0 0 0 } { -1 0 1 0 0 -1 0 0 } { 0 -1 0 0 0 0 0 0 } { -1 0 0 0 1 0 0 0 } { 0 0 0 -1 0 0 0 -1 } { 0 1 0 0 0 0 1 0 } { 0 0 0 0 0 -1 0 -1 } { 0 0 0 0 1 0 1 0 } }",
    "{ { 0 1 0 0 0 0 0 1 } { -1 0 1 0 0 0 0 0 } { 0 -1 0 1 0 0 0 0 } { 0 0 -1 0 1 0 0 0 } { 0 0 0 -1 0 1 0 0 } { 0 0 0 0 -1 0 1 -1 } { 0 0 0 0 0 -1 0 0 } { -1 0 0 0 0 1 0 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 } { 0 -1 0 1 0 0 0 0 0 } { 0 0 -1 0 1 1 0 0 0 } { 0 0 0 -1 0 0 0 0 0 } { 0 0 0 -1 0 0 1 0 0 } { 0 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 0 -1 0 1 } { 0 0 0 0 0 0 0 -1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 } { 0 -1 0 1 1 0 0 0 0 } { 0 0 -1 0 0 0 0 0 0 } { 0 0 -1 0 0 1 0 0 0 } { 0 0 0 0 -1 0 1 0 0 } { 0 0 0 0 0 -1 0 1 1 } { 0 0 0 0 0 0 -1 0 0 } { 0 0 0 0 0 0 -1 0 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 -1 0 0 0 0 0 1 } { 0 1 0 1 0 0 0 0 0 } { 0 0 -1 0 -1 0 0 0 0 } { 0 0 0 1 0 -1 0 0 0 } { 0 0 0 0 1 0 -1 0 0 } { 0 0 0 0 0 1 0 -1 0 } { 0 0 0 0 0 0 1 0 -1 } { 0 -1 0 0 0 0 0 1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 1 } { 0 -1 0 1 0 0 0 0 0 } { 0 0 -1 0 1 0 0 0 0 } { 0 0 0 -1 0 1 0 0 0 } { 0 0 0 0 -1 0 1 0 0 } { 0 0 0 0 0 -1 0 1 0 } { 0 0 0 0 0 0 -1 0 -1 } { 0 -1 0 0 0 0 0 1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 1 0 } { 0 -1 0 1 0 0 0 0 0 } { 0 0 -1 0 1 0 0 0 0 } { 0 0 0 -1 0 1 0 0 0 } { 0 0 0 0 -1 0 1 0 0 } { 0 0 0 0 0 -1 0 0 -1 } { 0 -1 0 0 0 0 0 0 1 } { 0 0 0 0 0 0 1 -1 0 } }",
    "{ { 0 1 0 0 0 1 0 0 0 } { -1 0 1 0 0 0 0 0 -1 } { 0 -1 0 1 0 0 0 0 0 } { 0 0 -1 0 1 0 0 0 0 } { 0 0 0 -1 0 0 0 -1 0 } { -1 0 0 0 0 0 1 0 0 } { 0 0 0 0 0 -1 0 1 0 } { 0 0 0 0 1 0 -1 0 0 } { 0 1 0 0 0 0 0 0 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 0 } { -1 0 -1 1 0 0 0 0 0 0 } { 0 1 0 0 0 0 0 0 0 0 } { 0 -1 0 0 1 0 0 0 0 0 } { 0 0 0 -1 0 1 0 0 0 0 } { 0 0 0 0 -1 0 1 0 0 0 } { 0 0 0 0 0 -1 0 1 1 0 } { 0 0 0 0 0 0 -1 0 0 0 } { 0 0 0 0 0 0 -1 0 0 1 } { 0 0 0 0 0 0 0 0 -1 0 } }",
    "{ { 0 1 0 0 0 0 0 0 0 0 } { -1 0 1 0 0 0 0 0 0 0 } { 0 -1 0 1 0 0 0 0 0 0 } { 0 0 -1 0 1 0 0 0 0 0 } { 0 0 0 -1 0 1 0 0 0 0 } { 0 0 0 0 -1 0 1 0 0 0 } { 0 0 0 0 0 -1 0 1 1 0 } { 0 0 0 0 0 0 -1 0 0 0 } { 0 0 0 0 0 0 -1 0 0 1 } { 0 0 0 0 0 0 0 0 -1 0 } }",
];
