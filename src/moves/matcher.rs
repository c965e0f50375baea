//! Enumeration of the places where a move rule applies.

use super::connection::Surroundings;
use super::rule::overwrite;
use super::{Direction, MoveRule};
use crate::finite::FiniteCheck;
use crate::matrix::QuiverMatrix;

/// One way of applying a rule: a direction and an injective window assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveMatch {
    direction: Direction,
    assignment: Vec<usize>,
}

impl MoveMatch {
    /// `assignment[i]` is the ambient vertex playing window vertex `i`.
    pub fn new(direction: Direction, assignment: Vec<usize>) -> Self {
        Self {
            direction,
            assignment,
        }
    }

    /// Direction of the application.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Window-to-ambient vertex map.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }
}

/// Finds rule applications, consulting a finiteness check for masked rules.
///
/// # Determinism
/// Window vertices are assigned in index order and candidates tried in increasing
/// ambient index, so matches come out in lexicographic order of their assignments.
pub struct MoveApplicator<'a> {
    finite: &'a dyn FiniteCheck,
}

impl<'a> MoveApplicator<'a> {
    /// Creates an applicator using `finite` for finiteness masks.
    pub fn new(finite: &'a dyn FiniteCheck) -> Self {
        Self { finite }
    }

    /// All assignments under which `rule` applies to `matrix` in `direction`.
    ///
    /// A window larger than the matrix yields no matches.
    pub fn find_matches(
        &self,
        matrix: &QuiverMatrix,
        rule: &MoveRule,
        direction: Direction,
    ) -> Vec<MoveMatch> {
        let size = rule.window_size();
        let n = matrix.num_vertices();
        if size > n {
            return Vec::new();
        }
        let source = rule.source(direction);
        let view = matrix.view();
        let window = source.view();

        // A non-pivot has all its edges inside the window, so its degree is exact.
        let candidates: Vec<Vec<usize>> = (0..size)
            .map(|i| {
                let wanted = window.degree(i);
                let pivot = rule.is_pivot(i);
                (0..n)
                    .filter(|&v| {
                        let degree = view.degree(v);
                        if pivot {
                            degree >= wanted
                        } else {
                            degree == wanted
                        }
                    })
                    .collect()
            })
            .collect();
        if candidates.iter().any(|c| c.is_empty()) {
            return Vec::new();
        }

        let mut matches = Vec::new();
        let mut assignment = Vec::with_capacity(size);
        let mut used = vec![false; n];
        self.generate_assignments(
            matrix,
            rule,
            direction,
            &candidates,
            &mut assignment,
            &mut used,
            &mut matches,
        );
        matches
    }

    /// Recursive helper extending `assignment` by one window vertex.
    #[allow(clippy::too_many_arguments)]
    fn generate_assignments(
        &self,
        matrix: &QuiverMatrix,
        rule: &MoveRule,
        direction: Direction,
        candidates: &[Vec<usize>],
        assignment: &mut Vec<usize>,
        used: &mut [bool],
        matches: &mut Vec<MoveMatch>,
    ) {
        let depth = assignment.len();
        if depth == candidates.len() {
            if self.accepts(matrix, rule, direction, assignment) {
                matches.push(MoveMatch::new(direction, assignment.clone()));
            }
            return;
        }

        let source = rule.source(direction);
        for &v in &candidates[depth] {
            if used[v] {
                continue;
            }
            let consistent = assignment
                .iter()
                .enumerate()
                .all(|(j, &w)| matrix.get(v, w) == source.get(depth, j));
            if !consistent {
                continue;
            }
            assignment.push(v);
            used[v] = true;

            self.generate_assignments(matrix, rule, direction, candidates, assignment, used, matches);

            used[v] = false;
            assignment.pop();
        }
    }

    /// Checks the conditions that need the full assignment.
    fn accepts(
        &self,
        matrix: &QuiverMatrix,
        rule: &MoveRule,
        direction: Direction,
        image: &[usize],
    ) -> bool {
        let around = Surroundings::new(matrix, image);
        let sealed = (0..image.len())
            .filter(|&i| !rule.is_pivot(i))
            .all(|i| around.isolated(i));
        if !sealed {
            return false;
        }
        let connected = rule
            .pivots()
            .iter()
            .zip(rule.connections())
            .all(|(&pivot, connection)| connection.holds(pivot, rule.pivots(), &around));
        if !connected {
            return false;
        }
        match rule.mask(direction) {
            Some(mask) => self.finite.check(&overwrite(matrix, mask, image)).is_finite(),
            None => true,
        }
    }

    /// Every application of `rule` to `matrix`, forward matches first, with its result.
    pub fn applications(
        &self,
        matrix: &QuiverMatrix,
        rule: &MoveRule,
    ) -> Vec<(MoveMatch, QuiverMatrix)> {
        Direction::BOTH
            .iter()
            .flat_map(|&direction| self.find_matches(matrix, rule, direction))
            .map(|found| {
                let result = rule.apply(matrix, &found);
                (found, result)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finite::{Finiteness, MutationFiniteCheck};
    use crate::moves::Connection;

    fn m(text: &str) -> QuiverMatrix {
        text.parse().unwrap()
    }

    fn finite_always(_: &QuiverMatrix) -> Finiteness {
        Finiteness::Finite
    }

    fn assignments(found: &[MoveMatch]) -> Vec<Vec<usize>> {
        found.iter().map(|f| f.assignment().to_vec()).collect()
    }

    fn two_leaf_rule() -> MoveRule {
        MoveRule::new(
            m("{ { 0 1 0 } { -1 0 -1 } { 0 1 0 } }"),
            m("{ { 0 -1 0 } { 1 0 1 } { 0 -1 0 } }"),
            vec![0, 2],
            vec![Connection::connected_to([2]), Connection::connected_to([0])],
        )
        .unwrap()
    }

    #[test]
    fn leaf_move_finds_each_sink_leaf() {
        let check = finite_always;
        let applicator = MoveApplicator::new(&check);
        let rule = MoveRule::sink_source();
        // 0 -> 1 -> 2: leaf 2 is a sink, leaf 0 a source.
        let path = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");

        let forward = applicator.find_matches(&path, &rule, Direction::Forward);
        assert_eq!(assignments(&forward), vec![vec![2, 1]]);
        let reverse = applicator.find_matches(&path, &rule, Direction::Reverse);
        assert_eq!(assignments(&reverse), vec![vec![0, 1]]);
    }

    #[test]
    fn two_vertex_quiver_matches_both_ends() {
        let check = finite_always;
        let applicator = MoveApplicator::new(&check);
        let rule = MoveRule::sink_source();
        let q = m("{ { 0 1 } { -1 0 } }");
        // The sink 1 is a leaf with pivot 0; the source 0 a leaf with pivot 1.
        let all = applicator.applications(&q, &rule);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0.assignment(), &[1, 0]);
        assert_eq!(all[0].1.to_string(), "{ { 0 -1 } { 1 0 } }");
        assert_eq!(all[1].0.direction(), Direction::Reverse);
        assert_eq!(all[1].1.to_string(), "{ { 0 -1 } { 1 0 } }");
    }

    #[test]
    fn window_larger_than_matrix_has_no_matches() {
        let check = finite_always;
        let applicator = MoveApplicator::new(&check);
        let q = m("{ { 0 1 } { -1 0 } }");
        assert!(applicator
            .find_matches(&q, &two_leaf_rule(), Direction::Forward)
            .is_empty());
    }

    #[test]
    fn non_pivot_must_stay_inside_the_window() {
        let check = finite_always;
        let applicator = MoveApplicator::new(&check);
        let rule = MoveRule::sink_source();
        // Oriented triangle: no vertex is a leaf.
        let triangle = m("{ { 0 1 -1 } { -1 0 1 } { 1 -1 0 } }");
        assert!(applicator.applications(&triangle, &rule).is_empty());
    }

    #[test]
    fn connected_pivots_need_a_path_outside() {
        let check = finite_always;
        let applicator = MoveApplicator::new(&check);
        let rule = two_leaf_rule();
        // 0 -> 1 <- 2 with 0 - 3 - 2 closing a square: pivots 0 and 2 are connected via 3.
        let square = m("{ { 0 1 0 1 } { -1 0 -1 0 } { 0 1 0 -1 } { -1 0 1 0 } }");
        let found = applicator.find_matches(&square, &rule, Direction::Forward);
        assert_eq!(assignments(&found), vec![vec![0, 1, 2], vec![2, 1, 0]]);

        // Without the closing vertex the pivots see nothing outside.
        let sink = m("{ { 0 1 0 } { -1 0 -1 } { 0 1 0 } }");
        assert!(applicator
            .find_matches(&sink, &rule, Direction::Forward)
            .is_empty());

        // Two separate tails: 0 - 3 and 2 - 4 are different components.
        let split = m("{ { 0 1 0 1 0 } { -1 0 -1 0 0 } { 0 1 0 0 1 } \
                       { -1 0 0 0 0 } { 0 0 -1 0 0 } }");
        assert!(applicator
            .find_matches(&split, &rule, Direction::Forward)
            .is_empty());
    }

    #[test]
    fn unconnected_pivots_reject_shared_components() {
        let check = finite_always;
        let applicator = MoveApplicator::new(&check);
        let rule = MoveRule::new(
            m("{ { 0 1 0 } { -1 0 -1 } { 0 1 0 } }"),
            m("{ { 0 -1 0 } { 1 0 1 } { 0 -1 0 } }"),
            vec![0, 2],
            vec![Connection::Unconnected, Connection::Unconnected],
        )
        .unwrap();
        let square = m("{ { 0 1 0 1 } { -1 0 -1 0 } { 0 1 0 -1 } { -1 0 1 0 } }");
        assert!(applicator
            .find_matches(&square, &rule, Direction::Forward)
            .is_empty());
        let split = m("{ { 0 1 0 1 0 } { -1 0 -1 0 0 } { 0 1 0 0 1 } \
                       { -1 0 0 0 0 } { 0 0 -1 0 0 } }");
        assert_eq!(
            applicator
                .find_matches(&split, &rule, Direction::Forward)
                .len(),
            2
        );
    }

    fn line_rule() -> MoveRule {
        // Vertex 1 is a sink-source leaf hanging off pivot 0, which continues as a line.
        MoveRule::new(
            m("{ { 0 1 } { -1 0 } }"),
            m("{ { 0 -1 } { 1 0 } }"),
            vec![0],
            vec![Connection::Line],
        )
        .unwrap()
    }

    #[test]
    fn line_accepts_dangling_paths_only() {
        let check = finite_always;
        let applicator = MoveApplicator::new(&check);
        let rule = line_rule();

        // 1 <- 0 - 2 - 3 (path): window on (0, 1).
        let path = m("{ { 0 1 -1 0 } { -1 0 0 0 } { 1 0 0 1 } { 0 0 -1 0 } }");
        let found = applicator.find_matches(&path, &rule, Direction::Forward);
        assert!(found.iter().any(|f| f.assignment() == [0, 1]));

        // Double arrow on the tail breaks the line.
        let heavy = m("{ { 0 1 -1 0 } { -1 0 0 0 } { 1 0 0 2 } { 0 0 -2 0 } }");
        let found = applicator.find_matches(&heavy, &rule, Direction::Forward);
        assert!(!found.iter().any(|f| f.assignment() == [0, 1]));

        // The tail branches at 2.
        let branched = m("{ { 0 1 -1 0 0 } { -1 0 0 0 0 } { 1 0 0 1 1 } \
                          { 0 0 -1 0 0 } { 0 0 -1 0 0 } }");
        let found = applicator.find_matches(&branched, &rule, Direction::Forward);
        assert!(!found.iter().any(|f| f.assignment() == [0, 1]));

        // The pivot attaches to the tail at an inner vertex.
        let middle = m("{ { 0 1 0 -1 0 } { -1 0 0 0 0 } { 0 0 0 1 0 } \
                        { 1 0 -1 0 1 } { 0 0 0 -1 0 } }");
        let found = applicator.find_matches(&middle, &rule, Direction::Forward);
        assert!(!found.iter().any(|f| f.assignment() == [0, 1]));
    }

    #[test]
    fn line_to_joins_two_pivots() {
        let check = finite_always;
        let applicator = MoveApplicator::new(&check);
        // Window: 0 -> 1 -> 2 with pivots 0 and 2 joined by an outside path.
        let rule = MoveRule::new(
            m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }"),
            m("{ { 0 -1 1 } { 1 0 -1 } { -1 1 0 } }"),
            vec![0, 2],
            vec![Connection::LineTo(2), Connection::LineTo(0)],
        )
        .unwrap();

        // 0 -> 1 -> 2, then 2 - 3 - 4 - 0 closes a pentagon.
        let pentagon = m("{ { 0 1 0 0 1 } { -1 0 1 0 0 } { 0 -1 0 1 0 } \
                          { 0 0 -1 0 1 } { -1 0 0 -1 0 } }");
        let found = applicator.find_matches(&pentagon, &rule, Direction::Forward);
        assert!(found.iter().any(|f| f.assignment() == [0, 1, 2]));

        // A single shared outside vertex also counts.
        let square = m("{ { 0 1 0 1 } { -1 0 1 0 } { 0 -1 0 -1 } { -1 0 1 0 } }");
        let found = applicator.find_matches(&square, &rule, Direction::Forward);
        assert!(found.iter().any(|f| f.assignment() == [0, 1, 2]));

        // An extra arrow from the outside path into the window breaks it.
        let chorded = m("{ { 0 1 0 0 1 } { -1 0 1 1 0 } { 0 -1 0 1 0 } \
                         { 0 -1 -1 0 1 } { -1 0 0 -1 0 } }");
        let found = applicator.find_matches(&chorded, &rule, Direction::Forward);
        assert!(!found.iter().any(|f| f.assignment() == [0, 1, 2]));
    }

    #[test]
    fn finiteness_mask_gates_application() {
        let rule = MoveRule::sink_source()
            .with_forward_mask(m("{ { 0 3 } { -3 0 } }"))
            .unwrap();
        // 0 -> 1 -> 2: leaf 2 is a sink. The mask puts a triple arrow 2 => 1
        // next to 0 -> 1, which is mutation-infinite.
        let path = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
        let strict = MutationFiniteCheck::new();
        let applicator = MoveApplicator::new(&strict);
        assert!(applicator
            .find_matches(&path, &rule, Direction::Forward)
            .is_empty());
        // No reverse mask: the source leaf still flips.
        assert_eq!(
            applicator
                .find_matches(&path, &rule, Direction::Reverse)
                .len(),
            1
        );

        let lenient = finite_always;
        let applicator = MoveApplicator::new(&lenient);
        assert_eq!(
            applicator
                .find_matches(&path, &rule, Direction::Forward)
                .len(),
            1
        );
    }

    #[test]
    fn undetermined_rejects_like_infinite() {
        let rule = MoveRule::sink_source()
            .with_forward_mask(m("{ { 0 -1 } { 1 0 } }"))
            .unwrap();
        let path = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
        let unsure = |_: &QuiverMatrix| Finiteness::Undetermined;
        let applicator = MoveApplicator::new(&unsure);
        assert!(applicator
            .find_matches(&path, &rule, Direction::Forward)
            .is_empty());
    }
}
