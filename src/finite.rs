//! Mutation-finiteness predicates gating move applications.
//!
//! A move may carry a finiteness mask: the move is only applied where the ambient
//! quiver, with the move's window overwritten by the mask, has a finite mutation
//! class. [`FiniteCheck`] abstracts the predicate; [`MutationFiniteCheck`] is the
//! enumerating implementation used by default.
//!
//! # Citations
//! - Mutation-finite quivers have all multiplicities at most 2 throughout their class:
//!   Felikson, Shapiro & Tumarkin, "Skew-symmetric cluster algebras of finite mutation type" (2012)

use crate::equiv::EquivQuiverMatrix;
use crate::matrix::QuiverMatrix;
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// Default number of quivers enumerated per component before giving up.
pub const DEFAULT_CLASS_LIMIT: usize = 20_000;

/// Result of a finiteness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finiteness {
    /// The mutation class is finite.
    Finite,
    /// Some quiver in the mutation class has an entry of absolute value above 2.
    Infinite,
    /// The enumeration bound was hit before a decision was reached.
    Undetermined,
}

impl Finiteness {
    /// Only a proven finite class satisfies a finiteness requirement.
    #[inline]
    pub fn is_finite(self) -> bool {
        self == Finiteness::Finite
    }
}

/// Decides whether a quiver is mutation-finite.
pub trait FiniteCheck {
    /// Classifies `matrix`.
    fn check(&self, matrix: &QuiverMatrix) -> Finiteness;
}

impl<F> FiniteCheck for F
where
    F: Fn(&QuiverMatrix) -> Finiteness,
{
    fn check(&self, matrix: &QuiverMatrix) -> Finiteness {
        self(matrix)
    }
}

/// Enumerates mutation classes breadth-first, component by component.
///
/// Components with at most two vertices are always finite. Larger components are
/// mutated at every vertex until either an entry with `|b| > 2` appears
/// (`Infinite`), the class is exhausted (`Finite`), or more than `class_limit`
/// distinct quivers have been seen (`Undetermined`).
///
/// Every member of a fully enumerated class and every component proven infinite
/// is cached, so later checks touching the same classes are lookups.
///
/// # Invariants
/// - Cached results are never `Undetermined`; raising the limit later can still
///   decide a component that hit the old one.
/// - Not `Sync`: the cache uses `RefCell` and is meant for a single explorer thread.
#[derive(Debug)]
pub struct MutationFiniteCheck {
    class_limit: usize,
    finite: RefCell<HashSet<EquivQuiverMatrix>>,
    infinite: RefCell<HashSet<EquivQuiverMatrix>>,
}

impl MutationFiniteCheck {
    /// Creates a check with [`DEFAULT_CLASS_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_CLASS_LIMIT)
    }

    /// Creates a check that gives up after `class_limit` quivers per component.
    pub fn with_limit(class_limit: usize) -> Self {
        Self {
            class_limit,
            finite: RefCell::new(HashSet::new()),
            infinite: RefCell::new(HashSet::new()),
        }
    }

    /// The configured enumeration bound.
    pub fn class_limit(&self) -> usize {
        self.class_limit
    }

    /// Number of cached quivers (finite class members plus infinite components).
    pub fn cached(&self) -> usize {
        self.finite.borrow().len() + self.infinite.borrow().len()
    }

    fn check_component(&self, component: QuiverMatrix) -> Finiteness {
        let key = EquivQuiverMatrix::new(component);
        if self.finite.borrow().contains(&key) {
            return Finiteness::Finite;
        }
        if self.infinite.borrow().contains(&key) {
            return Finiteness::Infinite;
        }
        if key.matrix().max_abs_entry() > 2 {
            self.infinite.borrow_mut().insert(key);
            return Finiteness::Infinite;
        }

        let n = key.matrix().num_vertices();
        let mut seen: HashSet<EquivQuiverMatrix> = HashSet::new();
        let mut queue: VecDeque<QuiverMatrix> = VecDeque::new();
        seen.insert(key.clone());
        queue.push_back(key.matrix().clone());

        while let Some(current) = queue.pop_front() {
            for k in 0..n {
                let mutated = current.mutate(k);
                if mutated.max_abs_entry() > 2 {
                    trace!(vertices = n, explored = seen.len(), "component is mutation-infinite");
                    self.infinite.borrow_mut().insert(key);
                    return Finiteness::Infinite;
                }
                let wrapped = EquivQuiverMatrix::new(mutated);
                if seen.contains(&wrapped) {
                    continue;
                }
                queue.push_back(wrapped.matrix().clone());
                seen.insert(wrapped);
                if seen.len() > self.class_limit {
                    trace!(vertices = n, limit = self.class_limit, "mutation class exceeds limit");
                    return Finiteness::Undetermined;
                }
            }
        }

        trace!(vertices = n, class_size = seen.len(), "component is mutation-finite");
        self.finite.borrow_mut().extend(seen);
        Finiteness::Finite
    }
}

impl Default for MutationFiniteCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl FiniteCheck for MutationFiniteCheck {
    fn check(&self, matrix: &QuiverMatrix) -> Finiteness {
        let mut result = Finiteness::Finite;
        for component in matrix.components() {
            if component.len() <= 2 {
                continue;
            }
            match self.check_component(matrix.submatrix(&component)) {
                Finiteness::Infinite => return Finiteness::Infinite,
                Finiteness::Undetermined => result = Finiteness::Undetermined,
                Finiteness::Finite => {}
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(text: &str) -> QuiverMatrix {
        text.parse().unwrap()
    }

    #[test]
    fn small_components_are_finite() {
        let check = MutationFiniteCheck::new();
        assert_eq!(check.check(&m("{ { 0 5 } { -5 0 } }")), Finiteness::Finite);
        assert_eq!(check.check(&m("{ }")), Finiteness::Finite);
        assert_eq!(check.cached(), 0);
    }

    #[test]
    fn a3_class_is_finite_and_cached() {
        let check = MutationFiniteCheck::new();
        let a3 = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
        assert_eq!(check.check(&a3), Finiteness::Finite);
        // Linear, sink-middle, source-middle and the oriented triangle.
        assert_eq!(check.cached(), 4);
        let triangle = m("{ { 0 1 -1 } { -1 0 1 } { 1 -1 0 } }");
        assert_eq!(check.check(&triangle), Finiteness::Finite);
        assert_eq!(check.cached(), 4);
    }

    #[test]
    fn markov_quiver_is_finite() {
        let check = MutationFiniteCheck::new();
        let markov = m("{ { 0 2 -2 } { -2 0 2 } { 2 -2 0 } }");
        assert_eq!(check.check(&markov), Finiteness::Finite);
    }

    #[test]
    fn double_arrow_on_a_path_is_infinite() {
        let check = MutationFiniteCheck::new();
        let q = m("{ { 0 2 0 } { -2 0 1 } { 0 -1 0 } }");
        assert_eq!(check.check(&q), Finiteness::Infinite);
        assert_eq!(check.check(&q.permuted(&[1, 2, 0])), Finiteness::Infinite);
        assert_eq!(check.cached(), 1);
    }

    #[test]
    fn any_infinite_component_decides() {
        let check = MutationFiniteCheck::new();
        // Disjoint union of A3 and a triple arrow between three vertices.
        let q = m("{ { 0 1 0 0 0 0 } { -1 0 1 0 0 0 } { 0 -1 0 0 0 0 } \
                   { 0 0 0 0 3 0 } { 0 0 0 -3 0 1 } { 0 0 0 0 -1 0 } }");
        assert_eq!(check.check(&q), Finiteness::Infinite);
    }

    #[test]
    fn tight_limit_is_undetermined() {
        let check = MutationFiniteCheck::with_limit(2);
        let a3 = m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }");
        assert_eq!(check.check(&a3), Finiteness::Undetermined);
        assert_eq!(check.cached(), 0);
    }

    #[test]
    fn closures_are_checks() {
        let always = |_: &QuiverMatrix| Finiteness::Finite;
        assert!(always.check(&QuiverMatrix::zero(3)).is_finite());
        assert!(!Finiteness::Undetermined.is_finite());
    }
}
