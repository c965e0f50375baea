//! qvmove: exploration of quiver move classes.
//!
//! A quiver is stored as a skew-symmetric integer matrix `b`, where `b[i][j] > 0`
//! counts arrows `i -> j`. A move rule rewrites a small window of a quiver,
//! subject to how the window attaches to the rest of it. This crate provides:
//! - Relabelling-invariant equality and hashing of quivers and of their
//!   underlying graphs.
//! - Move rules with connection requirements and optional mutation-finiteness masks.
//! - A lazy breadth-first loader enumerating the move class of a seed quiver,
//!   tracking how many ordinary and sink-source moves each member took to reach.
//! - A checker reporting, for each input quiver, the first class member found in
//!   a catalogue of representatives or underlying graphs.
//!
//! # Equivalence
//!
//! Two quivers are equivalent when one is a relabelling of the other. Hashing uses
//! a colour-refinement fingerprint; equality confirms with an explicit permutation
//! search restricted to vertices of equal colour.
//!
//! # Example
//!
//! ```
//! use qvmove::prelude::*;
//!
//! let seed: QuiverMatrix = "{ { 0 1 } { -1 0 } }".parse().unwrap();
//! let mut catalogue = Catalogue::new(MoveLibrary::from(vec![MoveRule::sink_source()]));
//! catalogue.add_representative(seed.clone());
//! let checker = Checker::builder().catalogue(catalogue).build();
//! assert_eq!(checker.classify(&seed).to_string(), "0(0): { { 0 1 } { -1 0 } }");
//! ```

pub mod catalogue;
pub mod checker;
pub mod equiv;
pub mod explore;
pub mod fingerprint;
pub mod finite;
pub mod matrix;
pub mod moves;
pub mod stream;

pub use catalogue::{Catalogue, CatalogueError};
pub use checker::{CheckError, Checker, Classification, Outcome};
pub use equiv::{EquivQuiverMatrix, EquivUnderlyingGraph};
pub use explore::{Depth, MoveClassLoader};
pub use finite::{FiniteCheck, Finiteness, MutationFiniteCheck};
pub use matrix::{MatrixError, QuiverMatrix};
pub use moves::{Connection, MoveApplicator, MoveKind, MoveLibrary, MoveRule};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::catalogue::{Catalogue, CatalogueData, CatalogueError};
    pub use crate::checker::{
        CheckError, Checker, CheckerBuilder, Classification, Outcome, RunSummary,
    };
    pub use crate::equiv::{isomorphism, EquivQuiverMatrix, EquivUnderlyingGraph};
    pub use crate::explore::{Depth, MoveClassLoader};
    pub use crate::fingerprint::{matrix_fingerprint, HashValue, Invariant};
    pub use crate::finite::{FiniteCheck, Finiteness, MutationFiniteCheck, DEFAULT_CLASS_LIMIT};
    pub use crate::matrix::{MatrixError, QuiverMatrix};
    pub use crate::moves::{
        Connection, Direction, MoveApplicator, MoveError, MoveKind, MoveLibrary, MoveMatch,
        MoveRule,
    };
    pub use crate::stream::{MatrixStream, Record, StreamError};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn m(text: &str) -> QuiverMatrix {
        text.parse().unwrap()
    }

    /// A seed already in the catalogue is reported at depth zero.
    #[test]
    fn seed_in_its_own_class() {
        let seed = m("{ { 0 1 } { -1 0 } }");
        let mut catalogue = Catalogue::new(MoveLibrary::from(vec![MoveRule::sink_source()]));
        catalogue.add_representative(seed.clone());
        let checker = Checker::builder().catalogue(catalogue).build();
        assert_eq!(
            checker.classify(&seed).to_string(),
            "0(0): { { 0 1 } { -1 0 } }"
        );
    }

    /// Without moves nothing but the seed is explored.
    #[test]
    fn unreachable_seed_reports_none() {
        let seed = m("{ { 0 2 } { -2 0 } }");
        let mut catalogue = Catalogue::new(MoveLibrary::new());
        catalogue.add_representative(m("{ { 0 1 } { -1 0 } }"));
        let checker = Checker::builder().catalogue(catalogue).build();
        assert_eq!(
            checker.classify(&seed).to_string(),
            "None: { { 0 2 } { -2 0 } }"
        );
    }

    /// Flipping one sink leaf of a source-centred star reaches the path.
    #[test]
    fn one_leaf_flip_reports_sink_source_depth() {
        let seed = m("{ { 0 -1 0 } { 1 0 1 } { 0 -1 0 } }");
        let mut catalogue = Catalogue::new(MoveLibrary::from(vec![MoveRule::sink_source()]));
        catalogue.add_representative(m("{ { 0 1 0 } { -1 0 1 } { 0 -1 0 } }"));
        let checker = Checker::builder().catalogue(catalogue).build();
        let classification = checker.classify(&seed);
        assert_eq!(classification.outcome, Outcome::Representative(Depth::new(0, 1)));
        assert_eq!(
            classification.to_string(),
            "0(1): { { 0 -1 0 } { 1 0 1 } { 0 -1 0 } }"
        );
    }

    /// A sink-source move advances only its own counter.
    #[test]
    fn sink_source_move_counts_separately() {
        let rule = MoveRule::sink_source();
        let finite = MutationFiniteCheck::new();
        let applicator = MoveApplicator::new(&finite);
        let seed = m("{ { 0 1 } { -1 0 } }");
        let applications = applicator.applications(&seed, &rule);
        assert!(!applications.is_empty());
        for (_, result) in &applications {
            assert_eq!(result, &seed.opposite());
        }
        let depth = Depth::default().advanced(rule.kind());
        assert_eq!(depth, Depth::new(0, 1));
        assert_eq!(depth.to_string(), "0(1)");
    }
}
