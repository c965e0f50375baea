//! Classification of quivers against a catalogue.
//!
//! For every input quiver a fresh [`MoveClassLoader`] walks its move class. Each
//! class member is looked up in the catalogue's underlying graphs, then in its
//! representatives; the first hit ends the search and reports the member's depth.

use crate::catalogue::Catalogue;
use crate::equiv::{EquivQuiverMatrix, EquivUnderlyingGraph};
use crate::explore::{Depth, MoveClassLoader};
use crate::finite::{FiniteCheck, MutationFiniteCheck};
use crate::matrix::{MatrixError, QuiverMatrix};
use crate::stream::{MatrixStream, StreamError};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// How a classification ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A class member has a goal underlying graph.
    Graph(Depth),
    /// A class member is a class representative.
    Representative(Depth),
    /// The move class was exhausted without reaching a goal.
    NoMatch,
}

impl Outcome {
    /// Depth of the matching class member, if any.
    pub fn depth(&self) -> Option<Depth> {
        match self {
            Outcome::Graph(depth) | Outcome::Representative(depth) => Some(*depth),
            Outcome::NoMatch => None,
        }
    }

    /// Whether a goal was reached.
    pub fn is_match(&self) -> bool {
        self.depth().is_some()
    }
}

/// Result for one input quiver.
///
/// Displays as `<moves>(<sink-source moves>): <matrix>` or `None: <matrix>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The input quiver.
    pub matrix: QuiverMatrix,
    /// How the search ended.
    pub outcome: Outcome,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome.depth() {
            Some(depth) => write!(f, "{}: {}", depth, self.matrix),
            None => write!(f, "None: {}", self.matrix),
        }
    }
}

/// Totals for one [`Checker::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records classified.
    pub records: usize,
    /// Records that reached a goal.
    pub matched: usize,
    /// Records whose move class was exhausted.
    pub unmatched: usize,
}

/// Error that aborts a run.
#[derive(Debug)]
pub enum CheckError {
    /// A record is not a valid matrix.
    Parse {
        /// Offending input line.
        line: usize,
        /// Parser error.
        source: MatrixError,
    },
    /// Reading input or writing output failed.
    Io(std::io::Error),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Parse { line, source } => {
                write!(f, "malformed matrix at line {}: {}", line, source)
            }
            CheckError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Parse { source, .. } => Some(source),
            CheckError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CheckError {
    fn from(e: std::io::Error) -> Self {
        CheckError::Io(e)
    }
}

impl From<StreamError> for CheckError {
    fn from(e: StreamError) -> Self {
        match e {
            StreamError::Io { source, .. } => CheckError::Io(source),
            StreamError::Parse { line, source } => CheckError::Parse { line, source },
        }
    }
}

/// Classifies quivers by exploring their move classes.
pub struct Checker {
    catalogue: Catalogue,
    finite: Box<dyn FiniteCheck>,
}

impl Checker {
    /// Starts a [`CheckerBuilder`].
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// The catalogue in use.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Explores the move class of `matrix` until a goal is reached or the class is exhausted.
    pub fn classify(&self, matrix: &QuiverMatrix) -> Classification {
        let graphs = self.catalogue.graphs();
        let representatives = self.catalogue.representatives();
        let mut loader =
            MoveClassLoader::new(matrix.clone(), self.catalogue.moves(), self.finite.as_ref());
        let mut scratch = EquivUnderlyingGraph::new(matrix);

        let mut outcome = Outcome::NoMatch;
        while let Some(member) = loader.next() {
            if !graphs.is_empty() {
                scratch.set_matrix(&member);
                if graphs.contains(&scratch) {
                    outcome = Outcome::Graph(loader.depth());
                    break;
                }
            }
            if representatives.contains(&EquivQuiverMatrix::new(member)) {
                outcome = Outcome::Representative(loader.depth());
                break;
            }
        }
        debug!(matrix = %matrix, ?outcome, explored = loader.visited(), "classified");
        Classification {
            matrix: matrix.clone(),
            outcome,
        }
    }

    /// Classifies every matrix in `input`, writing one line per record to `output`.
    ///
    /// A malformed record aborts the run; lines for earlier records have already
    /// been written.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<RunSummary, CheckError> {
        let mut summary = RunSummary::default();
        for record in MatrixStream::new(input) {
            let record = record?;
            let classification = self.classify(&record.matrix);
            writeln!(output, "{}", classification)?;
            summary.records += 1;
            if classification.outcome.is_match() {
                summary.matched += 1;
            } else {
                summary.unmatched += 1;
            }
        }
        output.flush()?;
        info!(
            records = summary.records,
            matched = summary.matched,
            unmatched = summary.unmatched,
            "run complete"
        );
        Ok(summary)
    }
}

/// Configures a [`Checker`].
///
/// Defaults to [`Catalogue::standard`] and a [`MutationFiniteCheck`] with its
/// default class limit.
#[derive(Default)]
pub struct CheckerBuilder {
    catalogue: Option<Catalogue>,
    finite: Option<Box<dyn FiniteCheck>>,
}

impl CheckerBuilder {
    /// Creates a builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `catalogue` instead of the standard one.
    pub fn catalogue(mut self, catalogue: Catalogue) -> Self {
        self.catalogue = Some(catalogue);
        self
    }

    /// Uses `check` for finiteness masks.
    pub fn finite_check<F: FiniteCheck + 'static>(mut self, check: F) -> Self {
        self.finite = Some(Box::new(check));
        self
    }

    /// Uses a [`MutationFiniteCheck`] bounded by `limit`.
    pub fn class_limit(self, limit: usize) -> Self {
        self.finite_check(MutationFiniteCheck::with_limit(limit))
    }

    /// Builds the checker.
    pub fn build(self) -> Checker {
        Checker {
            catalogue: self.catalogue.unwrap_or_else(Catalogue::standard),
            finite: self
                .finite
                .unwrap_or_else(|| Box::new(MutationFiniteCheck::new())),
        }
    }
}
