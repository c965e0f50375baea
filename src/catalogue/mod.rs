//! Move libraries and goal sets for classification runs.
//!
//! A [`Catalogue`] bundles the ordered [`MoveLibrary`] with the class representatives
//! and underlying graphs that end a search. It is built once, shared read-only, and
//! can be stored as CBOR through the plain [`CatalogueData`] form.

mod standard;

use crate::equiv::{EquivQuiverMatrix, EquivUnderlyingGraph};
use crate::matrix::{MatrixError, QuiverMatrix};
use crate::moves::{MoveError, MoveLibrary};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Error raised while storing or loading a catalogue.
#[derive(Debug)]
pub enum CatalogueError {
    /// Reading or writing the file failed.
    Io(std::io::Error),
    /// The bytes are not a valid catalogue encoding.
    Decode(serde_cbor::Error),
    /// The catalogue could not be encoded.
    Encode(serde_cbor::Error),
    /// A matrix in built-in data does not parse.
    Matrix(MatrixError),
    /// A rule in built-in data is malformed.
    Rule(MoveError),
}

impl std::fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogueError::Io(e) => write!(f, "catalogue i/o failed: {}", e),
            CatalogueError::Decode(e) => write!(f, "invalid catalogue: {}", e),
            CatalogueError::Encode(e) => write!(f, "cannot encode catalogue: {}", e),
            CatalogueError::Matrix(e) => write!(f, "invalid catalogue matrix: {}", e),
            CatalogueError::Rule(e) => write!(f, "invalid catalogue rule: {}", e),
        }
    }
}

impl std::error::Error for CatalogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogueError::Io(e) => Some(e),
            CatalogueError::Decode(e) | CatalogueError::Encode(e) => Some(e),
            CatalogueError::Matrix(e) => Some(e),
            CatalogueError::Rule(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CatalogueError {
    fn from(e: std::io::Error) -> Self {
        CatalogueError::Io(e)
    }
}

impl From<MatrixError> for CatalogueError {
    fn from(e: MatrixError) -> Self {
        CatalogueError::Matrix(e)
    }
}

impl From<MoveError> for CatalogueError {
    fn from(e: MoveError) -> Self {
        CatalogueError::Rule(e)
    }
}

/// Serialisable catalogue contents.
///
/// Graphs are stored as quivers; only their underlying graphs matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueData {
    /// Rules in exploration order.
    pub moves: MoveLibrary,
    /// Class representatives.
    #[serde(default)]
    pub representatives: Vec<QuiverMatrix>,
    /// Quivers whose underlying graphs are goals.
    #[serde(default)]
    pub graphs: Vec<QuiverMatrix>,
}

/// Move library plus goal sets.
///
/// # Invariants
/// - Representatives and graphs are deduplicated up to relabelling.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    moves: MoveLibrary,
    representatives: HashSet<EquivQuiverMatrix>,
    graphs: HashSet<EquivUnderlyingGraph>,
}

impl Catalogue {
    /// Creates a catalogue with `moves` and no goals.
    pub fn new(moves: MoveLibrary) -> Self {
        Self {
            moves,
            representatives: HashSet::new(),
            graphs: HashSet::new(),
        }
    }

    /// The built-in catalogue.
    ///
    /// Moves, in order: the sink-source family (leaf flip, two leaves of a
    /// degree-two vertex joined outside the window, stars with three to five
    /// leaves) on the sink-source counter, then 76 mutation moves on the ordinary
    /// counter, 20 of them gated by finiteness masks. Goals are 47 class
    /// representatives on 4 to 10 vertices and no underlying graphs.
    pub fn standard() -> Self {
        Self::try_standard().expect("built-in catalogue data is well formed")
    }

    /// Builds [`standard`](Self::standard), reporting malformed built-in data.
    pub fn try_standard() -> Result<Self, CatalogueError> {
        let mut catalogue = Catalogue::new(standard::library()?);
        for matrix in standard::representatives()? {
            catalogue.add_representative(matrix);
        }
        Ok(catalogue)
    }

    /// Adds a class representative; returns `false` if an equivalent one is present.
    pub fn add_representative(&mut self, matrix: QuiverMatrix) -> bool {
        self.representatives.insert(EquivQuiverMatrix::new(matrix))
    }

    /// Adds the underlying graph of `matrix` as a goal; returns `false` if present.
    pub fn add_graph(&mut self, matrix: &QuiverMatrix) -> bool {
        self.graphs.insert(EquivUnderlyingGraph::new(matrix))
    }

    /// The move library.
    pub fn moves(&self) -> &MoveLibrary {
        &self.moves
    }

    /// Class representatives.
    pub fn representatives(&self) -> &HashSet<EquivQuiverMatrix> {
        &self.representatives
    }

    /// Goal underlying graphs.
    pub fn graphs(&self) -> &HashSet<EquivUnderlyingGraph> {
        &self.graphs
    }

    /// Plain contents, with goals ordered by fingerprint.
    pub fn to_data(&self) -> CatalogueData {
        let mut representatives: Vec<&EquivQuiverMatrix> = self.representatives.iter().collect();
        representatives.sort_by_key(|r| r.fingerprint());
        let mut graphs: Vec<&EquivUnderlyingGraph> = self.graphs.iter().collect();
        graphs.sort_by_key(|g| g.fingerprint());
        CatalogueData {
            moves: self.moves.clone(),
            representatives: representatives
                .into_iter()
                .map(|r| r.matrix().clone())
                .collect(),
            graphs: graphs.into_iter().map(|g| g.to_quiver()).collect(),
        }
    }

    /// Serializes the catalogue to CBOR bytes.
    pub fn to_cbor(&self) -> Result<Vec<u8>, CatalogueError> {
        serde_cbor::to_vec(&self.to_data()).map_err(CatalogueError::Encode)
    }

    /// Deserializes a catalogue from CBOR bytes.
    ///
    /// Every matrix and rule is validated while decoding.
    pub fn from_cbor(bytes: &[u8]) -> Result<Self, CatalogueError> {
        let data: CatalogueData = serde_cbor::from_slice(bytes).map_err(CatalogueError::Decode)?;
        Ok(Self::from(data))
    }

    /// Saves the catalogue to a file.
    ///
    /// Uses CBOR format.
    pub fn save_to_file(&self, path: &Path) -> Result<(), CatalogueError> {
        let bytes = self.to_cbor()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Loads a catalogue from a file.
    ///
    /// Uses CBOR format.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogueError> {
        let bytes = std::fs::read(path)?;
        let catalogue = Self::from_cbor(&bytes)?;
        debug!(
            path = %path.display(),
            moves = catalogue.moves.len(),
            representatives = catalogue.representatives.len(),
            graphs = catalogue.graphs.len(),
            "loaded catalogue"
        );
        Ok(catalogue)
    }
}

impl From<CatalogueData> for Catalogue {
    fn from(data: CatalogueData) -> Self {
        let mut catalogue = Catalogue::new(data.moves);
        for matrix in data.representatives {
            catalogue.add_representative(matrix);
        }
        for matrix in &data.graphs {
            catalogue.add_graph(matrix);
        }
        catalogue
    }
}
