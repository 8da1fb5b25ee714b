#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! One-shot session data load.
//!
//! Reads the four source documents concurrently and builds the
//! read-only session snapshot: region catalog, code translator, and
//! flow store. The load completes or fails as a unit; no query ever
//! sees partial data. After a failure the session is over: callers
//! surface the error and stop.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use move_map_flow::store::FlowStore;
use move_map_flow::wire::parse_matrix;
use move_map_geography::boundary::parse_boundaries;
use move_map_geography::catalog::RegionCatalog;
use move_map_geography::translator::CodeTranslator;
use thiserror::Error;

/// Errors that fail the session load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A source document could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The boundary document was invalid.
    #[error(transparent)]
    Geo(#[from] move_map_geography::GeoError),

    /// The flow matrix document was invalid.
    #[error(transparent)]
    Flow(#[from] move_map_flow::FlowError),

    /// A plain JSON mapping document was invalid.
    #[error("Failed to parse {document} document: {source}")]
    Json {
        /// Which document failed.
        document: &'static str,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// Locations of the four source documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Region boundary collection (`GeoJSON`).
    pub boundaries: PathBuf,
    /// Census-code-prefix to parent-area-name mapping.
    pub parent_names: PathBuf,
    /// Census-to-admin code mapping.
    pub code_mapping: PathBuf,
    /// Origin-destination flow matrix.
    pub flow_matrix: PathBuf,
}

impl DataPaths {
    /// Derives the conventional document names inside one data
    /// directory, matching the data pipeline's output layout.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            boundaries: dir.join("sigungu.json"),
            parent_names: dir.join("sido_mapping.json"),
            code_mapping: dir.join("code_mapping.json"),
            flow_matrix: dir.join("od_data.json"),
        }
    }
}

/// The read-only session data, shared by all readers after load.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Region display metadata keyed by both code systems.
    pub catalog: RegionCatalog,
    /// Census-to-admin code translation.
    pub translator: CodeTranslator,
    /// The full flow matrix.
    pub store: FlowStore,
}

impl Snapshot {
    /// Reads and parses the four documents, failing as a unit.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if any document cannot be read or parsed;
    /// no partial snapshot is ever returned.
    pub async fn load(paths: &DataPaths) -> Result<Self, LoadError> {
        let (boundary_doc, parent_doc, mapping_doc, matrix_doc) = futures::try_join!(
            read_document(&paths.boundaries),
            read_document(&paths.parent_names),
            read_document(&paths.code_mapping),
            read_document(&paths.flow_matrix),
        )?;

        Self::from_documents(&boundary_doc, &parent_doc, &mapping_doc, &matrix_doc)
    }

    /// Builds the snapshot from already-read document contents.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if any document fails validation.
    pub fn from_documents(
        boundary_doc: &str,
        parent_doc: &str,
        mapping_doc: &str,
        matrix_doc: &str,
    ) -> Result<Self, LoadError> {
        let boundaries = parse_boundaries(boundary_doc)?;

        let parent_names: BTreeMap<String, String> =
            serde_json::from_str(parent_doc).map_err(|source| LoadError::Json {
                document: "parent-area names",
                source,
            })?;

        let code_mapping: BTreeMap<String, String> =
            serde_json::from_str(mapping_doc).map_err(|source| LoadError::Json {
                document: "code mapping",
                source,
            })?;

        let translator = CodeTranslator::new(code_mapping);
        let catalog = RegionCatalog::build(&boundaries, &parent_names, &translator);
        let store = FlowStore::from_wire(parse_matrix(matrix_doc)?);

        log::info!(
            "Loaded {} regions, {} code mappings, {} flow origins",
            catalog.len(),
            translator.len(),
            store.len()
        );
        if catalog.identity_fallbacks() > 0 {
            log::warn!(
                "{} regions have no admin code mapping and use their census code as-is",
                catalog.identity_fallbacks()
            );
        }

        Ok(Self {
            catalog,
            translator,
            store,
        })
    }
}

/// Reads one document, attaching the path to any IO failure.
async fn read_document(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}
