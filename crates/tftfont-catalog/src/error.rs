//! Catalog errors and warnings.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tftfont_core::FontError;

/// Errors from loading a manifest or a catalogued font.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid font manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("no font registered under '{key}'")]
    NotFound { key: String },

    #[error(transparent)]
    Font(#[from] FontError),
}

/// A non-fatal problem found while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// A second font with an existing key; the later one was skipped.
    DuplicateKey { key: String },
    /// A category's font folder does not exist.
    MissingFolder { category: String, path: PathBuf },
    /// A file found during discovery could not be used.
    Unusable { path: PathBuf, reason: String },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarning::DuplicateKey { key } => write!(f, "duplicate font: {key}"),
            CatalogWarning::MissingFolder { category, path } => {
                write!(f, "{category}: font folder {} not found", path.display())
            }
            CatalogWarning::Unusable { path, reason } => {
                write!(f, "{}: {reason}", path.display())
            }
        }
    }
}
