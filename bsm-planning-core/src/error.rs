//! Error types for the import and store boundaries.
//!
//! Per-row and per-field anomalies are absorbed where they occur; only
//! failures that make the output meaningless (no readable input, no usable
//! baseline, no way to write the result) surface through these types. Every
//! file-touching variant carries the failing path so the diagnostic the
//! operator sees always names the file.

use std::path::Path;

use thiserror::Error;

/// Errors reading a spreadsheet export.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl ImportError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Errors touching a persisted JSON dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The base file exists but does not hold a JSON array of match records.
    /// Fatal: merging into an unreadable baseline would lose data.
    #[error("{path} is not a JSON array of match records: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn malformed(path: &Path, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.display().to_string(),
            source,
        }
    }
}
