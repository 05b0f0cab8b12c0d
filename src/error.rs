use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the generator.
///
/// Extraction and rendering never fail; only caller-contract violations and
/// the file-facing helpers produce these.
#[derive(Debug, Error)]
pub enum Error {
    /// A report key that the rendered Reports table does not contain
    #[error("Unknown report key: {0}")]
    UnknownReportKey(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
