//! Error types for calcbook core.

use thiserror::Error;

/// Errors that can occur in the document and storage layers. Evaluation
/// failures never surface here: they become `Error`-content entries in
/// the result store.
#[derive(Error, Debug)]
pub enum CalcbookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported document version: {0}")]
    UnsupportedVersion(String),

    #[error("No file path set")]
    NoFilePath,
}

pub type Result<T> = std::result::Result<T, CalcbookError>;
