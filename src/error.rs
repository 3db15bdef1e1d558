//! Error types for board operations
//!
//! Provides unified error handling for store mutations, snapshot loading and
//! document import.

use crate::types::JobId;
use thiserror::Error;

/// Errors that can occur while mutating or loading a board
#[derive(Error, Debug)]
pub enum BoardError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No job with this id
    #[error("Job not found: {0}")]
    JobNotFound(JobId),

    /// A board must keep at least one job
    #[error("Cannot delete the last remaining job")]
    LastJob,

    /// Imported document was rejected
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Reasons an imported document is rejected. The board is never touched when
/// one of these is returned.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Document is not valid JSON
    #[error("Failed to parse board document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Document is JSON but not an object
    #[error("Board document must be a JSON object")]
    NotAnObject,

    /// A required top-level field is absent or null
    #[error("Invalid file format: missing `{0}`")]
    MissingField(&'static str),
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
