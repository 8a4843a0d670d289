//! Error types for loading a graph document.

use thiserror::Error;

/// Errors raised while reading or writing a persisted graph.
///
/// Structural defects in a well-formed document are not errors; see the validator.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
}
