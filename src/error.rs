//! Error types for tree construction and the viewer front-end.

use thiserror::Error;

/// Errors raised while inserting paths into a [`crate::tree::PathTree`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("File path is empty")]
    EmptyPath,

    #[error("File path {path:?} has an empty segment at position {position}")]
    EmptySegment { path: String, position: usize },
}

/// Errors surfaced by metadata loading, configuration, and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid torrent metadata: {0}")]
    InvalidMetadata(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode metadata JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
