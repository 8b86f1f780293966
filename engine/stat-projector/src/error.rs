//! Error types for the stat projector

use thiserror::Error;

/// Result type alias for projector operations
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors that can occur while building a projection report
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Network, service or decoding failure in an upstream call
    #[error("Upstream failure: {0:#}")]
    Upstream(anyhow::Error),

    /// A game log row could not be interpreted
    #[error("Malformed row {index}: {reason}")]
    MalformedRow { index: usize, reason: String },

    /// Not enough data to fit a trend
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Chart backend failure
    #[error("Chart error: {0}")]
    Chart(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O errors (prompt, chart output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectionError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        ProjectionError::MalformedRow { index, reason: reason.into() }
    }
}
