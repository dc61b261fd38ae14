//! Error types for the board engine

use crate::validate::ValidationError;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur around the board engine.
///
/// Engine transitions themselves are total and never return errors; these
/// cover the edges where external data comes in (parsing, validation) and
/// goes out (storage implementations).
#[derive(Debug, Error)]
pub enum BoardError {
    /// A candidate board failed structural validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Board text could not be parsed
    #[error("parse error: {message}")]
    Parse { message: String },

    /// IO error from a storage implementation
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// True when the error means "the supplied board was rejected" rather
    /// than an IO failure - callers keep their current board in that case.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Parse { .. } | Self::Json(_))
    }
}
