//! Error types for the window and the command line

use thiserror::Error;

/// Result type for front-end operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can occur outside the evaluator
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Log file or subscriber setup error
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// JSON output error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
