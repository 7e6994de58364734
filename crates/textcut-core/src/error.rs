//! Error types for textcut.

use thiserror::Error;

/// Result type alias using CutError.
pub type Result<T> = std::result::Result<T, CutError>;

/// Errors that can occur in textcut.
///
/// The splitting pipeline itself is infallible for any string input; these
/// errors come from configuration and from acquiring the input text.
#[derive(Error, Debug)]
pub enum CutError {
    /// Input source is unsupported or unreadable.
    #[error("Invalid input {source_name}: {reason}")]
    InvalidInput { source_name: String, reason: String },

    /// Invalid argument provided.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CutError {
    /// Create an invalid input error.
    pub fn invalid_input(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a stable error code, used for machine-readable CLI output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
