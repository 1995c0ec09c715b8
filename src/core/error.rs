//! Error types and error handling for lineseek.
//!
//! The search engine itself never fails; these errors come from the
//! surrounding layers (configuration, input loading, request validation).

use thiserror::Error;

/// Result type alias for lineseek operations
pub type Result<T> = std::result::Result<T, LineseekError>;

/// Main error type for lineseek
#[derive(Error, Debug)]
pub enum LineseekError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input not found: {0}")]
    InputNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl LineseekError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, LineseekError::InputNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            LineseekError::InvalidQuery(_)
                | LineseekError::InvalidInput(_)
                | LineseekError::ConfigError(_)
        )
    }
}
