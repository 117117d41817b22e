//! API error types

use plagprep_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the error names an unsupported language
    pub fn is_unsupported_language(&self) -> bool {
        matches!(
            self,
            ApiError::Engine(EngineError::UnsupportedLanguage { .. })
        )
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
