//! Layered error types
//!
//! Core errors describe a single malformed document; engine errors add the
//! corpus-level conditions (language, configuration, tagging, workers).

use plagprep_core::CoreError;
use thiserror::Error;

/// Failure reported by a [`Tagger`](crate::tagger::Tagger)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaggerError {
    /// The tagger has no output for this text
    #[error("no tagger output for text ({chars} characters)")]
    MissingOutput {
        /// Length of the text in characters
        chars: usize,
    },

    /// Two different outputs were recorded for the same text
    #[error("conflicting tagger output recorded for one text ({chars} characters)")]
    ConflictingOutput {
        /// Length of the text in characters
        chars: usize,
    },

    /// The external tagger process failed
    #[error("tagger process failed: {0}")]
    Process(String),

    /// Tagger output could not be decoded
    #[error("malformed tagger output: {0}")]
    Malformed(String),
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A document was rejected by the sentence model
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Language code outside the supported set
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that is not supported
        code: String,
    },

    /// Tagging one document failed
    #[error("tagging '{document}' failed: {source}")]
    Tagger {
        /// Name of the document being tagged
        document: String,
        /// Underlying tagger failure
        #[source]
        source: TaggerError,
    },

    /// Invalid preprocessing configuration
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Stop-word table could not be loaded
    #[error("language configuration error in {path}: {error}")]
    LanguageConfig {
        /// Configuration file path, or the embedded table name
        path: String,
        /// The specific error that occurred
        error: String,
    },

    /// A reference document failed; the reference set would be incomplete
    #[error("reference document '{name}' failed: {reason}")]
    ReferenceDocument {
        /// Name of the reference document
        name: String,
        /// Why it failed
        reason: String,
    },

    /// Worker pool could not be created
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagger_error_display_includes_document() {
        let err = EngineError::Tagger {
            document: "essay".to_string(),
            source: TaggerError::Process("exit status 2".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "tagging 'essay' failed: tagger process failed: exit status 2"
        );
    }

    #[test]
    fn test_core_error_converts() {
        let err: EngineError = CoreError::InvariantViolation("x".to_string()).into();
        assert!(matches!(err, EngineError::Core(_)));
    }
}
