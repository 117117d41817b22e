//! Core error types (deterministic only)

use thiserror::Error;

/// Core model errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A tagged token carries offsets that cannot belong to the document
    #[error("malformed token {token} in tagged sentence {sentence}: {reason}")]
    MalformedToken {
        /// Index of the tagged sentence in the tagger output
        sentence: usize,
        /// Index of the token inside that tagged sentence
        token: usize,
        /// What is wrong with the token
        reason: String,
    },

    /// A tagged sentence starts before the previous sentence ended
    #[error("tagged sentence {sentence} starts at {start_char} before the previous sentence ends at {previous_end}")]
    OverlappingSentence {
        /// Index of the tagged sentence in the tagger output
        sentence: usize,
        /// First character of the offending sentence
        start_char: usize,
        /// End of the sentence already in the document
        previous_end: usize,
    },

    /// A document failed its structural self-check
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_token_display() {
        let error = CoreError::MalformedToken {
            sentence: 2,
            token: 5,
            reason: "empty span".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "malformed token 5 in tagged sentence 2: empty span"
        );
    }

    #[test]
    fn test_overlap_display() {
        let error = CoreError::OverlappingSentence {
            sentence: 1,
            start_char: 4,
            previous_end: 9,
        };
        assert!(error.to_string().contains("starts at 4"));
        assert!(error.to_string().contains("ends at 9"));
    }
}
