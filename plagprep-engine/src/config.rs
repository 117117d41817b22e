//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::executor::ExecutionMode;
use plagprep_core::BuildOptions;

/// Preprocessing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessConfig {
    /// Sentences with fewer counted words are merged into a neighbour
    pub min_sentence_length: usize,
    /// Drop stop words from sentences and vocabulary
    pub remove_stop_words: bool,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads (None = one per CPU)
    pub threads: Option<usize>,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            min_sentence_length: 3,
            remove_stop_words: false,
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
        }
    }
}

impl PreprocessConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Self::default()
        }
    }

    /// Use every CPU regardless of corpus size
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Self::default()
        }
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.min_sentence_length == 0 {
            return Err(EngineError::ConfigError(
                "min_sentence_length must be greater than 0".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "threads must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Options for primary documents
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            min_sentence_length: self.min_sentence_length,
            remove_stop_words: self.remove_stop_words,
            join_small: true,
        }
    }
}
