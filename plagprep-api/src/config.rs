//! High-level configuration API

use crate::dto::ExecutionMode;
use crate::error::{ApiError, Result};
use plagprep_engine::{language, Language, PreprocessConfig, StopWords};
use std::path::Path;

/// High-level configuration for preprocessing
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) inner: PreprocessConfig,
    pub(crate) stop_words: Option<StopWords>,
    pub(crate) include_common: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::English,
            inner: PreprocessConfig::default(),
            stop_words: None,
            include_common: true,
        }
    }
}

impl Config {
    /// Create a single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            inner: PreprocessConfig::sequential(),
            ..Self::default()
        }
    }

    /// Create a configuration that always uses the worker pool
    pub fn parallel() -> Self {
        Self {
            inner: PreprocessConfig::parallel(),
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configured language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Merge threshold
    pub fn min_sentence_length(&self) -> usize {
        self.inner.min_sentence_length
    }

    /// Whether stop words are removed
    pub fn remove_stop_words(&self) -> bool {
        self.inner.remove_stop_words
    }

    /// Configured execution mode
    pub fn execution_mode(&self) -> ExecutionMode {
        self.inner.execution_mode.into()
    }

    /// Configured thread count (None = one per CPU)
    pub fn threads(&self) -> Option<usize> {
        self.inner.threads
    }

    /// Whether output lists common sentences
    pub fn include_common(&self) -> bool {
        self.include_common
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language by code (`eng`, `ger`, `en`, `de`)
    pub fn language(mut self, code: &str) -> Result<Self> {
        self.config.language = Language::from_code(code)?;
        Ok(self)
    }

    /// Set the merge threshold
    pub fn min_sentence_length(mut self, length: usize) -> Self {
        self.config.inner.min_sentence_length = length;
        self
    }

    /// Enable or disable stop-word removal
    pub fn remove_stop_words(mut self, remove: bool) -> Self {
        self.config.inner.remove_stop_words = remove;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.inner.execution_mode = mode.into();
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.inner.threads = threads;
        self
    }

    /// Replace the built-in stop words
    pub fn stop_words(mut self, stop_words: StopWords) -> Self {
        self.config.stop_words = Some(stop_words);
        self
    }

    /// Replace the built-in stop words with a TOML table
    pub fn stop_words_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let (_, stop_words) = language::load_from_file(path.as_ref())?;
        self.config.stop_words = Some(stop_words);
        Ok(self)
    }

    /// List common sentences in the output (default true)
    pub fn include_common(mut self, include: bool) -> Self {
        self.config.include_common = include;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config
            .inner
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let config = Config::builder()
            .language("de")
            .unwrap()
            .min_sentence_length(5)
            .remove_stop_words(true)
            .threads(Some(2))
            .include_common(false)
            .build()
            .unwrap();

        assert_eq!(config.language(), Language::German);
        assert_eq!(config.min_sentence_length(), 5);
        assert!(config.remove_stop_words());
        assert_eq!(config.threads(), Some(2));
        assert!(!config.include_common());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::builder().language("xx").unwrap_err().is_unsupported_language());
        assert!(matches!(
            Config::builder().min_sentence_length(0).build(),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::sequential().execution_mode(), ExecutionMode::Sequential);
        assert_eq!(Config::parallel().execution_mode(), ExecutionMode::Parallel);
        assert_eq!(Config::default().execution_mode(), ExecutionMode::Adaptive);
    }
}
