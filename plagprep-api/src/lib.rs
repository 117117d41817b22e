//! Public API for plagprep candidate-generation preprocessing
//!
//! This crate provides a stable interface over the engine: configure a
//! [`Preprocessor`], hand it tagged documents (or source documents and a
//! [`Tagger`]), and receive serializable [`Output`] DTOs.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::{DocumentDTO, FailureDTO, Metadata};
use error::Result;
use plagprep_engine::{EngineError, PreprocessOutput, PretaggedTagger};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{ExecutionMode, Output, SentenceDTO, TaggedDocument};
pub use error::ApiError;
pub use plagprep_engine::{Language, SourceDocument, Tagger, TaggerError};

/// Main entry point for preprocessing
///
/// Wraps the engine preprocessor and converts its results into DTOs.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    inner: plagprep_engine::Preprocessor,
    config: Config,
}

impl Preprocessor {
    /// Create a preprocessor with default configuration (English, adaptive mode)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a preprocessor for a language code
    pub fn with_language(lang_code: &str) -> Result<Self> {
        let config = Config::builder().language(lang_code)?.build()?;
        Self::with_config(config)
    }

    /// Create a preprocessor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let mut inner =
            plagprep_engine::Preprocessor::with_config(config.language, config.inner.clone())?;
        if let Some(stop_words) = &config.stop_words {
            inner = inner.with_stop_words(stop_words.clone());
        }
        Ok(Self { inner, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the configured language
    pub fn language(&self) -> Language {
        self.config.language
    }

    /// Preprocess documents whose tagger output is already recorded
    ///
    /// Documents with identical text must carry identical tagger output.
    pub fn preprocess(
        &self,
        documents: &[TaggedDocument],
        references: &[TaggedDocument],
    ) -> Result<Output> {
        self.preprocess_tagged_with_progress(documents, references, |_| {})
    }

    /// [`preprocess`](Self::preprocess) with a per-document callback
    pub fn preprocess_tagged_with_progress<P>(
        &self,
        documents: &[TaggedDocument],
        references: &[TaggedDocument],
        progress: P,
    ) -> Result<Output>
    where
        P: Fn(&SourceDocument) + Sync + Send,
    {
        let mut tagger = PretaggedTagger::new(self.config.language);
        for document in references.iter().chain(documents) {
            tagger
                .insert(document.text.clone(), document.sentences.clone())
                .map_err(|source| EngineError::Tagger {
                    document: document.name.clone(),
                    source,
                })?;
        }
        let sources: Vec<SourceDocument> =
            documents.iter().map(TaggedDocument::to_source).collect();
        let reference_sources: Vec<SourceDocument> =
            references.iter().map(TaggedDocument::to_source).collect();

        self.preprocess_with_tagger(&sources, &reference_sources, &tagger, progress)
    }

    /// Preprocess source documents with an explicit tagger
    pub fn preprocess_with_tagger<T, P>(
        &self,
        documents: &[SourceDocument],
        references: &[SourceDocument],
        tagger: &T,
        progress: P,
    ) -> Result<Output>
    where
        T: Tagger + ?Sized,
        P: Fn(&SourceDocument) + Sync + Send,
    {
        let output = self
            .inner
            .preprocess_with_progress(documents, references, tagger, progress)?;
        Ok(self.to_output(&output))
    }

    fn to_output(&self, output: &PreprocessOutput) -> Output {
        Output {
            documents: output
                .documents
                .iter()
                .map(|document| DocumentDTO::from_document(document, self.config.include_common))
                .collect(),
            failures: output.failures.iter().map(FailureDTO::from).collect(),
            metadata: Metadata::new(self.config.language, &output.metadata),
        }
    }
}

// Convenience functions

/// Preprocess tagged documents with default configuration
pub fn preprocess(documents: &[TaggedDocument], references: &[TaggedDocument]) -> Result<Output> {
    Preprocessor::new()?.preprocess(documents, references)
}

/// Preprocess tagged documents with a specific language
pub fn preprocess_with_language(
    documents: &[TaggedDocument],
    references: &[TaggedDocument],
    lang_code: &str,
) -> Result<Output> {
    Preprocessor::with_language(lang_code)?.preprocess(documents, references)
}

/// Preprocess a JSON string holding one tagged document or an array of them
#[cfg(feature = "serde")]
pub fn preprocess_json(json: &str) -> Result<Output> {
    let documents = TaggedDocument::parse_json(json)?;
    preprocess(&documents, &[])
}
