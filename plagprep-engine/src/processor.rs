//! Corpus preprocessor and builder
//!
//! Runs the two phases of candidate generation over a corpus:
//!
//! 1. every reference document is tagged and built without merging, and the
//!    word texts of all its sentences are flattened into a [`ReferenceSet`];
//! 2. only then are the primary documents tagged and built, each checked
//!    against the complete reference set.
//!
//! Phase 1 is a barrier: any reference failure aborts the run, since every
//! primary document depends on the full set. In phase 2 a failing document is
//! logged and reported, and its siblings continue.

use crate::{
    config::PreprocessConfig,
    error::{EngineError, Result},
    executor::{auto_select, default_threads, ExecutionMode, Executor, SequentialExecutor},
    input::SourceDocument,
    language::{get_stop_words, Language},
    tagger::Tagger,
};
use plagprep_core::{
    BuildOptions, BuildStats, Document, DocumentId, ReferenceSet, SentenceBuilder, StopWords,
};
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Main corpus preprocessor
#[derive(Debug, Clone)]
pub struct Preprocessor {
    language: Language,
    config: PreprocessConfig,
    stop_words: Arc<StopWords>,
}

/// A primary document that could not be preprocessed
#[derive(Debug)]
pub struct DocumentFailure {
    /// Position of the document in the input
    pub index: usize,
    /// Document name
    pub name: String,
    /// What went wrong
    pub error: EngineError,
}

/// Rich output with metadata
#[derive(Debug)]
pub struct PreprocessOutput {
    /// Successfully preprocessed primary documents, in input order
    pub documents: Vec<Document>,
    /// Primary documents that failed, in input order
    pub failures: Vec<DocumentFailure>,
    /// Preprocessed reference documents
    pub reference_documents: Vec<Document>,
    /// Flattened reference sentences the primary documents were checked against
    pub references: ReferenceSet,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Worker threads used
    pub threads: usize,
    /// Primary documents preprocessed successfully
    pub documents_processed: usize,
    /// Primary documents that failed
    pub documents_failed: usize,
    /// Reference documents preprocessed
    pub reference_documents: usize,
    /// Sentences in the reference set
    pub reference_sentences: usize,
    /// Sentences in the successful primary documents
    pub sentences: usize,
    /// Of those, sentences flagged as common
    pub common_sentences: usize,
    /// Merges performed by the small-sentence pass
    pub merged_sentences: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

impl Preprocessor {
    /// Create a preprocessor with default configuration
    pub fn new(language: Language) -> Result<Self> {
        Self::with_config(language, PreprocessConfig::default())
    }

    /// Create a preprocessor for a language code such as `eng` or `ger`
    pub fn with_language(code: &str) -> Result<Self> {
        Self::new(Language::from_code(code)?)
    }

    /// Create a preprocessor with custom configuration
    pub fn with_config(language: Language, config: PreprocessConfig) -> Result<Self> {
        config.validate()?;
        let stop_words = get_stop_words(language)?;
        Ok(Self {
            language,
            config,
            stop_words,
        })
    }

    /// Replace the built-in stop words
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Arc::new(stop_words);
        self
    }

    /// Language of this preprocessor
    pub fn language(&self) -> Language {
        self.language
    }

    /// Configuration in effect
    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// Stop words in effect
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Mode and thread count a corpus of `document_count` would run with
    pub fn plan(&self, document_count: usize) -> (ExecutionMode, usize) {
        let threads = self.config.threads.unwrap_or_else(default_threads);
        let mode = match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(document_count, threads),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            mode => mode,
        };
        let threads = match mode {
            ExecutionMode::Parallel => threads,
            _ => 1,
        };
        (mode, threads)
    }

    /// Preprocess a corpus
    pub fn preprocess<T: Tagger + ?Sized>(
        &self,
        documents: &[SourceDocument],
        references: &[SourceDocument],
        tagger: &T,
    ) -> Result<PreprocessOutput> {
        self.preprocess_with_progress(documents, references, tagger, |_| {})
    }

    /// Preprocess a corpus, calling `progress` after each primary document
    ///
    /// `progress` runs on worker threads, once per document, in completion
    /// order.
    pub fn preprocess_with_progress<T, P>(
        &self,
        documents: &[SourceDocument],
        references: &[SourceDocument],
        tagger: &T,
        progress: P,
    ) -> Result<PreprocessOutput>
    where
        T: Tagger + ?Sized,
        P: Fn(&SourceDocument) + Sync + Send,
    {
        self.check_tagger(tagger)?;
        let start_time = Instant::now();
        let (mode, threads) = self.plan(documents.len());
        log::info!(
            "Preprocessing {} documents against {} reference documents ({}, {} {}, {mode})",
            documents.len(),
            references.len(),
            self.language,
            threads,
            if threads == 1 { "thread" } else { "threads" },
        );

        let (reference_documents, reference_set) =
            self.preprocess_references_with_mode(references, tagger, mode)?;

        let options = self.config.build_options();
        let results = self.run(mode, documents, |index, source| {
            let result = self.process_document(
                DocumentId(index),
                source,
                tagger,
                &reference_set,
                options,
            );
            progress(source);
            result
        })?;

        let mut output_documents = Vec::with_capacity(documents.len());
        let mut failures = Vec::new();
        let mut merged_sentences = 0;
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok((document, stats)) => {
                    merged_sentences += stats.merged;
                    output_documents.push(document);
                }
                Err(error) => {
                    let name = documents[index].name.clone();
                    log::error!("Skipping document '{name}': {error}");
                    failures.push(DocumentFailure { index, name, error });
                }
            }
        }

        let metadata = ProcessingMetadata {
            execution_mode: mode,
            threads,
            documents_processed: output_documents.len(),
            documents_failed: failures.len(),
            reference_documents: reference_documents.len(),
            reference_sentences: reference_set.len(),
            sentences: output_documents.iter().map(Document::sentence_count).sum(),
            common_sentences: output_documents.iter().map(Document::common_count).sum(),
            merged_sentences,
            processing_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        };
        log::info!(
            "Preprocessed {} documents ({} failed): {} sentences, {} common, {} merges in {:.1} ms",
            metadata.documents_processed,
            metadata.documents_failed,
            metadata.sentences,
            metadata.common_sentences,
            metadata.merged_sentences,
            metadata.processing_time_ms,
        );

        Ok(PreprocessOutput {
            documents: output_documents,
            failures,
            reference_documents,
            references: reference_set,
            metadata,
        })
    }

    /// Preprocess reference documents and flatten them into a reference set
    ///
    /// Reference documents are never merged. Any failure aborts.
    pub fn preprocess_references<T: Tagger + ?Sized>(
        &self,
        references: &[SourceDocument],
        tagger: &T,
    ) -> Result<(Vec<Document>, ReferenceSet)> {
        self.check_tagger(tagger)?;
        let (mode, _) = self.plan(references.len());
        self.preprocess_references_with_mode(references, tagger, mode)
    }

    /// Preprocess one primary document against a finished reference set
    pub fn preprocess_document<T: Tagger + ?Sized>(
        &self,
        id: DocumentId,
        source: &SourceDocument,
        tagger: &T,
        references: &ReferenceSet,
    ) -> Result<Document> {
        self.check_tagger(tagger)?;
        self.process_document(id, source, tagger, references, self.config.build_options())
            .map(|(document, _)| document)
    }

    fn preprocess_references_with_mode<T: Tagger + ?Sized>(
        &self,
        references: &[SourceDocument],
        tagger: &T,
        mode: ExecutionMode,
    ) -> Result<(Vec<Document>, ReferenceSet)> {
        if references.is_empty() {
            return Ok((Vec::new(), ReferenceSet::empty()));
        }

        let options = self.config.build_options().for_reference();
        let empty = ReferenceSet::empty();
        let results = self.run(mode, references, |index, source| {
            self.process_document(DocumentId(index), source, tagger, &empty, options)
        })?;

        let mut documents = Vec::with_capacity(results.len());
        for (source, result) in references.iter().zip(results) {
            match result {
                Ok((document, _)) => documents.push(document),
                Err(e) => {
                    return Err(EngineError::ReferenceDocument {
                        name: source.name.clone(),
                        reason: e.to_string(),
                    })
                }
            }
        }

        let reference_set = ReferenceSet::from_documents(&documents);
        log::debug!(
            "Reference set holds {} sentences from {} documents",
            reference_set.len(),
            documents.len()
        );
        Ok((documents, reference_set))
    }

    fn process_document<T: Tagger + ?Sized>(
        &self,
        id: DocumentId,
        source: &SourceDocument,
        tagger: &T,
        references: &ReferenceSet,
        options: BuildOptions,
    ) -> Result<(Document, BuildStats)> {
        let tagged = tagger
            .tag(&source.text)
            .map_err(|error| EngineError::Tagger {
                document: source.name.clone(),
                source: error,
            })?;

        let mut document = Document::new(id, &source.name, &source.path, &source.text);
        let stats = SentenceBuilder::new(options, &self.stop_words).build(
            &mut document,
            &tagged,
            references,
        )?;

        if document.is_empty() {
            log::warn!("Document '{}' produced no sentences", source.name);
        }
        log::debug!(
            "Document '{}': {} tagged sentences, {} skipped, {} common, {} merges, {} kept",
            source.name,
            stats.tagged,
            stats.skipped,
            stats.common,
            stats.merged,
            document.sentence_count()
        );
        Ok((document, stats))
    }

    fn check_tagger<T: Tagger + ?Sized>(&self, tagger: &T) -> Result<()> {
        if tagger.language() != self.language {
            return Err(EngineError::ConfigError(format!(
                "tagger language {} does not match preprocessor language {}",
                tagger.language(),
                self.language
            )));
        }
        Ok(())
    }

    fn run<I, R, F>(&self, mode: ExecutionMode, items: &[I], f: F) -> Result<Vec<R>>
    where
        I: Sync,
        R: Send,
        F: Fn(usize, &I) -> R + Sync + Send,
    {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => ParallelExecutor::new(self.config.threads).map(items, f),
            _ => SequentialExecutor.map(items, f),
        }
    }
}

/// Builder for Preprocessor
///
/// Provides a fluent interface for configuring the preprocessor.
#[derive(Debug, Clone)]
pub struct PreprocessorBuilder {
    language: Option<String>,
    config: PreprocessConfig,
    stop_words: Option<StopWords>,
}

impl Default for PreprocessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PreprocessorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            language: None,
            config: PreprocessConfig::default(),
            stop_words: None,
        }
    }

    /// Set the language code (default `eng`)
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the merge threshold
    pub fn min_sentence_length(mut self, length: usize) -> Self {
        self.config.min_sentence_length = length;
        self
    }

    /// Enable or disable stop-word removal
    pub fn remove_stop_words(mut self, remove: bool) -> Self {
        self.config.remove_stop_words = remove;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Replace the built-in stop words
    pub fn stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Build the preprocessor
    pub fn build(self) -> Result<Preprocessor> {
        let language = match &self.language {
            Some(code) => Language::from_code(code)?,
            None => Language::English,
        };
        let preprocessor = Preprocessor::with_config(language, self.config)?;
        Ok(match self.stop_words {
            Some(stop_words) => preprocessor.with_stop_words(stop_words),
            None => preprocessor,
        })
    }
}
