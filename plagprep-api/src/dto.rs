//! Data Transfer Objects for API

#[cfg(feature = "serde")]
use crate::error::Result;
use plagprep_core::{Document, Sentence, TaggedSentence};
use plagprep_engine::{processor::ProcessingMetadata, DocumentFailure, Language, SourceDocument};
use std::collections::BTreeMap;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Single-threaded processing
    Sequential,
    /// Worker pool processing
    Parallel,
    /// Pick based on corpus size
    Adaptive,
}

impl From<ExecutionMode> for plagprep_engine::ExecutionMode {
    fn from(mode: ExecutionMode) -> Self {
        match mode {
            ExecutionMode::Sequential => plagprep_engine::ExecutionMode::Sequential,
            ExecutionMode::Parallel => plagprep_engine::ExecutionMode::Parallel,
            ExecutionMode::Adaptive => plagprep_engine::ExecutionMode::Adaptive,
        }
    }
}

impl From<plagprep_engine::ExecutionMode> for ExecutionMode {
    fn from(mode: plagprep_engine::ExecutionMode) -> Self {
        match mode {
            plagprep_engine::ExecutionMode::Sequential => ExecutionMode::Sequential,
            plagprep_engine::ExecutionMode::Parallel => ExecutionMode::Parallel,
            plagprep_engine::ExecutionMode::Adaptive => ExecutionMode::Adaptive,
        }
    }
}

/// A document together with its recorded tagger output
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedDocument {
    /// Display name
    pub name: String,
    /// Source path
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: Option<String>,
    /// Full text
    pub text: String,
    /// Tagger output for `text`, with character offsets
    #[cfg_attr(feature = "serde", serde(default))]
    pub sentences: Vec<TaggedSentence>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(TaggedDocument),
    Many(Vec<TaggedDocument>),
}

impl TaggedDocument {
    /// Create a tagged document
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        sentences: Vec<TaggedSentence>,
    ) -> Self {
        Self {
            name: name.into(),
            path: None,
            text: text.into(),
            sentences,
        }
    }

    /// Parse a JSON object or an array of objects
    #[cfg(feature = "serde")]
    pub fn parse_json(json: &str) -> Result<Vec<TaggedDocument>> {
        Ok(match serde_json::from_str::<OneOrMany>(json)? {
            OneOrMany::One(document) => vec![document],
            OneOrMany::Many(documents) => documents,
        })
    }

    /// Source document for the engine
    pub fn to_source(&self) -> SourceDocument {
        SourceDocument::new(&self.name, &self.text)
            .with_path(self.path.clone().unwrap_or_default())
    }
}

/// One sentence of a preprocessed document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceDTO {
    /// First character (inclusive)
    pub start_char: usize,
    /// End character (exclusive)
    pub end_char: usize,
    /// Source text of the span
    pub text: String,
    /// Whether the sentence duplicates reference content
    pub common: bool,
    /// Counted words (sum of the bag)
    pub word_count: usize,
    /// Lemma → occurrences
    pub bag: BTreeMap<String, u32>,
}

impl SentenceDTO {
    /// Convert a sentence of `document`
    pub fn from_sentence(document: &Document, sentence: &Sentence) -> Self {
        Self {
            start_char: sentence.start_char(),
            end_char: sentence.end_char(),
            text: document.sentence_text(sentence).to_string(),
            common: sentence.is_common(),
            word_count: sentence.word_count(),
            bag: sentence
                .bag()
                .iter()
                .map(|(lemma, count)| (lemma.to_string(), count))
                .collect(),
        }
    }
}

/// A preprocessed document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentDTO {
    /// Display name
    pub name: String,
    /// Source path
    pub path: String,
    /// Sentences after merging, common ones included
    pub sentence_count: usize,
    /// Sentences flagged as common
    pub common_count: usize,
    /// Listed sentences in offset order
    pub sentences: Vec<SentenceDTO>,
    /// Lemma → number of non-common sentences containing it
    pub vocabulary: BTreeMap<String, u32>,
}

impl DocumentDTO {
    /// Convert a document, optionally leaving common sentences out of the list
    pub fn from_document(document: &Document, include_common: bool) -> Self {
        Self {
            name: document.name().to_string(),
            path: document.path().to_string(),
            sentence_count: document.sentence_count(),
            common_count: document.common_count(),
            sentences: document
                .sentences(include_common)
                .map(|sentence| SentenceDTO::from_sentence(document, sentence))
                .collect(),
            vocabulary: document.vocabulary().snapshot(),
        }
    }
}

/// A document that could not be preprocessed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FailureDTO {
    /// Position in the input
    pub index: usize,
    /// Document name
    pub name: String,
    /// Error message
    pub error: String,
}

impl From<&DocumentFailure> for FailureDTO {
    fn from(failure: &DocumentFailure) -> Self {
        Self {
            index: failure.index,
            name: failure.name.clone(),
            error: failure.error.to_string(),
        }
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Language code
    pub language: String,
    /// Execution mode used
    pub mode_used: ExecutionMode,
    /// Number of threads used
    pub thread_count: usize,
    /// Primary documents preprocessed
    pub documents_processed: usize,
    /// Primary documents that failed
    pub documents_failed: usize,
    /// Reference documents preprocessed
    pub reference_documents: usize,
    /// Sentences in the reference set
    pub reference_sentences: usize,
    /// Sentences across all primary documents
    pub sentences: usize,
    /// Of those, common sentences
    pub common_sentences: usize,
    /// Merges performed
    pub merged_sentences: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl Metadata {
    pub(crate) fn new(language: Language, metadata: &ProcessingMetadata) -> Self {
        Self {
            language: language.code().to_string(),
            mode_used: metadata.execution_mode.into(),
            thread_count: metadata.threads,
            documents_processed: metadata.documents_processed,
            documents_failed: metadata.documents_failed,
            reference_documents: metadata.reference_documents,
            reference_sentences: metadata.reference_sentences,
            sentences: metadata.sentences,
            common_sentences: metadata.common_sentences,
            merged_sentences: metadata.merged_sentences,
            processing_time_ms: metadata.processing_time_ms as u64,
        }
    }
}

/// Complete output with documents and metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Preprocessed documents in input order
    pub documents: Vec<DocumentDTO>,
    /// Documents that failed
    pub failures: Vec<FailureDTO>,
    /// Processing metadata
    pub metadata: Metadata,
}
