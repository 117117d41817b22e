//! Corpus orchestration for plagiarism candidate generation
//!
//! This crate wires the sentence model of `plagprep-core` to a linguistic
//! tagger: it resolves languages and their stop-word tables, enforces the
//! reference-before-primary barrier, and spreads primary documents over a
//! bounded worker pool while keeping output in input order.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod language;
pub mod processor;
pub mod tagger;

// Re-export key types
pub use config::PreprocessConfig;
pub use error::{EngineError, Result, TaggerError};
pub use executor::{ExecutionMode, Executor};
pub use input::SourceDocument;
pub use language::Language;
pub use processor::{
    DocumentFailure, PreprocessOutput, Preprocessor, PreprocessorBuilder, ProcessingMetadata,
};
pub use tagger::{PretaggedTagger, Tagger};

// Re-export from core for convenience
pub use plagprep_core::{
    Document, DocumentId, ReferenceSet, Sentence, StopWords, TaggedSentence, TaggedToken,
};
