//! Output formatting module

use anyhow::Result;
use plagprep_api::dto::{DocumentDTO, FailureDTO, Metadata};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one preprocessed document
    fn format_document(&mut self, document: &DocumentDTO) -> Result<()>;

    /// Format a document that could not be preprocessed
    fn format_failure(&mut self, failure: &FailureDTO) -> Result<()>;

    /// Finalize output with the run metadata
    fn finish(&mut self, metadata: &Metadata) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
