//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use plagprep_api::dto::{DocumentDTO, FailureDTO, Metadata};
use std::io::Write;

/// Plain text formatter - a header per document, then one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &DocumentDTO) -> Result<()> {
        writeln!(
            self.writer,
            "# {} ({} sentences, {} common, {} lemmas)",
            document.name,
            document.sentence_count,
            document.common_count,
            document.vocabulary.len()
        )?;
        for sentence in &document.sentences {
            let marker = if sentence.common { " (common)" } else { "" };
            writeln!(
                self.writer,
                "[{}..{}]{} {}",
                sentence.start_char, sentence.end_char, marker, sentence.text
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_failure(&mut self, failure: &FailureDTO) -> Result<()> {
        writeln!(self.writer, "! {}: {}", failure.name, failure.error)?;
        Ok(())
    }

    fn finish(&mut self, metadata: &Metadata) -> Result<()> {
        if self.include_metadata {
            writeln!(
                self.writer,
                "--- {} documents ({} failed), {} sentences, {} common, {} merged; {} on {} threads in {} ms",
                metadata.documents_processed,
                metadata.documents_failed,
                metadata.sentences,
                metadata.common_sentences,
                metadata.merged_sentences,
                mode_name(metadata),
                metadata.thread_count,
                metadata.processing_time_ms
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn mode_name(metadata: &Metadata) -> &'static str {
    match metadata.mode_used {
        plagprep_api::ExecutionMode::Sequential => "sequential",
        plagprep_api::ExecutionMode::Parallel => "parallel",
        plagprep_api::ExecutionMode::Adaptive => "adaptive",
    }
}
