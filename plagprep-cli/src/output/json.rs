//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use plagprep_api::dto::{DocumentDTO, FailureDTO, Metadata};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - buffers documents and writes one object at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentDTO>,
    failures: Vec<FailureDTO>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    documents: &'a [DocumentDTO],
    failures: &'a [FailureDTO],
    metadata: &'a Metadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &DocumentDTO) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn format_failure(&mut self, failure: &FailureDTO) -> Result<()> {
        self.failures.push(failure.clone());
        Ok(())
    }

    fn finish(&mut self, metadata: &Metadata) -> Result<()> {
        let output = JsonOutput {
            documents: &self.documents,
            failures: &self.failures,
            metadata,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &output)?;
        } else {
            serde_json::to_writer(&mut self.writer, &output)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plagprep_api::ExecutionMode;
    use std::collections::BTreeMap;

    #[test]
    fn test_single_object_with_metadata() {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer, false);
        formatter
            .format_document(&DocumentDTO {
                name: "notes".to_string(),
                path: String::new(),
                sentence_count: 0,
                common_count: 0,
                sentences: Vec::new(),
                vocabulary: BTreeMap::new(),
            })
            .unwrap();
        formatter
            .format_failure(&FailureDTO {
                index: 1,
                name: "broken".to_string(),
                error: "bad offsets".to_string(),
            })
            .unwrap();
        formatter
            .finish(&Metadata {
                language: "ger".to_string(),
                mode_used: ExecutionMode::Parallel,
                thread_count: 2,
                documents_processed: 1,
                documents_failed: 1,
                reference_documents: 0,
                reference_sentences: 0,
                sentences: 0,
                common_sentences: 0,
                merged_sentences: 0,
                processing_time_ms: 3,
            })
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["documents"][0]["name"], "notes");
        assert_eq!(value["failures"][0]["error"], "bad offsets");
        assert_eq!(value["metadata"]["mode_used"], "parallel");
        assert_eq!(value["metadata"]["language"], "ger");
    }
}
