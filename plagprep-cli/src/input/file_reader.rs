//! Reading documents from disk
//!
//! Two input shapes are supported: plain UTF-8 text files, tagged by an
//! external command, and JSON files carrying recorded tagger output (one
//! document object or an array of them).

use anyhow::{Context, Result};
use plagprep_api::{SourceDocument, TaggedDocument};
use std::fs;
use std::path::{Path, PathBuf};

/// File reader for raw and pre-tagged documents
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read plain text files as source documents named by their file stem
    pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceDocument>> {
        paths
            .iter()
            .map(|path| {
                SourceDocument::from_file(path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))
            })
            .collect()
    }

    /// Read JSON files of tagged documents, in file order
    ///
    /// Documents that carry no `path` get the file they were read from.
    pub fn read_tagged(paths: &[PathBuf]) -> Result<Vec<TaggedDocument>> {
        let mut documents = Vec::new();
        for path in paths {
            let content = Self::read_text(path)?;
            let parsed = TaggedDocument::parse_json(&content).with_context(|| {
                format!("Failed to parse tagged documents: {}", path.display())
            })?;
            log::debug!("Read {} tagged documents from {}", parsed.len(), path.display());
            documents.extend(parsed.into_iter().map(|mut document| {
                if document.path.is_none() {
                    document.path = Some(path.display().to_string());
                }
                document
            }));
        }
        Ok(documents)
    }
}
