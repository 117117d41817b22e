//! Source documents handed to the preprocessor

use crate::error::{EngineError, Result};
use std::fs;
use std::path::Path;

/// A raw document: identity plus immutable text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Display name (usually the file stem)
    pub name: String,
    /// Source path, empty for in-memory text
    pub path: String,
    /// Full text
    pub text: String,
}

impl SourceDocument {
    /// Create a document from in-memory text
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            text: text.into(),
        }
    }

    /// Set the source path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Read a UTF-8 file; the name is the file stem
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}")))?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            path: path.display().to_string(),
            text,
        })
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_uses_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay.txt");
        fs::write(&path, "Some text.").unwrap();

        let doc = SourceDocument::from_file(&path).unwrap();
        assert_eq!(doc.name, "essay");
        assert_eq!(doc.text, "Some text.");
        assert!(doc.path.ends_with("essay.txt"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SourceDocument::from_file(Path::new("/nonexistent/plagprep.txt")).unwrap_err();
        assert!(matches!(err, EngineError::IoError(_)));
    }
}
