//! Stop-word table schema and validation
//!
//! This module defines the TOML schema shared by the embedded tables and
//! user-supplied replacements.

use plagprep_core::StopWords;
use serde::{Deserialize, Serialize};

/// Root stop-word configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopWordConfig {
    /// Language identification
    pub metadata: Metadata,
    /// Word list
    pub stop_words: StopWordList,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Language code, e.g. `eng`
    pub code: String,
    /// Display name
    pub name: String,
}

/// Stop-word list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopWordList {
    /// Surface forms; compared case-insensitively
    #[serde(default)]
    pub words: Vec<String>,
}

impl StopWordConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }
        if let Some(index) = self
            .stop_words
            .words
            .iter()
            .position(|word| word.trim().is_empty())
        {
            return Err(format!("stop_words.words[{index}] is empty"));
        }
        Ok(())
    }

    /// Build the lookup table
    pub fn to_stop_words(&self) -> StopWords {
        StopWords::new(&self.stop_words.words)
    }
}
