//! Stop-word table loader
//!
//! Manages the embedded tables with caching and loads replacements from disk.

use super::config::StopWordConfig;
use super::Language;
use crate::error::{EngineError, Result};
use plagprep_core::StopWords;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Embedded stop-word tables
static EMBEDDED: OnceLock<HashMap<Language, Arc<StopWords>>> = OnceLock::new();

fn embedded_source(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::English => (
            "english.toml",
            include_str!("../../configs/languages/english.toml"),
        ),
        Language::German => (
            "german.toml",
            include_str!("../../configs/languages/german.toml"),
        ),
    }
}

/// Parsed built-in table for a language, word list included
pub fn embedded_config(language: Language) -> Result<StopWordConfig> {
    let (name, toml_str) = embedded_source(language);
    parse_config(name, toml_str)
}

/// Built-in stop words for a language
pub fn get_stop_words(language: Language) -> Result<Arc<StopWords>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();
        for language in Language::all() {
            let (name, toml_str) = embedded_source(*language);
            match parse_config(name, toml_str) {
                Ok(config) => {
                    map.insert(*language, Arc::new(config.to_stop_words()));
                }
                Err(e) => {
                    log::error!("Failed to load embedded stop words for {language}: {e}");
                }
            }
        }
        map
    });

    embedded
        .get(&language)
        .cloned()
        .ok_or_else(|| EngineError::LanguageConfig {
            path: embedded_source(language).0.to_string(),
            error: "embedded table failed to load".to_string(),
        })
}

/// Load a replacement stop-word table from a TOML file
pub fn load_from_file(path: &Path) -> Result<(StopWordConfig, StopWords)> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::LanguageConfig {
        path: display.clone(),
        error: e.to_string(),
    })?;
    let config = parse_config(&display, &content)?;
    log::debug!(
        "Loaded {} stop words for '{}' from {display}",
        config.stop_words.words.len(),
        config.metadata.code
    );
    let stop_words = config.to_stop_words();
    Ok((config, stop_words))
}

/// Parse and validate a stop-word table
pub fn parse_config(path: &str, toml_str: &str) -> Result<StopWordConfig> {
    let config: StopWordConfig =
        toml::from_str(toml_str).map_err(|e| EngineError::LanguageConfig {
            path: path.to_string(),
            error: e.to_string(),
        })?;
    config.validate().map_err(|error| EngineError::LanguageConfig {
        path: path.to_string(),
        error,
    })?;
    Ok(config)
}
