//! Language source management for CLI

use anyhow::{Context, Result};
use clap::ValueEnum;
use plagprep_engine::language::{self, StopWordConfig};
use plagprep_engine::StopWords;
use std::path::{Path, PathBuf};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// English stop words, `en` tagger models
    English,
    /// German stop words, `de` tagger models
    German,
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        self.to_engine().name()
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        self.to_engine().code()
    }

    /// Engine language
    pub fn to_engine(self) -> plagprep_engine::Language {
        match self {
            Language::English => plagprep_engine::Language::English,
            Language::German => plagprep_engine::Language::German,
        }
    }

    /// Parse a language name or code as written in a config file
    pub fn parse(value: &str) -> Result<Self> {
        if let Ok(language) = <Language as ValueEnum>::from_str(value, true) {
            return Ok(language);
        }
        match plagprep_engine::Language::from_code(value)? {
            plagprep_engine::Language::English => Ok(Language::English),
            plagprep_engine::Language::German => Ok(Language::German),
        }
    }
}

/// Source of language settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Built-in language with its embedded stop-word table
    BuiltIn(Language),
    /// External stop-word configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Optional language code override
        language_code: Option<String>,
    },
}

/// A language resolved from its source
#[derive(Debug, Clone)]
pub struct ResolvedLanguage {
    /// Language the tagger and stop words are for
    pub language: plagprep_engine::Language,
    /// Replacement stop words, when loaded from a file
    pub stop_words: Option<StopWords>,
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(lang) => format!("Built-in: {}", lang.as_str()),
            LanguageSource::External {
                path,
                language_code,
            } => {
                if let Some(code) = language_code {
                    format!("External: {} (code: {})", path.display(), code)
                } else {
                    format!("External: {}", path.display())
                }
            }
        }
    }

    /// Resolve the language and load external stop words
    ///
    /// An external file names its language in `[metadata] code` unless the
    /// code is overridden; either way it must be a supported language, since
    /// the tagger is chosen by it.
    pub fn resolve(&self) -> Result<ResolvedLanguage> {
        match self {
            LanguageSource::BuiltIn(lang) => Ok(ResolvedLanguage {
                language: lang.to_engine(),
                stop_words: None,
            }),
            LanguageSource::External {
                path,
                language_code,
            } => {
                let (config, stop_words) = load_config(path)?;
                let code = language_code.as_deref().unwrap_or(&config.metadata.code);
                let language = plagprep_engine::Language::from_code(code).with_context(|| {
                    format!("Language config {} names an unsupported language", path.display())
                })?;
                log::info!(
                    "Loaded {} stop words for {} from {}",
                    stop_words.len(),
                    language,
                    path.display()
                );
                Ok(ResolvedLanguage {
                    language,
                    stop_words: Some(stop_words),
                })
            }
        }
    }
}

/// Load and validate a stop-word configuration file
pub fn load_config(path: &Path) -> Result<(StopWordConfig, StopWords)> {
    language::load_from_file(path)
        .with_context(|| format!("Failed to load language config: {}", path.display()))
}
