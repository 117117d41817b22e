//! Supported languages and their stop-word tables

pub mod config;
pub mod loader;

pub use config::StopWordConfig;
pub use loader::{embedded_config, get_stop_words, load_from_file};

use crate::error::{EngineError, Result};
use std::fmt;
use std::str::FromStr;

/// Language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English
    English,
    /// German
    German,
}

impl Language {
    /// Every supported language
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::German]
    }

    /// Resolve a language code
    ///
    /// Accepts the three-letter codes `eng`/`ger` and the two-letter ISO codes
    /// `en`/`de`, case-insensitively.
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "eng" | "en" | "english" => Ok(Language::English),
            "ger" | "de" | "german" => Ok(Language::German),
            _ => Err(EngineError::UnsupportedLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// Three-letter code used in configuration
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::German => "ger",
        }
    }

    /// Two-letter ISO 639-1 code, as taggers expect
    pub fn iso_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve() {
        assert_eq!(Language::from_code("eng").unwrap(), Language::English);
        assert_eq!(Language::from_code("en").unwrap(), Language::English);
        assert_eq!(Language::from_code("GER").unwrap(), Language::German);
        assert_eq!("de".parse::<Language>().unwrap(), Language::German);
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = Language::from_code("fra").unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedLanguage { code } if code == "fra"));
    }

    #[test]
    fn test_code_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()).unwrap(), *language);
            assert_eq!(Language::from_code(language.iso_code()).unwrap(), *language);
        }
    }
}
