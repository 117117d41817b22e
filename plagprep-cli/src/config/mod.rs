//! Configuration file support
//!
//! A `--config` TOML file supplies defaults for the `process` command;
//! command-line flags override whatever it sets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Default language name or code
    pub language: String,

    /// Sentences with fewer words are merged into a neighbor
    pub min_sentence_length: usize,

    /// Drop stop words before counting
    pub remove_stop_words: bool,

    /// Stop-word table replacing the built-in list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_config: Option<PathBuf>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            min_sentence_length: 3,
            remove_stop_words: false,
            language_config: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// List common sentences alongside the others
    pub include_common: bool,

    /// Append run metadata to text output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            include_common: true,
            include_metadata: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// `sequential`, `parallel` or `adaptive`
    pub execution_mode: String,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            execution_mode: "adaptive".to_string(),
            worker_threads: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[processing]
min_sentence_length = 5

[output]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.processing.min_sentence_length, 5);
        assert_eq!(config.processing.language, "english");
        assert_eq!(config.output.format, "json");
        assert!(config.output.pretty_json);
        assert_eq!(config.performance, PerformanceConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: std::result::Result<CliConfig, _> =
            toml::from_str("[processing]\nchunk_size_kb = 256\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plagprep.toml");
        fs::write(&path, "[performance]\nworker_threads = \"many\"\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        let missing = CliConfig::load(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_serialized_defaults_parse_back() {
        let text = toml::to_string(&CliConfig::default()).unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }
}
