//! Generate config command implementation

use crate::language_source::Language;
use anyhow::{Context, Result};
use clap::Args;
use plagprep_engine::language::config::{Metadata, StopWordList};
use plagprep_engine::language::{embedded_config, StopWordConfig};
use std::fs;
use std::path::PathBuf;

const STARTER_WORDS: &[&str] = &["a", "an", "and", "the", "of", "to", "in", "is", "it"];

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code written to `[metadata] code`
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Display name written to `[metadata] name`
    #[arg(short, long, default_value = "Custom Language")]
    pub name: String,

    /// Start from a copy of a built-in stop-word list
    #[arg(long, value_enum, value_name = "LANGUAGE")]
    pub from: Option<Language>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        let seed = match self.from {
            Some(language) => format!("{} built-in list", language.as_str()),
            None => "starter list".to_string(),
        };
        println!(
            "✓ Stop-word configuration for '{}' generated successfully from the {seed}: {}",
            self.language_code,
            self.output.display()
        );
        println!();
        println!("Check it with:");
        println!(
            "   plagprep validate --language-config {}",
            self.output.display()
        );
        println!("Use it with:");
        println!(
            "   plagprep process -i corpus.json --remove-stop-words --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Render the TOML file contents
    fn generate_template(&self) -> Result<String> {
        let words = match self.from {
            Some(language) => embedded_config(language.to_engine())?.stop_words.words,
            None => STARTER_WORDS.iter().map(|word| word.to_string()).collect(),
        };
        let config = StopWordConfig {
            metadata: Metadata {
                code: self.language_code.clone(),
                name: self.name.clone(),
            },
            stop_words: StopWordList { words },
        };
        let body = toml::to_string_pretty(&config).context("Failed to render configuration")?;

        Ok(format!(
            "# Stop-word configuration for {code}\n\
             #\n\
             # `code` selects the tagger language and must be a supported one\n\
             # (eng/en, ger/de) unless --language-code overrides it.\n\
             # Words are matched against token text case-insensitively.\n\n{body}",
            code = self.language_code
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(output: PathBuf, from: Option<Language>) -> GenerateConfigArgs {
        GenerateConfigArgs {
            language_code: "de".to_string(),
            output,
            name: "Kurzliste".to_string(),
            from,
        }
    }

    #[test]
    fn test_starter_template_validates() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("custom.toml");

        args(output_path.clone(), None).execute().unwrap();

        let (config, stop_words) = crate::language_source::load_config(&output_path).unwrap();
        assert_eq!(config.metadata.code, "de");
        assert_eq!(config.metadata.name, "Kurzliste");
        assert_eq!(stop_words.len(), STARTER_WORDS.len());
    }

    #[test]
    fn test_seeded_from_builtin_list() {
        let template = args(PathBuf::from("unused.toml"), Some(Language::German))
            .generate_template()
            .unwrap();
        assert!(template.starts_with("# Stop-word configuration for de"));

        let config: StopWordConfig = toml::from_str(&template).unwrap();
        let builtin = plagprep_engine::language::get_stop_words(plagprep_engine::Language::German)
            .unwrap();
        assert_eq!(config.to_stop_words().len(), builtin.len());
        assert!(config.stop_words.words.iter().any(|word| word == "und"));
    }
}
