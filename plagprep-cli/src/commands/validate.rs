//! Validate command implementation

use crate::language_source::load_config;
use anyhow::Result;
use clap::Args;
use plagprep_engine::language::StopWordConfig;
use std::collections::HashSet;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Stop-word configuration file to check
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let (config, stop_words) = match load_config(&self.language_config) {
            Ok(loaded) => loaded,
            Err(e) => {
                println!("✗ Configuration is invalid: {}", self.language_config.display());
                println!("  {e:#}");
                anyhow::bail!("Validation failed: {e:#}");
            }
        };

        println!("✓ Configuration is valid: {}", self.language_config.display());
        println!("  Language code: {}", config.metadata.code);
        println!("  Language name: {}", config.metadata.name);
        println!("  Stop words: {}", stop_words.len());

        let duplicates = duplicate_words(&config);
        if !duplicates.is_empty() {
            println!("  Duplicates (ignored): {}", duplicates.join(", "));
        }
        if plagprep_engine::Language::from_code(&config.metadata.code).is_err() {
            println!(
                "  Note: '{}' is not a supported language; pass --language-code when processing",
                config.metadata.code
            );
        }
        Ok(())
    }
}

/// Words listed more than once, compared case-insensitively, in file order
fn duplicate_words(config: &StopWordConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for word in &config.stop_words.words {
        let folded = word.to_lowercase();
        if !seen.insert(folded.clone()) && !duplicates.contains(&folded) {
            duplicates.push(folded);
        }
    }
    duplicates
}
