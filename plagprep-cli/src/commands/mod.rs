//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preprocess documents into sentence candidates
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a stop-word configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a stop-word configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List available output formats
    Formats,
}

/// Print every supported language with its built-in stop-word count
pub fn list_languages() -> Result<()> {
    println!("Supported languages:");
    for language in plagprep_engine::Language::all() {
        let stop_words = plagprep_engine::language::get_stop_words(*language)?;
        println!(
            "  {:<8} {} / {}  {} stop words",
            language.name().to_lowercase(),
            language.code(),
            language.iso_code(),
            stop_words.len()
        );
    }
    Ok(())
}

/// Print the available output formats
pub fn list_formats() -> Result<()> {
    println!("Output formats:");
    println!("  text     One header per document, one sentence per line");
    println!("  json     Documents, failures and run metadata as one JSON object");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_commands_run() {
        assert!(list_languages().is_ok());
        assert!(list_formats().is_ok());
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }
}
