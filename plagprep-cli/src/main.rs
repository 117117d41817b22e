//! plagprep command-line entry point

use anyhow::Result;
use clap::Parser;
use plagprep_cli::commands::{Commands, ListCommands};

/// Candidate-generation preprocessing for plagiarism detection
#[derive(Debug, Parser)]
#[command(name = "plagprep", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Languages => plagprep_cli::commands::list_languages(),
            ListCommands::Formats => plagprep_cli::commands::list_formats(),
        },
        Commands::GenerateConfig(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
    }
}
