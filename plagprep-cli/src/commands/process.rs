//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::{Language, LanguageSource};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::tagger::CommandTagger;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use plagprep_api::{Config, ExecutionMode, Output, Preprocessor, SourceDocument};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    ///
    /// JSON files of tagged documents, or plain text files when --tagger is set.
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Reference files or patterns whose sentences mark common content
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub reference: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Built-in language
    #[arg(short, long, value_enum, conflicts_with = "language_config")]
    pub language: Option<Language>,

    /// Stop-word configuration file replacing the built-in list
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Language code overriding the one in --language-config
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,

    /// External tagger program; reads text on stdin, writes tagged JSON
    #[arg(long, value_name = "PROGRAM")]
    pub tagger: Option<String>,

    /// Argument passed to the tagger program (repeatable)
    #[arg(
        long = "tagger-arg",
        value_name = "ARG",
        requires = "tagger",
        allow_hyphen_values = true
    )]
    pub tagger_args: Vec<String>,

    /// Merge sentences with fewer words than this
    #[arg(short, long, value_name = "WORDS")]
    pub min_sentence_length: Option<usize>,

    /// Drop stop words before counting
    #[arg(short = 's', long)]
    pub remove_stop_words: bool,

    /// Leave common sentences out of the listing
    #[arg(long)]
    pub hide_common: bool,

    /// Always use the worker pool
    #[arg(short, long, conflicts_with = "sequential")]
    pub parallel: bool,

    /// Process documents on the calling thread
    #[arg(long)]
    pub sequential: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One header per document, one sentence per line
    Text,
    /// Documents, failures and metadata as a JSON object
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting preprocessing");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let source = self.language_source(&file_config)?;
        log::info!("Language: {}", source.display_name());
        let preprocessor = Preprocessor::with_config(self.build_config(&file_config, &source)?)
            .context("Failed to create preprocessor")?;

        let inputs = resolve_patterns(&self.input)?;
        let references = if self.reference.is_empty() {
            Vec::new()
        } else {
            resolve_patterns(&self.reference)?
        };
        log::info!(
            "Resolved {} input and {} reference files",
            inputs.len(),
            references.len()
        );

        let output = self.run(&preprocessor, &inputs, &references)?;

        let format = self.output_format(&file_config)?;
        let mut formatter = self.create_formatter(format, &file_config)?;
        for document in &output.documents {
            formatter.format_document(document)?;
        }
        for failure in &output.failures {
            formatter.format_failure(failure)?;
        }
        formatter.finish(&output.metadata)?;

        if !output.failures.is_empty() {
            let total = output.documents.len() + output.failures.len();
            return Err(CliError::ProcessingError(format!(
                "{} of {} documents failed",
                output.failures.len(),
                total
            ))
            .into());
        }

        Ok(())
    }

    fn run(
        &self,
        preprocessor: &Preprocessor,
        inputs: &[PathBuf],
        references: &[PathBuf],
    ) -> Result<Output> {
        let mut progress = ProgressReporter::new(self.quiet);

        let output = match &self.tagger {
            Some(program) => {
                let tagger = CommandTagger::new(preprocessor.language(), program)
                    .with_args(self.tagger_args.clone());
                log::info!("Tagging with external command: {}", tagger.program());
                let documents = FileReader::read_sources(inputs)?;
                let reference_documents = FileReader::read_sources(references)?;
                progress.init_documents(documents.len() as u64);
                preprocessor.preprocess_with_tagger(
                    &documents,
                    &reference_documents,
                    &tagger,
                    |document: &SourceDocument| progress.document_completed(&document.name),
                )?
            }
            None => {
                let documents = FileReader::read_tagged(inputs)?;
                let reference_documents = FileReader::read_tagged(references)?;
                progress.init_documents(documents.len() as u64);
                preprocessor.preprocess_tagged_with_progress(
                    &documents,
                    &reference_documents,
                    |document: &SourceDocument| progress.document_completed(&document.name),
                )?
            }
        };

        progress.finish();
        Ok(output)
    }

    /// Pick the language source: flags first, then the config file
    pub fn language_source(&self, file_config: &CliConfig) -> Result<LanguageSource> {
        if let Some(path) = &self.language_config {
            return Ok(LanguageSource::External {
                path: path.clone(),
                language_code: self.language_code.clone(),
            });
        }
        if let Some(language) = self.language {
            return Ok(LanguageSource::BuiltIn(language));
        }
        if let Some(path) = &file_config.processing.language_config {
            return Ok(LanguageSource::External {
                path: path.clone(),
                language_code: None,
            });
        }
        Ok(LanguageSource::BuiltIn(Language::parse(
            &file_config.processing.language,
        )?))
    }

    /// Merge flags over the config file into a preprocessing configuration
    pub fn build_config(&self, file_config: &CliConfig, source: &LanguageSource) -> Result<Config> {
        let resolved = source.resolve()?;
        let processing = &file_config.processing;
        let performance = &file_config.performance;

        let mode = if self.parallel {
            ExecutionMode::Parallel
        } else if self.sequential {
            ExecutionMode::Sequential
        } else {
            parse_mode(&performance.execution_mode)?
        };
        let threads = self.threads.or(match performance.worker_threads {
            0 => None,
            n => Some(n),
        });

        let mut builder = Config::builder()
            .language(resolved.language.code())?
            .min_sentence_length(
                self.min_sentence_length
                    .unwrap_or(processing.min_sentence_length),
            )
            .remove_stop_words(self.remove_stop_words || processing.remove_stop_words)
            .execution_mode(mode)
            .threads(threads)
            .include_common(!self.hide_common && file_config.output.include_common);
        if let Some(stop_words) = resolved.stop_words {
            builder = builder.stop_words(stop_words);
        }

        builder.build().context("Invalid processing options")
    }

    /// Output format: flag first, then the config file
    pub fn output_format(&self, file_config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&file_config.output.format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    file_config.output.format
                ))
                .into()
            }),
        }
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        file_config: &CliConfig,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(
                writer,
                file_config.output.include_metadata,
            )),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, file_config.output.pretty_json))
            }
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger installed earlier in the process (tests) stays in place.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn parse_mode(value: &str) -> Result<ExecutionMode> {
    match value.to_ascii_lowercase().as_str() {
        "sequential" => Ok(ExecutionMode::Sequential),
        "parallel" => Ok(ExecutionMode::Parallel),
        "adaptive" => Ok(ExecutionMode::Adaptive),
        other => Err(CliError::ConfigError(format!("unknown execution mode '{other}'")).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ProcessArgs,
    }

    fn parse(args: &[&str]) -> ProcessArgs {
        let mut argv = vec!["process"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).args
    }

    #[test]
    fn test_defaults_without_config_file() {
        let args = parse(&["-i", "corpus.json"]);
        let file_config = CliConfig::default();
        let source = args.language_source(&file_config).unwrap();
        assert_eq!(source, LanguageSource::BuiltIn(Language::English));

        let config = args.build_config(&file_config, &source).unwrap();
        assert_eq!(config.min_sentence_length(), 3);
        assert!(!config.remove_stop_words());
        assert!(config.include_common());
        assert_eq!(config.execution_mode(), ExecutionMode::Adaptive);
        assert_eq!(config.threads(), None);
        assert_eq!(args.output_format(&file_config).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_config_file() {
        let file_config: CliConfig = toml::from_str(
            r#"
[processing]
language = "german"
min_sentence_length = 5

[output]
format = "json"
include_common = true

[performance]
execution_mode = "parallel"
worker_threads = 4
"#,
        )
        .unwrap();

        let from_file = parse(&["-i", "corpus.json"]);
        let source = from_file.language_source(&file_config).unwrap();
        assert_eq!(source, LanguageSource::BuiltIn(Language::German));
        let config = from_file.build_config(&file_config, &source).unwrap();
        assert_eq!(config.min_sentence_length(), 5);
        assert_eq!(config.execution_mode(), ExecutionMode::Parallel);
        assert_eq!(config.threads(), Some(4));
        assert_eq!(
            from_file.output_format(&file_config).unwrap(),
            OutputFormat::Json
        );

        let flags = parse(&[
            "-i",
            "corpus.json",
            "-l",
            "english",
            "-m",
            "2",
            "--sequential",
            "-t",
            "2",
            "--hide-common",
            "-f",
            "text",
        ]);
        let source = flags.language_source(&file_config).unwrap();
        assert_eq!(source, LanguageSource::BuiltIn(Language::English));
        let config = flags.build_config(&file_config, &source).unwrap();
        assert_eq!(config.min_sentence_length(), 2);
        assert_eq!(config.execution_mode(), ExecutionMode::Sequential);
        assert_eq!(config.threads(), Some(2));
        assert!(!config.include_common());
        assert_eq!(flags.output_format(&file_config).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file_config = CliConfig::default();
        let args = parse(&["-i", "corpus.json", "-m", "0"]);
        let source = args.language_source(&file_config).unwrap();
        assert!(args.build_config(&file_config, &source).is_err());

        let mut bad_file = CliConfig::default();
        bad_file.output.format = "markdown".to_string();
        assert!(args.output_format(&bad_file).is_err());

        bad_file.performance.execution_mode = "eager".to_string();
        assert!(parse(&["-i", "corpus.json"])
            .build_config(&bad_file, &source)
            .is_err());

        bad_file.processing.language = "japanese".to_string();
        assert!(parse(&["-i", "corpus.json"])
            .language_source(&bad_file)
            .is_err());
    }

    #[test]
    fn test_conflicting_flags() {
        let result = TestCli::try_parse_from([
            "process",
            "-i",
            "corpus.json",
            "--parallel",
            "--sequential",
        ]);
        assert!(result.is_err());

        let result = TestCli::try_parse_from(["process", "-i", "corpus.json", "--tagger-arg", "-x"]);
        assert!(result.is_err());
    }
}
