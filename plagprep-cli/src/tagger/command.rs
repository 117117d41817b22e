//! External tagger process adapter
//!
//! Runs a program once per document: the document text goes to its stdin,
//! and its stdout must be a JSON array of sentences, each an array of
//! `{ "text", "upos", "lemma", "start_char", "end_char" }` tokens with
//! character offsets. The language is passed as `--lang <iso code>`.

use plagprep_engine::{Language, TaggedSentence, Tagger, TaggerError};
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Tagger backed by an external command
#[derive(Debug, Clone)]
pub struct CommandTagger {
    language: Language,
    program: String,
    args: Vec<String>,
}

impl CommandTagger {
    /// Create a tagger that runs `program` for `language`
    pub fn new(language: Language, program: impl Into<String>) -> Self {
        Self {
            language,
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments placed before `--lang`
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Program name
    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg("--lang")
            .arg(self.language.iso_code())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl Tagger for CommandTagger {
    fn language(&self) -> Language {
        self.language
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedSentence>, TaggerError> {
        let mut child = self
            .command()
            .spawn()
            .map_err(|e| TaggerError::Process(format!("failed to start {}: {e}", self.program)))?;

        // Write stdin while stdout and stderr are drained.
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (write_outcome(&self.program, writer.join()), output)
        });

        let output = output
            .map_err(|e| TaggerError::Process(format!("{} did not finish: {e}", self.program)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TaggerError::Process(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        written?;

        serde_json::from_slice(&output.stdout)
            .map_err(|e| TaggerError::Malformed(format!("{} output: {e}", self.program)))
    }
}

/// Outcome of the stdin writer thread; a panic counts as a failed write
fn write_outcome(
    program: &str,
    joined: thread::Result<io::Result<()>>,
) -> Result<(), TaggerError> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(TaggerError::Process(format!("failed to write to {program}: {e}"))),
        Err(_) => Err(TaggerError::Process(format!("stdin writer for {program} panicked"))),
    }
}


#[cfg(all(test, unix))]
mod process_tests {
    use super::*;

    fn shell(script: &str) -> CommandTagger {
        CommandTagger::new(Language::English, "sh")
            .with_args(vec!["-c".to_string(), script.to_string()])
    }

    #[test]
    fn test_parses_tagger_output() {
        let tagger = shell(
            r#"cat > /dev/null; echo '[[{"text":"Hi","upos":"INTJ","lemma":"hi","start_char":0,"end_char":2},{"text":".","upos":"PUNCT","start_char":2,"end_char":3}]]'"#,
        );

        let sentences = tagger.tag("Hi.").unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].tokens[0].lemma.as_deref(), Some("hi"));
        assert!(sentences[0].tokens[1].is_punctuation());
    }

    #[test]
    fn test_receives_text_and_language() {
        // $0 is "--lang" and $1 the language code under `sh -c`.
        let tagger = shell(r#"read line; [ "$line" = "Hallo" ] && [ "$1" = "de" ] && echo '[]'"#);
        let tagger = CommandTagger {
            language: Language::German,
            ..tagger
        };

        assert_eq!(tagger.tag("Hallo\n").unwrap(), Vec::new());
    }

    #[test]
    fn test_nonzero_exit_is_process_error() {
        let err = shell("echo broken >&2; exit 3").tag("text").unwrap_err();
        match err {
            TaggerError::Process(message) => assert!(message.contains("broken")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_garbage_output_is_malformed() {
        let err = shell("cat > /dev/null; echo nope").tag("text").unwrap_err();
        assert!(matches!(err, TaggerError::Malformed(_)));
    }

    #[test]
    fn test_missing_program() {
        let tagger = CommandTagger::new(Language::English, "plagprep-no-such-tagger");
        assert!(matches!(tagger.tag("x"), Err(TaggerError::Process(_))));
    }
}
