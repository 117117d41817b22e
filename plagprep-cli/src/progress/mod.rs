//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for document processing
///
/// Safe to share with worker threads: completion updates go through the
/// thread-safe progress bar handle.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar for `total_documents`
    pub fn init_documents(&mut self, total_documents: u64) {
        if self.quiet || total_documents == 0 {
            return;
        }

        let pb = ProgressBar::new(total_documents);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed document
    pub fn document_completed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {}", name));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    /// Documents reported so far
    pub fn position(&self) -> u64 {
        self.progress_bar.as_ref().map_or(0, ProgressBar::position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_documents(3);
        reporter.document_completed("essay");
        reporter.finish();
        assert_eq!(reporter.position(), 0);
    }

    #[test]
    fn test_counts_completed_documents() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_documents(2);
        reporter.document_completed("essay");
        reporter.document_completed("notes");
        assert_eq!(reporter.position(), 2);
        reporter.finish();
    }
}
