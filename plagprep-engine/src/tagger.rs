//! Linguistic tagger seam
//!
//! Tokenization, part-of-speech tagging and lemmatization happen outside this
//! workspace. A [`Tagger`] is constructed once per language and handed to the
//! preprocessor explicitly; workers share it by reference.

use crate::error::TaggerError;
use crate::language::Language;
use plagprep_core::TaggedSentence;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Produces tagged sentences for a document text
pub trait Tagger: Send + Sync {
    /// Language the tagger was built for
    fn language(&self) -> Language;

    /// Split `text` into sentences of tagged tokens
    ///
    /// Offsets are character offsets into `text`. An empty result is valid.
    fn tag(&self, text: &str) -> Result<Vec<TaggedSentence>, TaggerError>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn language(&self) -> Language {
        (**self).language()
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedSentence>, TaggerError> {
        (**self).tag(text)
    }
}

/// Serves tagger output recorded ahead of time
///
/// Output is keyed by the exact document text. Identical texts may be
/// registered more than once only with identical output.
#[derive(Debug, Clone)]
pub struct PretaggedTagger {
    language: Language,
    outputs: HashMap<String, Vec<TaggedSentence>>,
}

impl PretaggedTagger {
    /// Create an empty tagger
    pub fn new(language: Language) -> Self {
        Self {
            language,
            outputs: HashMap::new(),
        }
    }

    /// Register the output for `text`
    ///
    /// Fails with [`TaggerError::ConflictingOutput`] when `text` already has
    /// a different output; the earlier entry is kept.
    pub fn insert(
        &mut self,
        text: impl Into<String>,
        sentences: Vec<TaggedSentence>,
    ) -> Result<(), TaggerError> {
        match self.outputs.entry(text.into()) {
            Entry::Occupied(entry) if *entry.get() != sentences => {
                Err(TaggerError::ConflictingOutput {
                    chars: entry.key().chars().count(),
                })
            }
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(entry) => {
                entry.insert(sentences);
                Ok(())
            }
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(
        mut self,
        text: impl Into<String>,
        sentences: Vec<TaggedSentence>,
    ) -> Result<Self, TaggerError> {
        self.insert(text, sentences)?;
        Ok(self)
    }

    /// Number of registered texts
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Whether no text is registered
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl Tagger for PretaggedTagger {
    fn language(&self) -> Language {
        self.language
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedSentence>, TaggerError> {
        self.outputs
            .get(text)
            .cloned()
            .ok_or_else(|| TaggerError::MissingOutput {
                chars: text.chars().count(),
            })
    }
}
