//! Sentence construction from tagger output
//!
//! The builder walks the tagged sentences of one document in source order,
//! filters punctuation (and optionally stop words), turns every non-empty
//! remainder into a [`Sentence`], flags common sentences against the
//! reference set and keeps the document vocabulary in step. For primary
//! documents it finishes with the small-sentence merge pass.

use crate::bag::BagOfWords;
use crate::common::ReferenceSet;
use crate::document::Document;
use crate::error::{CoreError, Result};
use crate::merger::SmallSentenceMerger;
use crate::sentence::{Sentence, Word, Words};
use crate::tagged::{TaggedSentence, TaggedToken};
use std::collections::HashSet;

/// Case-insensitive stop-word list
///
/// Words are stored lower-cased; lookups lower-case the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build from any word list
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// An empty list
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether the lower-cased surface text is a stop word
    pub fn contains(&self, surface: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.words.contains(&surface.to_lowercase())
    }

    /// Number of stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Options controlling sentence construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Sentences with fewer counted words are merged into a neighbour
    pub min_sentence_length: usize,
    /// Drop stop words from sentences and vocabulary
    pub remove_stop_words: bool,
    /// Run the small-sentence merge pass after construction
    pub join_small: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            min_sentence_length: 3,
            remove_stop_words: false,
            join_small: true,
        }
    }
}

impl BuildOptions {
    /// Options for reference documents: never merged
    pub fn for_reference(self) -> Self {
        Self {
            join_small: false,
            ..self
        }
    }
}

/// What a build pass did to a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Tagged sentences seen
    pub tagged: usize,
    /// Tagged sentences with nothing left after filtering
    pub skipped: usize,
    /// Sentences created before merging
    pub created: usize,
    /// Created sentences flagged as common
    pub common: usize,
    /// Merges performed by the small-sentence pass
    pub merged: usize,
}

/// Builds the sentences of one document
#[derive(Debug, Clone)]
pub struct SentenceBuilder<'a> {
    options: BuildOptions,
    stop_words: &'a StopWords,
}

impl<'a> SentenceBuilder<'a> {
    /// Create a builder
    pub fn new(options: BuildOptions, stop_words: &'a StopWords) -> Self {
        Self {
            options,
            stop_words,
        }
    }

    /// Build options in effect
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Populate `document` from tagger output
    ///
    /// Empty tagger output leaves the document empty; that is a valid
    /// result, not an error. Malformed offsets fail the whole document and
    /// leave it partially built, so callers should discard it.
    pub fn build(
        &self,
        document: &mut Document,
        tagged: &[TaggedSentence],
        references: &ReferenceSet,
    ) -> Result<BuildStats> {
        let mut stats = BuildStats {
            tagged: tagged.len(),
            ..BuildStats::default()
        };

        for (index, tagged_sentence) in tagged.iter().enumerate() {
            let surviving: Vec<&TaggedToken> = tagged_sentence
                .tokens
                .iter()
                .filter(|token| !token.is_punctuation())
                .filter(|token| {
                    !(self.options.remove_stop_words && self.stop_words.contains(&token.text))
                })
                .collect();

            let (first, last) = match (surviving.first(), surviving.last()) {
                (Some(first), Some(last)) => (*first, *last),
                _ => {
                    stats.skipped += 1;
                    continue;
                }
            };

            check_tokens(document, index, tagged_sentence, &surviving)?;
            let (start_char, end_char) = (first.start_char, last.end_char);
            if let Some(previous) = document.all_sentences().last() {
                if start_char < previous.end_char() {
                    return Err(CoreError::OverlappingSentence {
                        sentence: index,
                        start_char,
                        previous_end: previous.end_char(),
                    });
                }
            }

            let bag: BagOfWords = surviving.iter().map(|token| token.lemma_or_text()).collect();
            let id = document.allocate_sentence_id();
            let words: Words = surviving
                .iter()
                .map(|token| {
                    Word::new(token.text.as_str(), token.start_char, token.end_char, id)
                })
                .collect();
            let texts: Vec<&str> = words.iter().map(|word| word.text.as_str()).collect();
            let common = references.matches(&texts);

            if common {
                stats.common += 1;
            } else {
                document.vocabulary.record(&bag);
            }
            let sentence = Sentence::new(
                id,
                document.id(),
                start_char,
                end_char,
                bag,
                words,
                common,
            );
            document.push_sentence(sentence);
            stats.created += 1;
        }

        if self.options.join_small {
            stats.merged = SmallSentenceMerger::new(self.options.min_sentence_length).run(document);
        }

        debug_assert_eq!(document.verify(), Ok(()));
        Ok(stats)
    }
}

/// Reject spans that are empty, out of range or move backwards
fn check_tokens(
    document: &Document,
    sentence: usize,
    tagged: &TaggedSentence,
    surviving: &[&TaggedToken],
) -> Result<()> {
    let malformed = |token: &TaggedToken, reason: String| {
        let position = tagged
            .tokens
            .iter()
            .position(|candidate| std::ptr::eq(candidate, token))
            .unwrap_or_default();
        CoreError::MalformedToken {
            sentence,
            token: position,
            reason,
        }
    };

    let mut previous: Option<&TaggedToken> = None;
    for &token in surviving {
        if token.start_char >= token.end_char {
            return Err(malformed(
                token,
                format!("empty span [{}, {})", token.start_char, token.end_char),
            ));
        }
        if token.end_char > document.char_len() {
            return Err(malformed(
                token,
                format!(
                    "span ends at {} but the text has {} characters",
                    token.end_char,
                    document.char_len()
                ),
            ));
        }
        if let Some(prev) = previous {
            if token.start_char < prev.start_char || token.end_char < prev.end_char {
                return Err(malformed(
                    token,
                    format!(
                        "span [{}, {}) precedes previous token [{}, {})",
                        token.start_char, token.end_char, prev.start_char, prev.end_char
                    ),
                ));
            }
        }
        previous = Some(token);
    }
    Ok(())
}
