//! Common-sentence detection
//!
//! A candidate sentence is *common* when some reference sentence's token
//! texts all occur among the candidate's token texts. The test is a plain
//! membership check on surface text: no lemmas, no positions, no offsets.
//! Short reference sentences therefore match generously; a one-token
//! reference sentence matches every candidate containing that token.

use crate::document::Document;
use std::collections::HashSet;

/// Flattened token-text lists of every reference sentence
///
/// Built once from the preprocessed reference documents and then shared
/// read-only by all primary documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReferenceSet {
    sentences: Vec<Vec<String>>,
}

impl ReferenceSet {
    /// Wrap explicit token-text lists
    pub fn new(sentences: Vec<Vec<String>>) -> Self {
        Self { sentences }
    }

    /// A set that marks nothing as common
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collect the tagged word texts of every sentence of the given documents
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let sentences = documents
            .into_iter()
            .flat_map(|doc| doc.sentences(true))
            .map(|sentence| sentence.word_texts().map(str::to_string).collect())
            .collect();
        Self { sentences }
    }

    /// Number of reference sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether there is no reference sentence
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Token-text lists in insertion order
    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    /// Whether the candidate's token texts contain some reference sentence
    pub fn matches<S: AsRef<str>>(&self, candidate_words: &[S]) -> bool {
        is_common(candidate_words, &self.sentences)
    }
}

/// Whether any reference sentence's token texts are a subset of the candidate's
///
/// Empty reference sentences are ignored; they would match every candidate.
pub fn is_common<S, R>(candidate_words: &[S], reference_sentences: &[Vec<R>]) -> bool
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    if reference_sentences.is_empty() || candidate_words.is_empty() {
        return false;
    }

    let candidate: HashSet<&str> = candidate_words.iter().map(AsRef::as_ref).collect();
    reference_sentences.iter().any(|reference| {
        !reference.is_empty()
            && reference
                .iter()
                .all(|word| candidate.contains(word.as_ref()))
    })
}
