//! Document arena: source text, ordered sentences and vocabulary

use crate::error::{CoreError, Result};
use crate::sentence::{Sentence, SentenceId};
use crate::vocabulary::Vocabulary;

/// Identity of a document within one preprocessing run: its input position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DocumentId(pub usize);

/// A document and everything preprocessing derived from it
///
/// The document exclusively owns its sentences (kept sorted by
/// `start_char`, never overlapping) and its vocabulary. Sentences refer back
/// to the document by [`DocumentId`], words to their sentence by
/// [`SentenceId`]; no reference cycles exist.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "DocumentRepr"))]
pub struct Document {
    pub(crate) id: DocumentId,
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) text: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub(crate) char_len: usize,
    /// Byte offset of every character boundary; empty for ASCII text
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub(crate) char_bytes: Vec<usize>,
    pub(crate) sentences: Vec<Sentence>,
    pub(crate) vocabulary: Vocabulary,
    pub(crate) next_sentence_id: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DocumentRepr {
    id: DocumentId,
    name: String,
    path: String,
    text: String,
    sentences: Vec<Sentence>,
    vocabulary: Vocabulary,
    next_sentence_id: u32,
}

#[cfg(feature = "serde")]
impl From<DocumentRepr> for Document {
    fn from(repr: DocumentRepr) -> Self {
        let (char_len, char_bytes) = char_boundaries(&repr.text);
        Self {
            id: repr.id,
            name: repr.name,
            path: repr.path,
            text: repr.text,
            char_len,
            char_bytes,
            sentences: repr.sentences,
            vocabulary: repr.vocabulary,
            next_sentence_id: repr.next_sentence_id,
        }
    }
}

/// Character count plus, for non-ASCII text, the byte offset of each
/// character and of the end of the text
fn char_boundaries(text: &str) -> (usize, Vec<usize>) {
    if text.is_ascii() {
        return (text.len(), Vec::new());
    }
    let bytes: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();
    (bytes.len() - 1, bytes)
}

impl Document {
    /// Create an unprocessed document
    pub fn new(
        id: DocumentId,
        name: impl Into<String>,
        path: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let (char_len, char_bytes) = char_boundaries(&text);
        Self {
            id,
            name: name.into(),
            path: path.into(),
            text,
            char_len,
            char_bytes,
            sentences: Vec::new(),
            vocabulary: Vocabulary::new(),
            next_sentence_id: 0,
        }
    }

    /// Document identity
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Display name (usually the file stem)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Immutable source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the source text in characters
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Document frequency table
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// All sentences in offset order, common ones included
    pub fn all_sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Sentences in offset order, optionally skipping common ones
    pub fn sentences(&self, include_common: bool) -> impl Iterator<Item = &Sentence> {
        self.sentences
            .iter()
            .filter(move |sentence| include_common || !sentence.is_common())
    }

    /// Look a sentence up by key
    pub fn sentence(&self, id: SentenceId) -> Option<&Sentence> {
        self.sentences.iter().find(|sentence| sentence.id() == id)
    }

    /// Number of sentences, common ones included
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of sentences flagged as common
    pub fn common_count(&self) -> usize {
        self.sentences.iter().filter(|s| s.is_common()).count()
    }

    /// Whether preprocessing produced no sentence
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Slice of the source text covered by a character span
    ///
    /// Returns `None` when the span is reversed or runs past the text.
    pub fn span_text(&self, start_char: usize, end_char: usize) -> Option<&str> {
        if start_char > end_char || end_char > self.char_len {
            return None;
        }
        if self.char_bytes.is_empty() {
            // ASCII: characters and bytes coincide
            return self.text.get(start_char..end_char);
        }
        self.text.get(self.char_bytes[start_char]..self.char_bytes[end_char])
    }

    /// Source text of a sentence span
    pub fn sentence_text(&self, sentence: &Sentence) -> &str {
        self.span_text(sentence.start_char(), sentence.end_char())
            .unwrap_or_default()
    }

    pub(crate) fn allocate_sentence_id(&mut self) -> SentenceId {
        let id = SentenceId(self.next_sentence_id);
        self.next_sentence_id += 1;
        id
    }

    /// Append a sentence after the current last one
    ///
    /// # Panics
    ///
    /// Panics if the sentence would overlap or precede the last sentence;
    /// callers validate tagger offsets before getting here.
    pub(crate) fn push_sentence(&mut self, sentence: Sentence) {
        if let Some(last) = self.sentences.last() {
            assert!(
                sentence.start_char() >= last.end_char(),
                "sentence [{}, {}) overlaps previous sentence ending at {}",
                sentence.start_char(),
                sentence.end_char(),
                last.end_char()
            );
        }
        self.sentences.push(sentence);
    }

    /// Replace the sentences at `index` and `index + 1` with their join
    ///
    /// Lemmas that occur in both halves lose one document-frequency count,
    /// since the joined sentence contains each of them only once.
    pub(crate) fn join_pair(&mut self, index: usize) {
        let id = self.allocate_sentence_id();
        let next = self.sentences.remove(index + 1);
        let first = &self.sentences[index];

        for lemma in first.bag().shared_lemmas(next.bag()) {
            self.vocabulary.decrement(lemma);
        }

        let joined = first.join(&next, id);
        self.sentences[index] = joined;
    }

    /// Check every structural invariant of a preprocessed document
    ///
    /// Verifies ordering and non-overlap of sentences, that each sentence's
    /// span is exactly the hull of its words, that bags count exactly the
    /// words, that back-references point where they should, and that the
    /// vocabulary equals the one recomputed from non-common sentences.
    pub fn verify(&self) -> Result<()> {
        let violation = |msg: String| Err(CoreError::InvariantViolation(msg));
        let mut previous_end = 0usize;

        for (index, sentence) in self.sentences.iter().enumerate() {
            if sentence.document() != self.id {
                return violation(format!("sentence {index} belongs to another document"));
            }
            if sentence.start_char() >= sentence.end_char() {
                return violation(format!("sentence {index} has an empty span"));
            }
            if sentence.end_char() > self.char_len {
                return violation(format!("sentence {index} runs past the text"));
            }
            if index > 0 && sentence.start_char() < previous_end {
                return violation(format!("sentence {index} overlaps its predecessor"));
            }
            previous_end = sentence.end_char();

            let words = sentence.words();
            let min_start = words.iter().map(|w| w.start_char).min();
            let max_end = words.iter().map(|w| w.end_char).max();
            if min_start != Some(sentence.start_char()) || max_end != Some(sentence.end_char()) {
                return violation(format!("sentence {index} span differs from its words"));
            }
            if words.iter().any(|w| w.sentence != sentence.id()) {
                return violation(format!("sentence {index} owns a foreign word"));
            }
            if sentence.bag().total() != words.len() {
                return violation(format!(
                    "sentence {index} bag counts {} items but owns {} words",
                    sentence.bag().total(),
                    words.len()
                ));
            }
        }

        let expected: Vocabulary = self.sentences(false).map(|s| s.bag()).collect();
        if expected != self.vocabulary {
            return violation("vocabulary does not match the non-common sentences".to_string());
        }

        Ok(())
    }
}
