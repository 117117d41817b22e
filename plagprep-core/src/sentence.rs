//! Sentences and the lexical items they own

use crate::bag::BagOfWords;
use crate::document::DocumentId;
use smallvec::SmallVec;

/// Stable key of a sentence inside its document
///
/// Ids are allocated from a per-document counter and never reused, so a
/// merged sentence always gets an id distinct from both halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SentenceId(pub u32);

/// Lexical item: the tagger's token text, its character span and a key
/// back to its sentence
///
/// `text` is what the tagger reported, which for multi-word tokens differs
/// from the source slice under the span (`zum` splits into `zu` and `dem`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// Token text as tagged
    pub text: String,
    /// First character of the token this word came from
    pub start_char: usize,
    /// End of that token (exclusive)
    pub end_char: usize,
    /// Owning sentence
    pub sentence: SentenceId,
}

impl Word {
    /// Create a word
    pub fn new(
        text: impl Into<String>,
        start_char: usize,
        end_char: usize,
        sentence: SentenceId,
    ) -> Self {
        Self {
            text: text.into(),
            start_char,
            end_char,
            sentence,
        }
    }
}

/// Words of one sentence; most sentences fit inline
pub type Words = SmallVec<[Word; 16]>;

/// A surviving sentence of a document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentence {
    id: SentenceId,
    document: DocumentId,
    start_char: usize,
    end_char: usize,
    bag: BagOfWords,
    words: Words,
    common: bool,
}

impl Sentence {
    pub(crate) fn new(
        id: SentenceId,
        document: DocumentId,
        start_char: usize,
        end_char: usize,
        bag: BagOfWords,
        words: Words,
        common: bool,
    ) -> Self {
        Self {
            id,
            document,
            start_char,
            end_char,
            bag,
            words,
            common,
        }
    }

    /// Join `self` with the sentence that directly follows it
    ///
    /// The result spans `[self.start_char, next.end_char)`, sums both bags
    /// and owns both word lists in order, re-keyed to `id`.
    pub(crate) fn join(&self, next: &Sentence, id: SentenceId) -> Sentence {
        let words = self
            .words
            .iter()
            .chain(next.words.iter())
            .map(|word| Word {
                sentence: id,
                ..word.clone()
            })
            .collect();

        Sentence {
            id,
            document: self.document,
            start_char: self.start_char,
            end_char: next.end_char,
            bag: self.bag.merged(&next.bag),
            words,
            common: false,
        }
    }

    /// Key of this sentence in its document
    pub fn id(&self) -> SentenceId {
        self.id
    }

    /// Owning document
    pub fn document(&self) -> DocumentId {
        self.document
    }

    /// First character (inclusive)
    pub fn start_char(&self) -> usize {
        self.start_char
    }

    /// Last character (exclusive)
    pub fn end_char(&self) -> usize {
        self.end_char
    }

    /// Character length of the span
    pub fn char_len(&self) -> usize {
        self.end_char - self.start_char
    }

    /// Lemma multiset
    pub fn bag(&self) -> &BagOfWords {
        &self.bag
    }

    /// Lexical items in source order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Token texts of the words, in order
    pub fn word_texts(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| word.text.as_str())
    }

    /// Total word count used by the merge threshold (sum of bag counts)
    pub fn word_count(&self) -> usize {
        self.bag.total()
    }

    /// Whether the sentence duplicates reference content
    pub fn is_common(&self) -> bool {
        self.common
    }
}
