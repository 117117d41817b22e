//! Tagger output model
//!
//! These types describe what the external linguistic tagger hands to the
//! builder: sentences of tokens, each with a surface form, a universal
//! part-of-speech tag, an optional lemma and a half-open character span
//! into the original text.
//!
//! Multi-word tokens (e.g. German "zum" → "zu" + "dem") are represented as
//! consecutive tokens sharing the same span.

/// Universal part-of-speech tag that marks punctuation
pub const PUNCTUATION_TAG: &str = "PUNCT";

/// One token as reported by the tagger
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedToken {
    /// Surface text of the token
    pub text: String,
    /// Universal part-of-speech tag
    pub upos: String,
    /// Dictionary base form, if the tagger produced one
    #[cfg_attr(feature = "serde", serde(default))]
    pub lemma: Option<String>,
    /// First character of the token (inclusive)
    pub start_char: usize,
    /// End of the token (exclusive)
    pub end_char: usize,
}

impl TaggedToken {
    /// Create a token with a lemma
    pub fn new(
        text: impl Into<String>,
        upos: impl Into<String>,
        lemma: impl Into<String>,
        start_char: usize,
        end_char: usize,
    ) -> Self {
        Self {
            text: text.into(),
            upos: upos.into(),
            lemma: Some(lemma.into()),
            start_char,
            end_char,
        }
    }

    /// Create a punctuation token; its lemma is never consulted
    pub fn punctuation(text: impl Into<String>, start_char: usize, end_char: usize) -> Self {
        Self {
            text: text.into(),
            upos: PUNCTUATION_TAG.to_string(),
            lemma: None,
            start_char,
            end_char,
        }
    }

    /// Whether the tagger classified this token as punctuation
    #[inline]
    pub fn is_punctuation(&self) -> bool {
        self.upos == PUNCTUATION_TAG
    }

    /// Lemma used for the bag-of-words
    ///
    /// Falls back to the lower-cased surface text when the tagger gave none.
    pub fn lemma_or_text(&self) -> String {
        match &self.lemma {
            Some(lemma) if !lemma.is_empty() => lemma.clone(),
            _ => self.text.to_lowercase(),
        }
    }
}

/// One sentence of tagger output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TaggedSentence {
    /// Tokens in source order
    pub tokens: Vec<TaggedToken>,
}

impl TaggedSentence {
    /// Wrap a token list
    pub fn new(tokens: Vec<TaggedToken>) -> Self {
        Self { tokens }
    }

    /// Number of tokens, punctuation included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the tagger produced no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<TaggedToken>> for TaggedSentence {
    fn from(tokens: Vec<TaggedToken>) -> Self {
        Self::new(tokens)
    }
}
