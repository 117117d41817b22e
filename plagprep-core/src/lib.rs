//! Offset-accurate sentence model for plagiarism candidate generation
//!
//! This crate turns tagger output (sentences of tokens with part-of-speech
//! tags, lemmas and character offsets) into the per-document structure
//! that fragment matching consumes:
//!
//! - [`Document`] owns its [`Sentence`]s, kept in offset order, and a
//!   [`Vocabulary`] of document frequencies.
//! - [`SentenceBuilder`] filters punctuation and stop words, builds
//!   bag-of-words sentences and flags *common* sentences that duplicate
//!   reference (boilerplate) content.
//! - [`SmallSentenceMerger`] folds sentences below a length threshold into
//!   a neighbour while keeping offsets and the vocabulary exact.
//!
//! The crate performs no I/O and holds no global state.
//!
//! # Example
//!
//! ```rust
//! use plagprep_core::{
//!     BuildOptions, Document, DocumentId, ReferenceSet, SentenceBuilder, StopWords,
//!     TaggedSentence, TaggedToken,
//! };
//!
//! let text = "Cats purr. Dogs bark loudly at night.";
//! let tagged = vec![
//!     TaggedSentence::new(vec![
//!         TaggedToken::new("Cats", "NOUN", "cat", 0, 4),
//!         TaggedToken::new("purr", "VERB", "purr", 5, 9),
//!         TaggedToken::punctuation(".", 9, 10),
//!     ]),
//!     TaggedSentence::new(vec![
//!         TaggedToken::new("Dogs", "NOUN", "dog", 11, 15),
//!         TaggedToken::new("bark", "VERB", "bark", 16, 20),
//!         TaggedToken::new("loudly", "ADV", "loudly", 21, 27),
//!         TaggedToken::new("at", "ADP", "at", 28, 30),
//!         TaggedToken::new("night", "NOUN", "night", 31, 36),
//!         TaggedToken::punctuation(".", 36, 37),
//!     ]),
//! ];
//!
//! let mut doc = Document::new(DocumentId(0), "pets", "pets.txt", text);
//! let stop_words = StopWords::none();
//! SentenceBuilder::new(BuildOptions::default(), &stop_words)
//!     .build(&mut doc, &tagged, &ReferenceSet::empty())
//!     .unwrap();
//!
//! // "Cats purr" is below the default threshold of 3 words and is joined
//! assert_eq!(doc.sentence_count(), 1);
//! assert_eq!(doc.sentence_text(&doc.all_sentences()[0]), "Cats purr. Dogs bark loudly at night");
//! assert_eq!(doc.vocabulary().get("dog"), 1);
//! ```

#![warn(missing_docs)]

pub mod bag;
pub mod builder;
pub mod common;
pub mod document;
pub mod error;
pub mod merger;
pub mod sentence;
pub mod tagged;
pub mod vocabulary;

pub use bag::BagOfWords;
pub use builder::{BuildOptions, BuildStats, SentenceBuilder, StopWords};
pub use common::{is_common, ReferenceSet};
pub use document::{Document, DocumentId};
pub use error::{CoreError, Result};
pub use merger::SmallSentenceMerger;
pub use sentence::{Sentence, SentenceId, Word, Words};
pub use tagged::{TaggedSentence, TaggedToken, PUNCTUATION_TAG};
pub use vocabulary::Vocabulary;
