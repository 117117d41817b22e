//! Small-sentence merge pass
//!
//! Sentences shorter than the threshold carry too little signal for
//! fragment matching, so they are folded into a neighbour. The pass is a
//! single left-to-right sweep over adjacent pairs:
//!
//! - a pair `(s1, s2)` is eligible when neither sentence is common and
//!   either `s1` is short, or `s2` is the last sentence and short;
//! - an eligible pair is replaced by one sentence spanning both;
//! - the pair index advances by one after every examination, merge or not,
//!   while the sentence count shrinks with each merge.
//!
//! A joined sentence is never examined again in the same pass. With `N`
//! sentences the sweep performs at most `N - 1` examinations.

use crate::document::Document;
use crate::sentence::Sentence;

/// Folds short sentences into their right neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmallSentenceMerger {
    min_sentence_length: usize,
}

impl SmallSentenceMerger {
    /// Create a merger with the given word-count threshold
    pub fn new(min_sentence_length: usize) -> Self {
        Self {
            min_sentence_length,
        }
    }

    /// Threshold below which a sentence is considered short
    pub fn min_sentence_length(&self) -> usize {
        self.min_sentence_length
    }

    /// Run one sweep over `document`, returning the number of merges
    pub fn run(&self, document: &mut Document) -> usize {
        let mut index = 0;
        let mut merges = 0;

        while index + 1 < document.sentence_count() {
            if self.is_eligible(document.all_sentences(), index) {
                document.join_pair(index);
                merges += 1;
            }
            index += 1;
        }

        merges
    }

    /// Whether the pair starting at `index` should be joined
    pub fn is_eligible(&self, sentences: &[Sentence], index: usize) -> bool {
        let (first, second) = match (sentences.get(index), sentences.get(index + 1)) {
            (Some(first), Some(second)) => (first, second),
            _ => return false,
        };
        if first.is_common() || second.is_common() {
            return false;
        }

        let second_is_last = index + 2 == sentences.len();
        self.is_short(first) || (second_is_last && self.is_short(second))
    }

    fn is_short(&self, sentence: &Sentence) -> bool {
        sentence.word_count() < self.min_sentence_length
    }
}
