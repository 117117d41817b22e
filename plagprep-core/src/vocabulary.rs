//! Per-document vocabulary (document frequency per lemma)

use crate::bag::BagOfWords;
use std::collections::BTreeMap;

/// Mapping lemma → number of non-common sentences containing it
///
/// The table is maintained incrementally: the builder records every
/// non-common sentence once, and the merger decrements lemmas that two
/// joined sentences had in common. Counts never go negative; an attempt to
/// do so is a programming defect and panics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vocabulary {
    frequencies: BTreeMap<String, u32>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one sentence: +1 for every distinct lemma in its bag
    pub fn record(&mut self, bag: &BagOfWords) {
        for lemma in bag.lemmas() {
            self.increment(lemma);
        }
    }

    /// Add one sentence-level occurrence of a lemma
    pub fn increment(&mut self, lemma: &str) {
        match self.frequencies.get_mut(lemma) {
            Some(count) => *count += 1,
            None => {
                self.frequencies.insert(lemma.to_string(), 1);
            }
        }
    }

    /// Remove one sentence-level occurrence of a lemma
    ///
    /// # Panics
    ///
    /// Panics if the lemma has no occurrence left, which would make the
    /// table inconsistent with the document's sentences.
    pub fn decrement(&mut self, lemma: &str) {
        let count = self
            .frequencies
            .get_mut(lemma)
            .unwrap_or_else(|| panic!("vocabulary underflow for lemma '{lemma}'"));
        *count -= 1;
        if *count == 0 {
            self.frequencies.remove(lemma);
        }
    }

    /// Document frequency of a lemma (0 when absent)
    pub fn get(&self, lemma: &str) -> u32 {
        self.frequencies.get(lemma).copied().unwrap_or(0)
    }

    /// Number of distinct lemmas
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether no lemma has been recorded
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// `(lemma, frequency)` pairs in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.frequencies
            .iter()
            .map(|(lemma, &count)| (lemma.as_str(), count))
    }

    /// Owned copy of the table for the scoring collaborator
    pub fn snapshot(&self) -> BTreeMap<String, u32> {
        self.frequencies.clone()
    }
}

impl<'a> FromIterator<&'a BagOfWords> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = &'a BagOfWords>>(bags: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for bag in bags {
            vocabulary.record(bag);
        }
        vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_sentences_not_tokens() {
        let mut vocab = Vocabulary::new();
        vocab.record(&BagOfWords::from_lemmas(["a", "a", "b"]));
        vocab.record(&BagOfWords::from_lemmas(["a"]));

        assert_eq!(vocab.get("a"), 2);
        assert_eq!(vocab.get("b"), 1);
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_decrement_removes_exhausted_entries() {
        let mut vocab = Vocabulary::new();
        vocab.increment("x");
        vocab.increment("x");
        vocab.decrement("x");
        assert_eq!(vocab.get("x"), 1);
        vocab.decrement("x");
        assert_eq!(vocab.get("x"), 0);
        assert!(vocab.is_empty());
    }

    #[test]
    #[should_panic(expected = "vocabulary underflow")]
    fn test_decrement_underflow_panics() {
        let mut vocab = Vocabulary::new();
        vocab.decrement("missing");
    }

    #[test]
    fn test_collect_from_bags() {
        let bags = [
            BagOfWords::from_lemmas(["a", "b"]),
            BagOfWords::from_lemmas(["b", "c"]),
        ];
        let vocab: Vocabulary = bags.iter().collect();
        assert_eq!(vocab.get("b"), 2);
        assert_eq!(vocab.snapshot().len(), 3);
    }
}
