//! Bag-of-words multiset over lemmas

use std::collections::BTreeMap;

/// Multiset mapping lemma → occurrence count within one sentence
///
/// Backed by an ordered map so iteration (and serialized output) is
/// deterministic. Counts are always at least 1; absent lemmas have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BagOfWords {
    counts: BTreeMap<String, u32>,
}

impl BagOfWords {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every lemma in the iterator
    pub fn from_lemmas<I, S>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut bag = Self::new();
        for lemma in lemmas {
            bag.add(lemma);
        }
        bag
    }

    /// Add one occurrence of a lemma
    pub fn add(&mut self, lemma: impl Into<String>) {
        *self.counts.entry(lemma.into()).or_insert(0) += 1;
    }

    /// Occurrences of a lemma (0 when absent)
    pub fn count(&self, lemma: &str) -> u32 {
        self.counts.get(lemma).copied().unwrap_or(0)
    }

    /// Whether the lemma occurs at least once
    pub fn contains(&self, lemma: &str) -> bool {
        self.counts.contains_key(lemma)
    }

    /// Sum of all counts, i.e. the number of counted lexical items
    pub fn total(&self) -> usize {
        self.counts.values().map(|&count| count as usize).sum()
    }

    /// Number of distinct lemmas
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Whether the bag holds nothing
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct lemmas in lexicographic order
    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(lemma, count)` pairs in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(lemma, &count)| (lemma.as_str(), count))
    }

    /// Lemmas present in both bags
    pub fn shared_lemmas<'a>(&'a self, other: &'a BagOfWords) -> impl Iterator<Item = &'a str> {
        self.lemmas().filter(move |lemma| other.contains(lemma))
    }

    /// Element-wise sum of two bags
    pub fn merged(&self, other: &BagOfWords) -> BagOfWords {
        let mut counts = self.counts.clone();
        for (lemma, &count) in &other.counts {
            *counts.entry(lemma.clone()).or_insert(0) += count;
        }
        BagOfWords { counts }
    }
}

impl<S: Into<String>> FromIterator<S> for BagOfWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lemmas(iter)
    }
}
