//! Word → frequency table.
//!
//! Backed by an [`IndexMap`] so that encounter order survives; the layout
//! engine uses it to break ties between words with equal counts, which keeps
//! layouts reproducible across runs.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequencies {
    counts: IndexMap<String, u32>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count already-tokenized words. Words are taken verbatim; case folding
    /// is the caller's job.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for word in words {
            table.add(word.as_ref());
        }
        table
    }

    /// Increment the count for `word`, inserting it with count 1.
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    /// Set the count for `word`. An existing word keeps its original
    /// position in encounter order.
    pub fn insert(&mut self, word: impl Into<String>, count: u32) {
        self.counts.insert(word.into(), count);
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    pub fn max_count(&self) -> Option<u32> {
        self.counts.values().copied().max()
    }

    /// Entries sorted by count descending. The sort is stable, so equal
    /// counts keep encounter order.
    pub fn by_frequency(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Drop every word contained in `stop_words`.
    pub fn without<S: AsRef<str>>(mut self, stop_words: &[S]) -> Self {
        let excluded: HashSet<&str> = stop_words.iter().map(|s| s.as_ref()).collect();
        self.counts.retain(|w, _| !excluded.contains(w.as_str()));
        self
    }

    /// Drop words shorter than `min_chars` characters.
    pub fn retain_min_len(mut self, min_chars: usize) -> Self {
        self.counts.retain(|w, _| w.chars().count() >= min_chars);
        self
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for WordFrequencies {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().map(|(w, c)| (w.into(), c)).collect(),
        }
    }
}
