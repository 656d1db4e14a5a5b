//! Word count domain entity
//!
//! Mapping from normalized word to occurrence count, built once per request.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

/// Word frequencies across a set of pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordCount {
    counts: HashMap<String, u64>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        self.add_n(word, 1);
    }

    pub fn add_n(&mut self, word: &str, n: u64) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += n;
        } else {
            self.counts.insert(word.to_string(), n);
        }
    }

    /// Fold another count into this one
    pub fn merge(&mut self, other: WordCount) {
        for (word, n) in other.counts {
            *self.counts.entry(word).or_insert(0) += n;
        }
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The `n` most frequent words, count descending.
    ///
    /// Equal counts are ordered alphabetically so the ranking is stable
    /// across runs (`HashMap` iteration order is not).
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(&String, &u64)> = self.counts.iter().collect();
        ranked.sort_by(|a, b| rank_order((a.0, *a.1), (b.0, *b.1)));
        ranked
            .into_iter()
            .take(n)
            .map(|(word, count)| (word.clone(), *count))
            .collect()
    }
}

fn rank_order(a: (&String, u64), b: (&String, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

impl<S: AsRef<str>> FromIterator<S> for WordCount {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut count = WordCount::new();
        for word in iter {
            count.add(word.as_ref());
        }
        count
    }
}
