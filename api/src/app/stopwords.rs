//! Stopword filtering
//!
//! NLTK's English stopwords (the `nltk` feature of `stop-words`), extended
//! with the boilerplate that shows up in every Wikipedia extract.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Words that are noise in Wikipedia text regardless of topic
pub const WIKI_COMMON_WORDS: &[&str] = &[
    "cite",
    "reference",
    "http",
    "https",
    "www",
    "com",
    "org",
    "retrieved",
    "isbn",
    "doi",
    "page",
    "pages",
    "website",
    "link",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// NLTK English stopwords plus [`WIKI_COMMON_WORDS`]
    pub fn english() -> Self {
        let mut filter = Self {
            stopwords: get(LANGUAGE::English)
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        };
        filter.add_stopwords(WIKI_COMMON_WORDS);
        filter
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Builder form of [`add_stopwords`](Self::add_stopwords)
    pub fn with_stopwords<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.add_stopwords(words);
        self
    }

    /// Check if a (lowercase) word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
