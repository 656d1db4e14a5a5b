//! Word frequency aggregation
//!
//! Turns page text into a [`WordCount`]: lowercase, split on anything that is
//! not a letter or digit, then drop numbers, short tokens and stopwords.

use std::sync::OnceLock;

use regex::Regex;

use crate::app::stopwords::StopwordFilter;
use crate::domain::entities::WordCount;

/// Tokens shorter than or equal to this are ignored
pub const MIN_WORD_CHARS: usize = 2;

/// Letters/digits, with inner hyphens (`well-known`) and apostrophes (`don't`)
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[\p{L}\p{N}]+(?:['\-][\p{L}\p{N}]+)*").expect("token pattern is valid")
    })
}

/// Counts meaningful words across pages
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyAggregator {
    stopwords: StopwordFilter,
}

impl WordFrequencyAggregator {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Normalized words of `text` that survive filtering, in order
    pub fn words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");

        token_pattern()
            .find_iter(&lowered)
            .map(|m| strip_possessive(m.as_str()))
            .filter(|word| self.is_meaningful(word))
            .map(str::to_string)
            .collect()
    }

    /// Word counts for a single text
    pub fn count_text(&self, text: &str) -> WordCount {
        self.words(text).into_iter().collect()
    }

    /// Word counts accumulated across several texts
    pub fn aggregate<I, S>(&self, texts: I) -> WordCount
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total = WordCount::new();
        for text in texts {
            total.merge(self.count_text(text.as_ref()));
        }
        total
    }

    fn is_meaningful(&self, word: &str) -> bool {
        word.chars().count() > MIN_WORD_CHARS
            && !word.chars().all(|c| c.is_numeric())
            && !self.stopwords.is_stopword(word)
    }
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s").unwrap_or(word)
}
