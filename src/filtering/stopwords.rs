//! Stopword filtering.
//!
//! Holds the built-in English stopword list and a [Filter] implementation
//! that drops any token found in it. Callers can extend the list with
//! their own exclusions.
use std::collections::HashSet;

use lazy_static::lazy_static;

use super::Filter;

lazy_static! {

    /// Built-in English stopword list.
    ///
    /// Contraction forms are covered by their split pieces ("don" + "t"),
    /// since the tokenizer breaks words on the apostrophe.
    pub static ref ENGLISH: HashSet<&'static str> = {
        let words = [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
            "you", "your", "yours", "yourself", "yourselves", "he", "him",
            "his", "himself", "she", "her", "hers", "herself", "it", "its",
            "itself", "they", "them", "their", "theirs", "themselves",
            "what", "which", "who", "whom", "this", "that", "these",
            "those", "am", "is", "are", "was", "were", "be", "been",
            "being", "have", "has", "had", "having", "do", "does", "did",
            "doing", "a", "an", "the", "and", "but", "if", "or", "because",
            "as", "until", "while", "of", "at", "by", "for", "with",
            "about", "against", "between", "into", "through", "during",
            "before", "after", "above", "below", "to", "from", "up",
            "down", "in", "out", "on", "off", "over", "under", "again",
            "further", "then", "once", "here", "there", "when", "where",
            "why", "how", "all", "any", "both", "each", "few", "more",
            "most", "other", "some", "such", "no", "nor", "not", "only",
            "own", "same", "so", "than", "too", "very", "s", "t", "can",
            "will", "just", "don", "should", "now", "d", "ll", "m", "o",
            "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn",
            "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
            "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
        ];
        words.iter().copied().collect()
    };
}

/// Stopword filter.
///
/// Returns `false` for any token present in the built-in English list or
/// in the caller-supplied additions.
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Extend the built-in list with additional exclusions.
    pub fn with_additional<I, S>(additional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        filter
            .words
            .extend(additional.into_iter().map(|w| w.as_ref().to_string()));
        filter
    }

    /// Number of stopwords currently held.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self {
            words: ENGLISH.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Filter<&str> for Stopwords {
    fn detect(&self, token: &str) -> bool {
        !self.words.contains(token)
    }
}
