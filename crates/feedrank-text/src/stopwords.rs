//! English stopword filtering for vectorization.
//!
//! Stopwords are removed before unigrams and bigrams are formed, so a bigram
//! never spans a stopword-only gap in its own right: `"cats and dogs"` yields
//! the bigram `"cats dogs"`.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// A stopword filter backed by the English list of the `stop-words` crate.
///
/// All words are stored in lowercase for case-insensitive matching.
#[derive(Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a new stopword filter with the English stopword list.
    pub fn new() -> Self {
        let words = stop_words::get(LANGUAGE::English)
            .iter()
            .map(|word| word.to_lowercase())
            .collect();
        Self { words }
    }

    /// Creates a filter that removes nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Checks if a term is a stopword, ignoring case.
    pub fn contains(&self, term: &str) -> bool {
        if term.chars().any(char::is_uppercase) {
            return self.words.contains(&term.to_lowercase());
        }
        self.words.contains(term)
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
