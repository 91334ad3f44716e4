//! Tokenization into unigram and bigram terms.

use crate::Stopwords;

/// Minimum token length in characters.
const MIN_TOKEN_CHARS: usize = 2;

/// Splits text into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric characters or underscores that is
/// at least two characters long. Stopwords are dropped.
pub fn tokenize<'a>(
    text: &'a str,
    stopwords: &'a Stopwords,
) -> impl Iterator<Item = String> + 'a {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| s.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
        .filter(move |s| !stopwords.contains(s))
}

/// Returns the unigrams of `text` followed by the bigrams of adjacent
/// surviving tokens.
pub fn terms(text: &str, stopwords: &Stopwords) -> Vec<String> {
    let mut terms: Vec<String> = tokenize(text, stopwords).collect();
    let unigrams = terms.len();
    for i in 1..unigrams {
        let bigram = format!("{} {}", terms[i - 1], terms[i]);
        terms.push(bigram);
    }
    terms
}
