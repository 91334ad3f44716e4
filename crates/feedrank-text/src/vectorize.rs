//! TF-IDF vectorization over a bounded unigram and bigram vocabulary.
//!
//! A corpus is vectorized in one pass: the vocabulary is the `max_features`
//! most frequent terms across all documents, each document gets raw term
//! counts weighted by smoothed IDF, and every row is L2-normalized.

use std::{cmp::Ordering, collections::HashMap};

use tracing::debug;

use crate::{Stopwords, VectorizeError, tokenize::terms};

/// Default vocabulary cap used for ranking.
pub const DEFAULT_MAX_FEATURES: usize = 100;

/// A sparse vector of `(term index, weight)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    /// Non-zero entries in ascending index order.
    entries: Vec<(usize, f32)>,
}

impl SparseVector {
    /// Builds a vector from arbitrary entries.
    ///
    /// Entries are sorted by index and zero weights are dropped. Duplicate
    /// indices are summed.
    pub fn from_entries(mut entries: Vec<(usize, f32)>) -> Self {
        entries.sort_by_key(|&(index, _)| index);
        let mut merged: Vec<(usize, f32)> = Vec::with_capacity(entries.len());
        for (index, weight) in entries {
            match merged.last_mut() {
                Some(last) if last.0 == index => last.1 += weight,
                _ => merged.push((index, weight)),
            }
        }
        merged.retain(|&(_, weight)| weight != 0.0);
        Self { entries: merged }
    }

    /// Returns the non-zero entries in ascending index order.
    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    /// Returns the number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f32 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt()
    }

    /// Dot product with another sparse vector.
    pub fn dot(&self, other: &Self) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// The terms selected for a corpus, indexed alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Terms in index order.
    terms: Vec<String>,
    /// Reverse lookup from term to index.
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds a vocabulary from selected terms, assigning indices in
    /// alphabetical order.
    fn from_terms(mut terms: Vec<String>) -> Self {
        terms.sort();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self { terms, index }
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if no terms were selected.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Looks up the index of a term.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Returns the term at `index`.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Iterates over terms in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// The vectorized corpus: one row per input text, in input order.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    /// Shared vocabulary.
    vocabulary: Vocabulary,
    /// One L2-normalized row per document.
    rows: Vec<SparseVector>,
}

impl TfIdfMatrix {
    /// The vocabulary the rows are expressed in.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// All rows in input order.
    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the matrix and returns its rows.
    pub fn into_rows(self) -> Vec<SparseVector> {
        self.rows
    }
}

/// Builds TF-IDF vectors for a corpus of texts.
#[derive(Clone)]
pub struct Vectorizer {
    /// Maximum vocabulary size.
    max_features: usize,
    /// Words removed before term extraction.
    stopwords: Stopwords,
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

impl Vectorizer {
    /// Creates a vectorizer keeping at most `max_features` terms.
    ///
    /// # Panics
    ///
    /// Panics if `max_features` is zero.
    pub fn new(max_features: usize) -> Self {
        assert!(max_features > 0, "max_features must be positive");
        Self {
            max_features,
            stopwords: Stopwords::new(),
        }
    }

    /// Returns the vocabulary cap.
    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// Fits a vocabulary on `corpus` and returns one vector per text.
    ///
    /// A corpus whose texts contain only stopwords or short tokens yields
    /// zero vectors.
    pub fn fit_transform<S: AsRef<str>>(
        &self,
        corpus: &[S],
    ) -> Result<TfIdfMatrix, VectorizeError> {
        if corpus.is_empty() {
            return Err(VectorizeError::EmptyCorpus);
        }

        let counts: Vec<HashMap<String, u32>> = corpus
            .iter()
            .map(|text| count_terms(&terms(text.as_ref(), &self.stopwords)))
            .collect();

        let vocabulary = self.select_vocabulary(&counts);
        debug!(
            documents = corpus.len(),
            vocabulary = vocabulary.len(),
            "fitted tf-idf vocabulary"
        );

        let idf = inverse_document_frequencies(&vocabulary, &counts);
        let rows = counts
            .iter()
            .map(|doc| weigh_document(doc, &vocabulary, &idf))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TfIdfMatrix { vocabulary, rows })
    }

    /// Keeps the `max_features` terms with the highest corpus frequency.
    fn select_vocabulary(&self, counts: &[HashMap<String, u32>]) -> Vocabulary {
        let mut totals: HashMap<&str, u64> = HashMap::new();
        for doc in counts {
            for (term, &count) in doc {
                *totals.entry(term.as_str()).or_insert(0) += u64::from(count);
            }
        }

        let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        Vocabulary::from_terms(ranked.into_iter().map(|(t, _)| t.to_string()).collect())
    }
}

/// Counts occurrences of each term.
fn count_terms(terms: &[String]) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term.clone()).or_insert(0) += 1;
    }
    counts
}

/// Smoothed IDF per vocabulary index: `ln((1 + n) / (1 + df)) + 1`.
fn inverse_document_frequencies(
    vocabulary: &Vocabulary,
    counts: &[HashMap<String, u32>],
) -> Vec<f64> {
    let mut df = vec![0u32; vocabulary.len()];
    for doc in counts {
        for term in doc.keys() {
            if let Some(index) = vocabulary.index_of(term) {
                df[index] += 1;
            }
        }
    }

    let n = counts.len() as f64;
    df.into_iter()
        .map(|d| ((1.0 + n) / (1.0 + f64::from(d))).ln() + 1.0)
        .collect()
}

/// Builds the L2-normalized TF-IDF row for one document.
fn weigh_document(
    counts: &HashMap<String, u32>,
    vocabulary: &Vocabulary,
    idf: &[f64],
) -> Result<SparseVector, VectorizeError> {
    let mut weighted: Vec<(usize, f64)> = counts
        .iter()
        .filter_map(|(term, &count)| {
            let index = vocabulary.index_of(term)?;
            Some((index, f64::from(count) * idf[index]))
        })
        .collect();

    let norm = weighted.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for entry in &mut weighted {
            entry.1 /= norm;
        }
    }

    let mut entries = Vec::with_capacity(weighted.len());
    for (index, weight) in weighted {
        if !weight.is_finite() {
            let term = vocabulary.term(index).unwrap_or_default().to_string();
            return Err(VectorizeError::NonFiniteWeight { term });
        }
        entries.push((index, weight as f32));
    }
    Ok(SparseVector::from_entries(entries))
}
