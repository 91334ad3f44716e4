//! Text vectorization and similarity scoring for feedrank.
//!
//! Texts are turned into TF-IDF vectors over a vocabulary of unigrams and
//! bigrams fitted on the texts being compared:
//!
//! 1. **Tokenize**: lowercase runs of word characters, English stopwords removed
//! 2. **Select**: keep the most frequent terms up to a cap
//! 3. **Weigh**: raw counts times smoothed IDF, L2-normalized per row
//!
//! Similarity between rows is the cosine of the angle between them.

#![warn(missing_docs)]

mod error;
mod similarity;
mod stopwords;
mod tokenize;
mod vectorize;

pub use error::VectorizeError;
pub use similarity::{cosine, pairwise, score_against};
pub use stopwords::Stopwords;
pub use tokenize::{terms, tokenize};
pub use vectorize::{DEFAULT_MAX_FEATURES, SparseVector, TfIdfMatrix, Vectorizer, Vocabulary};
