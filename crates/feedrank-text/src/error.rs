//! Error types for vectorization.

use thiserror::Error;

/// Errors produced while building TF-IDF vectors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorizeError {
    /// No documents were supplied.
    #[error("cannot vectorize an empty corpus")]
    EmptyCorpus,

    /// A computed weight was NaN or infinite.
    #[error("non-finite weight for term '{term}'")]
    NonFiniteWeight {
        /// Term whose weight could not be represented.
        term: String,
    },
}
