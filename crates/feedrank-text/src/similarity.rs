//! Cosine similarity over sparse TF-IDF vectors.

use crate::SparseVector;

/// Cosine similarity of two vectors; zero when either vector is zero.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f32 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0)
}

/// Scores every candidate against `reference`, preserving input order.
pub fn score_against(reference: &SparseVector, candidates: &[SparseVector]) -> Vec<f32> {
    candidates.iter().map(|c| cosine(reference, c)).collect()
}

/// Full symmetric similarity matrix.
///
/// The diagonal is 1 for non-zero vectors and 0 for zero vectors.
pub fn pairwise(vectors: &[SparseVector]) -> Vec<Vec<f32>> {
    let n = vectors.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        if !vectors[i].is_zero() {
            matrix[i][i] = 1.0;
        }
        for j in (i + 1)..n {
            let sim = cosine(&vectors[i], &vectors[j]);
            matrix[i][j] = sim;
            matrix[j][i] = sim;
        }
    }
    matrix
}
