//! Signal blending and threshold selection.
//!
//! All helpers work on score slices indexed like the candidate list and
//! return candidate indices, so callers map back to documents themselves.

use chrono::{DateTime, Utc};

/// Milliseconds per hour.
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Weights of the three balanced-mode signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Weight of interest similarity.
    pub interest: f32,
    /// Weight of content similarity.
    pub content: f32,
    /// Weight of freshness.
    pub freshness: f32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            interest: 0.4,
            content: 0.3,
            freshness: 0.3,
        }
    }
}

impl Weights {
    /// Weighted sum of the three signals.
    pub fn combine(&self, interest: f32, content: f32, freshness: f32) -> f32 {
        self.interest * interest + self.content * content + self.freshness * freshness
    }
}

/// Exponential freshness decay: `exp(-age_hours / scale_hours)`.
///
/// Documents dated after `now` count as brand new.
pub fn freshness(created_at: DateTime<Utc>, now: DateTime<Utc>, scale_hours: f32) -> f32 {
    let age_hours = (now - created_at).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    (-age_hours.max(0.0) / f64::from(scale_hours)).exp() as f32
}

/// Indices ordered by descending score; equal scores keep input order.
pub fn descending(scores: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// Indices of scores strictly above `threshold`, highest first.
pub fn select_above(scores: &[f32], threshold: f32) -> Vec<usize> {
    descending(scores)
        .into_iter()
        .filter(|&i| scores[i] > threshold)
        .collect()
}

/// The `k` highest-scoring indices, highest first.
pub fn top_k(scores: &[f32], k: usize) -> Vec<usize> {
    let mut order = descending(scores);
    order.truncate(k);
    order
}
