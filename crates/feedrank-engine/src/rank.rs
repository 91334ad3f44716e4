//! Candidate ranking for one actor.
//!
//! Every mode returns a subsequence of the candidate list. When a mode's
//! signal is missing (no interests, no history) or vectorization fails, the
//! candidates come back in input order.

use chrono::{DateTime, Utc};
use feedrank_config::RankingSettings;
use feedrank_text::{VectorizeError, Vectorizer, score_against};
use rand::{Rng, seq::SliceRandom};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    ActorProfile, Document, RankingMode,
    blend::{Weights, freshness, select_above, top_k},
};

/// Tunable constants of the ranking engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    /// Minimum interest similarity (exclusive) in `interests` mode.
    pub interest_threshold: f32,
    /// Minimum content similarity (exclusive) in `content` mode.
    pub content_threshold: f32,
    /// Minimum combined score (exclusive) in `balanced` mode.
    pub balanced_threshold: f32,
    /// Balanced-mode signal weights.
    pub weights: Weights,
    /// Hours for freshness to decay by a factor of e.
    pub freshness_scale_hours: f32,
    /// Vocabulary cap for each vectorization.
    pub max_features: usize,
    /// Number of history documents used as the content reference.
    pub history_limit: usize,
    /// `interests` fallback keeps the top `ceil(N / fallback_divisor)`.
    pub fallback_divisor: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self::from(&RankingSettings::default())
    }
}

impl From<&RankingSettings> for RankingConfig {
    fn from(settings: &RankingSettings) -> Self {
        Self {
            interest_threshold: settings.interest_threshold,
            content_threshold: settings.content_threshold,
            balanced_threshold: settings.balanced_threshold,
            weights: Weights {
                interest: settings.interest_weight,
                content: settings.content_weight,
                freshness: settings.freshness_weight,
            },
            freshness_scale_hours: settings.freshness_scale_hours,
            max_features: settings.max_features,
            history_limit: settings.history_limit,
            fallback_divisor: settings.fallback_divisor,
        }
    }
}

impl RankingConfig {
    /// Panics if any value breaks the engine contract.
    fn assert_valid(&self) {
        assert!(self.max_features > 0, "max_features must be positive");
        assert!(self.history_limit > 0, "history_limit must be positive");
        assert!(
            self.fallback_divisor > 0,
            "fallback_divisor must be positive"
        );
        for threshold in [
            self.interest_threshold,
            self.content_threshold,
            self.balanced_threshold,
        ] {
            assert!(
                threshold.is_finite() && threshold >= 0.0,
                "thresholds must be finite and non-negative"
            );
        }
        for weight in [
            self.weights.interest,
            self.weights.content,
            self.weights.freshness,
        ] {
            assert!(
                weight.is_finite() && weight >= 0.0,
                "weights must be finite and non-negative"
            );
        }
        assert!(
            self.freshness_scale_hours.is_finite() && self.freshness_scale_hours > 0.0,
            "freshness_scale_hours must be positive"
        );
    }
}

/// Per-candidate signal breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// Position in the candidate list.
    pub index: usize,
    /// Cosine similarity to the joined interest tags.
    pub interest: f32,
    /// Cosine similarity to the joined recent history.
    pub content: f32,
    /// Freshness decay factor.
    pub freshness: f32,
    /// Weighted blend of the three signals.
    pub combined: f32,
}

/// Orders candidate documents for an actor.
///
/// A `Ranker` is immutable after construction and can be shared freely
/// between threads.
#[derive(Clone)]
pub struct Ranker {
    /// Thresholds, weights and caps.
    config: RankingConfig,
    /// Vectorizer shared by all modes.
    vectorizer: Vectorizer,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}

impl Ranker {
    /// Creates a ranker.
    ///
    /// # Panics
    ///
    /// Panics if the configuration has a zero cap, a negative or non-finite
    /// threshold or weight, or a non-positive decay scale.
    pub fn new(config: RankingConfig) -> Self {
        config.assert_valid();
        let vectorizer = Vectorizer::new(config.max_features);
        Self { config, vectorizer }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Ranks `candidates` using thread-local randomness and the current time.
    pub fn rank<'a>(
        &self,
        profile: &ActorProfile,
        candidates: &'a [Document],
        mode: RankingMode,
    ) -> Vec<&'a Document> {
        self.rank_with(
            profile,
            candidates,
            mode,
            &mut rand::thread_rng(),
            Utc::now(),
        )
    }

    /// Ranks `candidates` with an explicit random source and clock.
    pub fn rank_with<'a, R: Rng + ?Sized>(
        &self,
        profile: &ActorProfile,
        candidates: &'a [Document],
        mode: RankingMode,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Vec<&'a Document> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let order = self
            .order(profile, candidates, mode, rng, now)
            .unwrap_or_else(|err| {
                warn!(%mode, error = %err, "vectorization failed, keeping input order");
                input_order(candidates.len())
            });

        debug!(%mode, candidates = candidates.len(), kept = order.len(), "ranked");
        order.into_iter().map(|i| &candidates[i]).collect()
    }

    /// Computes every signal for every candidate, in input order.
    ///
    /// Missing signals (no interests, no history) are zero. If vectorization
    /// fails only freshness is reported.
    pub fn score(
        &self,
        profile: &ActorProfile,
        candidates: &[Document],
        now: DateTime<Utc>,
    ) -> Vec<ScoredCandidate> {
        self.signals(profile, candidates, now)
            .unwrap_or_else(|err| {
                warn!(error = %err, "vectorization failed, reporting freshness only");
                let zeros = vec![0.0; candidates.len()];
                self.blend(&zeros, &zeros, candidates, now)
            })
    }

    /// Returns candidate indices in ranked order.
    fn order<R: Rng + ?Sized>(
        &self,
        profile: &ActorProfile,
        candidates: &[Document],
        mode: RankingMode,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<Vec<usize>, VectorizeError> {
        match mode {
            RankingMode::Serendipity => {
                let mut order = input_order(candidates.len());
                order.shuffle(rng);
                Ok(order)
            }
            RankingMode::Interests => self.interests_order(profile, candidates),
            RankingMode::Content => self.content_order(profile, candidates),
            RankingMode::Balanced => self.balanced_order(profile, candidates, now),
        }
    }

    /// Candidates above the interest threshold, or the top slice of them.
    fn interests_order(
        &self,
        profile: &ActorProfile,
        candidates: &[Document],
    ) -> Result<Vec<usize>, VectorizeError> {
        if !profile.has_interests() {
            debug!("profile has no interests, keeping input order");
            return Ok(input_order(candidates.len()));
        }
        let scores = self.interest_scores(profile, candidates)?;
        let selected = select_above(&scores, self.config.interest_threshold);
        if selected.is_empty() {
            let k = candidates.len().div_ceil(self.config.fallback_divisor).max(1);
            debug!(k, "no candidate above the interest threshold, keeping top k");
            return Ok(top_k(&scores, k));
        }
        Ok(selected)
    }

    /// Candidates above the content threshold, with no fallback.
    fn content_order(
        &self,
        profile: &ActorProfile,
        candidates: &[Document],
    ) -> Result<Vec<usize>, VectorizeError> {
        if !profile.has_history() {
            debug!("profile has no history, keeping input order");
            return Ok(input_order(candidates.len()));
        }
        let scores = self.content_scores(profile, candidates)?;
        Ok(select_above(&scores, self.config.content_threshold))
    }

    /// Candidates above the combined threshold, or the top half of them.
    fn balanced_order(
        &self,
        profile: &ActorProfile,
        candidates: &[Document],
        now: DateTime<Utc>,
    ) -> Result<Vec<usize>, VectorizeError> {
        let n = candidates.len();
        if !profile.has_interests() {
            debug!("profile has no interests, keeping input order");
            return Ok(input_order(n));
        }
        let combined: Vec<f32> = self
            .signals(profile, candidates, now)?
            .iter()
            .map(|s| s.combined)
            .collect();
        // Ties go to the newer document.
        let mut order = input_order(n);
        order.sort_by(|&a, &b| {
            combined[b]
                .total_cmp(&combined[a])
                .then_with(|| candidates[b].created_at.cmp(&candidates[a].created_at))
        });
        let selected: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| combined[i] > self.config.balanced_threshold)
            .collect();
        if selected.is_empty() {
            debug!(k = n / 2, "no candidate above the balanced threshold, keeping top half");
            order.truncate(n / 2);
            return Ok(order);
        }
        Ok(selected)
    }

    /// All three signals plus the blend, in input order.
    fn signals(
        &self,
        profile: &ActorProfile,
        candidates: &[Document],
        now: DateTime<Utc>,
    ) -> Result<Vec<ScoredCandidate>, VectorizeError> {
        let zeros = || vec![0.0; candidates.len()];
        let interest = if profile.has_interests() {
            self.interest_scores(profile, candidates)?
        } else {
            zeros()
        };
        let content = if profile.has_history() {
            self.content_scores(profile, candidates)?
        } else {
            zeros()
        };
        Ok(self.blend(&interest, &content, candidates, now))
    }

    /// Adds freshness to precomputed similarities and blends them.
    fn blend(
        &self,
        interest: &[f32],
        content: &[f32],
        candidates: &[Document],
        now: DateTime<Utc>,
    ) -> Vec<ScoredCandidate> {
        candidates
            .iter()
            .enumerate()
            .map(|(index, doc)| {
                let fresh = freshness(doc.created_at, now, self.config.freshness_scale_hours);
                ScoredCandidate {
                    index,
                    interest: interest[index],
                    content: content[index],
                    freshness: fresh,
                    combined: self
                        .config
                        .weights
                        .combine(interest[index], content[index], fresh),
                }
            })
            .collect()
    }

    /// Similarity of each candidate to the joined interest tags.
    fn interest_scores(
        &self,
        profile: &ActorProfile,
        candidates: &[Document],
    ) -> Result<Vec<f32>, VectorizeError> {
        self.similarity_to(&profile.interests.join(" "), candidates)
    }

    /// Similarity of each candidate to the actor's most recent documents.
    fn content_scores(
        &self,
        profile: &ActorProfile,
        candidates: &[Document],
    ) -> Result<Vec<f32>, VectorizeError> {
        let mut recent: Vec<&Document> = profile.history.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let reference = recent
            .iter()
            .take(self.config.history_limit)
            .map(|doc| doc.body.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        self.similarity_to(&reference, candidates)
    }

    /// Vectorizes `reference` together with the candidate bodies and scores
    /// each candidate against it.
    fn similarity_to(
        &self,
        reference: &str,
        candidates: &[Document],
    ) -> Result<Vec<f32>, VectorizeError> {
        let mut corpus = Vec::with_capacity(candidates.len() + 1);
        corpus.push(reference);
        corpus.extend(candidates.iter().map(|doc| doc.body.as_str()));

        let matrix = self.vectorizer.fit_transform(&corpus)?;
        let (reference, rows) = matrix
            .rows()
            .split_first()
            .ok_or(VectorizeError::EmptyCorpus)?;
        Ok(score_against(reference, rows))
    }
}

/// Identity permutation.
fn input_order(n: usize) -> Vec<usize> {
    (0..n).collect()
}
