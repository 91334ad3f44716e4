//! Configuration validation.
//!
//! `check_config` rejects values that break the engine's contract;
//! `validate_config` reports suspicious but usable settings.

use std::fmt;

use crate::{Config, ConfigError, FEED_VIEWS};

/// Tolerance when comparing the blend weight sum against 1.0.
const WEIGHT_SUM_TOLERANCE: f32 = 1e-4;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The balanced-mode blend weights do not add up to one.
    WeightsDoNotSumToOne {
        /// Actual sum of the three weights.
        sum: f32,
    },
    /// The clustering vocabulary cap exceeds the ranking one.
    ClusterVocabularyLarger {
        /// Clustering cap.
        cluster: usize,
        /// Ranking cap.
        ranking: usize,
    },
    /// A page holds more documents than the candidate pool can supply.
    PageLargerThanPool {
        /// Configured page size.
        per_page: usize,
        /// Configured candidate pool cap.
        candidate_limit: usize,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightsDoNotSumToOne { sum } => {
                write!(f, "ranking weights sum to {sum:.3}, not 1.0")
            }
            Self::ClusterVocabularyLarger { cluster, ranking } => write!(
                f,
                "cluster.max_features ({cluster}) exceeds ranking.max_features ({ranking})"
            ),
            Self::PageLargerThanPool {
                per_page,
                candidate_limit,
            } => write!(
                f,
                "feed.per_page ({per_page}) exceeds feed.candidate_limit ({candidate_limit})"
            ),
        }
    }
}

/// Returns an error for the first setting that violates the engine contract.
pub fn check_config(config: &Config) -> Result<(), ConfigError> {
    let ranking = &config.ranking;
    let cluster = &config.cluster;
    let feed = &config.feed;

    for (field, value) in [
        ("ranking.max_features", ranking.max_features),
        ("ranking.history_limit", ranking.history_limit),
        ("ranking.fallback_divisor", ranking.fallback_divisor),
        ("cluster.max_features", cluster.max_features),
        ("feed.per_page", feed.per_page),
        ("feed.candidate_limit", feed.candidate_limit),
    ] {
        if value == 0 {
            return Err(ConfigError::ZeroCount { field });
        }
    }

    for (field, value) in [
        ("ranking.interest_threshold", ranking.interest_threshold),
        ("ranking.content_threshold", ranking.content_threshold),
        ("ranking.balanced_threshold", ranking.balanced_threshold),
        ("cluster.threshold", cluster.threshold),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidThreshold { field, value });
        }
    }

    for (field, value) in [
        ("ranking.interest_weight", ranking.interest_weight),
        ("ranking.content_weight", ranking.content_weight),
        ("ranking.freshness_weight", ranking.freshness_weight),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidWeight { field, value });
        }
    }

    if !ranking.freshness_scale_hours.is_finite() || ranking.freshness_scale_hours <= 0.0 {
        return Err(ConfigError::InvalidDecayScale {
            value: ranking.freshness_scale_hours,
        });
    }

    if !FEED_VIEWS.contains(&feed.default_mode.as_str()) {
        return Err(ConfigError::UnknownMode {
            mode: feed.default_mode.clone(),
        });
    }

    Ok(())
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let ranking = &config.ranking;

    let sum = ranking.interest_weight + ranking.content_weight + ranking.freshness_weight;
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        warnings.push(ConfigWarning::WeightsDoNotSumToOne { sum });
    }

    if config.cluster.max_features > ranking.max_features {
        warnings.push(ConfigWarning::ClusterVocabularyLarger {
            cluster: config.cluster.max_features,
            ranking: ranking.max_features,
        });
    }

    if config.feed.per_page > config.feed.candidate_limit {
        warnings.push(ConfigWarning::PageLargerThanPool {
            per_page: config.feed.per_page,
            candidate_limit: config.feed.candidate_limit,
        });
    }

    warnings
}
