//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules.

use std::path::PathBuf;

use crate::{
    ClusterSettings, Config, FeedSettings, RankingSettings,
    parse::{RawClusterSettings, RawConfig, RawFeedSettings, RawRankingSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first
/// (closest to CWD), lowest precedence last (global config). For every scalar
/// the highest-precedence defined value wins; unset values keep their defaults.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut config = Config {
        config_root: configs
            .first()
            .and_then(|c| c.path.parent())
            .map(PathBuf::from),
        ..Config::default()
    };

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref ranking) = parsed.config.ranking {
            apply_raw_ranking(&mut config.ranking, ranking);
        }
        if let Some(ref cluster) = parsed.config.cluster {
            apply_raw_cluster(&mut config.cluster, cluster);
        }
        if let Some(ref feed) = parsed.config.feed {
            apply_raw_feed(&mut config.feed, feed);
        }
    }

    config
}

/// Applies raw ranking settings to result, overwriting any present values.
fn apply_raw_ranking(result: &mut RankingSettings, raw: &RawRankingSettings) {
    if let Some(v) = raw.interest_threshold {
        result.interest_threshold = v;
    }
    if let Some(v) = raw.content_threshold {
        result.content_threshold = v;
    }
    if let Some(v) = raw.balanced_threshold {
        result.balanced_threshold = v;
    }
    if let Some(v) = raw.interest_weight {
        result.interest_weight = v;
    }
    if let Some(v) = raw.content_weight {
        result.content_weight = v;
    }
    if let Some(v) = raw.freshness_weight {
        result.freshness_weight = v;
    }
    if let Some(v) = raw.freshness_scale_hours {
        result.freshness_scale_hours = v;
    }
    if let Some(v) = raw.max_features {
        result.max_features = v;
    }
    if let Some(v) = raw.history_limit {
        result.history_limit = v;
    }
    if let Some(v) = raw.fallback_divisor {
        result.fallback_divisor = v;
    }
}

/// Applies raw cluster settings to result.
fn apply_raw_cluster(result: &mut ClusterSettings, raw: &RawClusterSettings) {
    if let Some(v) = raw.threshold {
        result.threshold = v;
    }
    if let Some(v) = raw.max_features {
        result.max_features = v;
    }
    if let Some(v) = raw.min_documents {
        result.min_documents = v;
    }
}

/// Applies raw feed settings to result.
fn apply_raw_feed(result: &mut FeedSettings, raw: &RawFeedSettings) {
    if let Some(v) = raw.per_page {
        result.per_page = v;
    }
    if let Some(v) = raw.candidate_limit {
        result.candidate_limit = v;
    }
    if let Some(ref v) = raw.default_mode {
        result.default_mode.clone_from(v);
    }
}
