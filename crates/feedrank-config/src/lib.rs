//! Configuration system for feedrank.
//!
//! feedrank uses TOML configuration files named `.feedrank.toml`. Configuration
//! is resolved by walking up the directory tree from the current working
//! directory, collecting any `.feedrank.toml` files found, then loading
//! `~/.feedrank.toml` as the global config with lowest precedence.
//!
//! Every threshold, blend weight and vocabulary cap used by the ranking engine
//! lives here so it can be calibrated without touching code.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::{ConfigError, FEED_VIEWS};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawClusterSettings, RawConfig, RawFeedSettings, RawRankingSettings, parse_config_file,
    parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::{check_config, validate_config};

/// Top-level merged configuration for feedrank.
///
/// This represents the fully resolved configuration after merging all
/// discovered `.feedrank.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Ranking thresholds, weights and vocabulary cap.
    pub ranking: RankingSettings,
    /// Bubble clustering settings.
    pub cluster: ClusterSettings,
    /// Feed assembly settings.
    pub feed: FeedSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.feedrank.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found, and
    /// an error if any file is unreadable or the merged values are invalid.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let config = merge_configs(&parsed);
        config.check()?;
        Ok(config)
    }

    /// Rejects values that would make the engine misbehave.
    ///
    /// Zero vocabulary caps, negative thresholds, non-finite weights, a
    /// non-positive decay scale and unknown default modes are errors.
    pub fn check(&self) -> Result<(), ConfigError> {
        check_config(self)
    }

    /// Returns non-fatal warnings about the configuration.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            ranking: self.ranking.clone(),
            cluster: self.cluster.clone(),
            feed: self.feed.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Ranking settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingSettings {
    /// Minimum interest similarity kept by the `interests` mode.
    pub interest_threshold: f32,
    /// Minimum content similarity kept by the `content` mode.
    pub content_threshold: f32,
    /// Minimum combined score kept by the `balanced` mode.
    pub balanced_threshold: f32,
    /// Blend weight of interest similarity.
    pub interest_weight: f32,
    /// Blend weight of content similarity.
    pub content_weight: f32,
    /// Blend weight of freshness.
    pub freshness_weight: f32,
    /// Freshness is `exp(-hours / freshness_scale_hours)`.
    pub freshness_scale_hours: f32,
    /// Vocabulary cap for ranking.
    pub max_features: usize,
    /// Number of recent documents used as the content profile.
    pub history_limit: usize,
    /// The `interests` fallback keeps `ceil(n / fallback_divisor)` candidates.
    pub fallback_divisor: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            interest_threshold: 0.05,
            content_threshold: 0.10,
            balanced_threshold: 0.10,
            interest_weight: 0.4,
            content_weight: 0.3,
            freshness_weight: 0.3,
            freshness_scale_hours: 24.0,
            max_features: 100,
            history_limit: 10,
            fallback_divisor: 5,
        }
    }
}

/// Bubble clustering settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterSettings {
    /// Minimum similarity to a bubble seed.
    pub threshold: f32,
    /// Vocabulary cap for clustering.
    pub max_features: usize,
    /// Below this many documents everything lands in a single bucket.
    pub min_documents: usize,
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            threshold: 0.30,
            max_features: 50,
            min_documents: 3,
        }
    }
}

/// Feed assembly settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Documents per page.
    pub per_page: usize,
    /// Maximum candidates handed to the ranking engine.
    pub candidate_limit: usize,
    /// View used when a request names none.
    pub default_mode: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            per_page: 20,
            candidate_limit: 100,
            default_mode: String::from("balanced"),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Ranking settings.
    ranking: RankingSettings,
    /// Clustering settings.
    cluster: ClusterSettings,
    /// Feed settings.
    feed: FeedSettings,
}
