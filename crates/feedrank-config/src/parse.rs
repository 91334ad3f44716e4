//! Configuration file parsing.
//!
//! Parses individual `.feedrank.toml` files into intermediate `RawConfig`
//! structures that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Ranking section.
    pub ranking: Option<RawRankingSettings>,
    /// Clustering section.
    pub cluster: Option<RawClusterSettings>,
    /// Feed assembly section.
    pub feed: Option<RawFeedSettings>,
}

/// Raw ranking settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawRankingSettings {
    /// Minimum interest similarity kept by the `interests` mode.
    pub interest_threshold: Option<f32>,
    /// Minimum content similarity kept by the `content` mode.
    pub content_threshold: Option<f32>,
    /// Minimum combined score kept by the `balanced` mode.
    pub balanced_threshold: Option<f32>,
    /// Blend weight of interest similarity.
    pub interest_weight: Option<f32>,
    /// Blend weight of content similarity.
    pub content_weight: Option<f32>,
    /// Blend weight of freshness.
    pub freshness_weight: Option<f32>,
    /// Decay scale for freshness, in hours.
    pub freshness_scale_hours: Option<f32>,
    /// Vocabulary cap for ranking.
    pub max_features: Option<usize>,
    /// Number of recent documents used as the content profile.
    pub history_limit: Option<usize>,
    /// Divisor for the `interests` low-confidence fallback.
    pub fallback_divisor: Option<usize>,
}

/// Raw clustering settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawClusterSettings {
    /// Minimum similarity to a bubble seed.
    pub threshold: Option<f32>,
    /// Vocabulary cap for clustering.
    pub max_features: Option<usize>,
    /// Below this many documents everything lands in one bucket.
    pub min_documents: Option<usize>,
}

/// Raw feed settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawFeedSettings {
    /// Documents per page.
    pub per_page: Option<usize>,
    /// Maximum candidates handed to the engine.
    pub candidate_limit: Option<usize>,
    /// View used when a request names none.
    pub default_mode: Option<String>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
