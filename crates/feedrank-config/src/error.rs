//! Error types for feedrank configuration.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A vocabulary cap, page size or similar count is zero.
    #[error("{field} must be greater than zero")]
    ZeroCount {
        /// Dotted name of the offending setting.
        field: &'static str,
    },

    /// A threshold is negative or not a finite number.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidThreshold {
        /// Dotted name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A blend weight is negative or not a finite number.
    #[error("{field} must be a finite, non-negative weight (got {value})")]
    InvalidWeight {
        /// Dotted name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The freshness decay scale is not strictly positive.
    #[error("ranking.freshness_scale_hours must be positive (got {value})")]
    InvalidDecayScale {
        /// The rejected value.
        value: f32,
    },

    /// The configured default feed mode is not a known view.
    #[error("unknown feed.default_mode '{mode}', expected one of: {}", FEED_VIEWS.join(", "))]
    UnknownMode {
        /// The rejected mode name.
        mode: String,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// Feed view names accepted for `feed.default_mode`.
pub const FEED_VIEWS: &[&str] = &["balanced", "interests", "content", "serendipity", "bubbles"];
