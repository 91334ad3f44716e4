//! Integration tests for feedrank-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge -> check.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use feedrank_config::{CONFIG_FILENAME, Config, ConfigError};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_from_no_files_returns_default() {
    let config = Config::load_from_files(&[]).unwrap();

    assert!(config.config_root.is_none());
    assert_eq!(config.ranking.max_features, 100);
    assert_eq!(config.feed.default_mode, "balanced");
}

#[test]
fn test_load_single_config() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n\n[ranking]\nmax_features = 30\n\n[feed]\nper_page = 10\n",
    );

    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.ranking.max_features, 30);
    assert_eq!(config.feed.per_page, 10);
    assert_eq!(config.cluster.max_features, 50);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
}

#[test]
fn test_load_nested_configs_merging() {
    let env = TestEnv::new();
    let subdir = env.create_dir("project/subdir");

    env.create_file(
        CONFIG_FILENAME,
        "root = true\n\n[ranking]\ninterest_weight = 0.5\nhistory_limit = 4\n",
    );
    env.create_file(
        &format!("project/{CONFIG_FILENAME}"),
        "[ranking]\nhistory_limit = 8\n",
    );

    let config = Config::load(&subdir).unwrap();

    // Closest file wins for history_limit, root file supplies the weight.
    assert_eq!(config.ranking.history_limit, 8);
    assert!((config.ranking.interest_weight - 0.5).abs() < f32::EPSILON);
    assert_eq!(config.config_root, Some(env.path().join("project")));
}

#[test]
fn test_load_invalid_toml_reports_path() {
    let env = TestEnv::new();
    let path = env.create_file(CONFIG_FILENAME, "root = true\n[ranking\n");

    let err = Config::load(env.path()).unwrap_err();

    match err {
        ConfigError::ParseToml { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_rejects_contract_violation() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n\n[cluster]\nmax_features = 0\n",
    );

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ZeroCount {
            field: "cluster.max_features"
        }
    ));
}

#[test]
fn test_load_missing_file_errors() {
    let env = TestEnv::new();
    let missing = env.path().join("nope.toml");

    let err = Config::load_from_files(&[missing]).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn test_effective_settings_reflect_overrides() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n\n[feed]\ndefault_mode = \"bubbles\"\n",
    );

    let config = Config::load(env.path()).unwrap();
    let toml = config.settings_to_toml();

    assert!(toml.contains("default_mode = \"bubbles\""));
    assert!(config.validate().is_empty());
}

#[test]
fn test_load_rejects_zero_history_limit() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n\n[ranking]\nhistory_limit = 0\n",
    );

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ZeroCount {
            field: "ranking.history_limit"
        }
    ));
}
