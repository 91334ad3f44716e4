//! Loading ranking input files.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use feedrank_engine::{ActorProfile, Document};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading an input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid input JSON.
    #[error("invalid input in {path}: {source}")]
    Parse {
        /// Input path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// A profile and the candidates to rank for it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankInput {
    /// The actor the feed is built for.
    #[serde(default)]
    pub profile: ActorProfile,
    /// Candidate documents.
    #[serde(default)]
    pub candidates: Vec<Document>,
}

impl RankInput {
    /// Reads and parses an input file.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses input JSON.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn parses_full_input() {
        let input = RankInput::parse(
            r#"{
                "profile": {
                    "interests": ["pets"],
                    "history": [
                        {"id": "h1", "body": "my cat", "created_at": "2024-06-01T10:00:00Z", "author": "me"}
                    ]
                },
                "candidates": [
                    {"id": "c1", "body": "cats are great pets", "created_at": "2024-06-01T11:00:00+02:00", "author": "bob"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(input.profile.interests, vec!["pets"]);
        assert_eq!(input.profile.history.len(), 1);
        assert_eq!(input.candidates[0].id, "c1");
        assert_eq!(
            input.candidates[0].created_at.to_rfc3339(),
            "2024-06-01T09:00:00+00:00"
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let input = RankInput::parse("{}").unwrap();
        assert!(input.profile.interests.is_empty());
        assert!(input.candidates.is_empty());
    }

    #[test]
    fn rejects_bad_timestamp() {
        let err = RankInput::parse(
            r#"{"candidates": [{"id": "c", "body": "b", "created_at": "yesterday", "author": "a"}]}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn load_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, "not json").unwrap();

        let err = RankInput::load(&path).unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
        assert!(err.to_string().contains("input.json"));

        let missing = RankInput::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, InputError::Read { .. }));
    }
}
