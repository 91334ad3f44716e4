//! Documents and actor profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of interest tags kept on a profile.
pub const MAX_INTERESTS: usize = 20;

/// Maximum number of history documents kept on a profile.
pub const MAX_HISTORY: usize = 10;

/// A piece of content that can be ranked or clustered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque identifier.
    pub id: String,
    /// UTF-8 text body.
    pub body: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Identifier of the authoring actor.
    pub author: String,
}

impl Document {
    /// Creates a document.
    pub fn new(
        id: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            created_at,
            author: author.into(),
        }
    }
}

/// The reference signal for one actor: declared interests and recent writing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorProfile {
    /// Free-text interest tags.
    pub interests: Vec<String>,
    /// The actor's own recent documents, newest first.
    pub history: Vec<Document>,
}

impl ActorProfile {
    /// Creates a profile from interest tags, with no history.
    pub fn new(interests: Vec<String>) -> Self {
        Self {
            interests,
            history: Vec::new(),
        }
    }

    /// Parses a comma-separated interest list.
    ///
    /// Tags are trimmed, empty tags are dropped, and at most
    /// [`MAX_INTERESTS`] are kept.
    pub fn parse_interests(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .take(MAX_INTERESTS)
            .map(ToString::to_string)
            .collect()
    }

    /// Replaces the history with the [`MAX_HISTORY`] newest of `documents`.
    pub fn with_history(mut self, mut documents: Vec<Document>) -> Self {
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        documents.truncate(MAX_HISTORY);
        self.history = documents;
        self
    }

    /// True if the profile declares at least one interest.
    pub fn has_interests(&self) -> bool {
        !self.interests.is_empty()
    }

    /// True if the profile carries at least one history document.
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}
