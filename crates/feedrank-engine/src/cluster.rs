//! Grouping documents into topic bubbles.
//!
//! Clustering is seeded: documents are visited in input order and each one
//! not yet assigned starts a bubble holding every unassigned document whose
//! similarity to it exceeds the threshold. Members are never compared with
//! each other, only with the seed.

use std::vec;

use feedrank_config::ClusterSettings;
use feedrank_text::{Vectorizer, pairwise};
use serde::Serialize;
use tracing::{debug, warn};

use crate::Document;

/// Label of the single bubble returned for small or unclusterable input.
pub const ALL_LABEL: &str = "all";

/// Label of the bubble holding documents no seed matched.
pub const MISC_LABEL: &str = "Misc";

/// Tunable constants of the clusterer.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterConfig {
    /// Minimum seed similarity (exclusive) for bubble membership.
    pub threshold: f32,
    /// Vocabulary cap for vectorization.
    pub max_features: usize,
    /// Inputs smaller than this return a single `all` bubble.
    pub min_documents: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self::from(&ClusterSettings::default())
    }
}

impl From<&ClusterSettings> for ClusterConfig {
    fn from(settings: &ClusterSettings) -> Self {
        Self {
            threshold: settings.threshold,
            max_features: settings.max_features,
            min_documents: settings.min_documents,
        }
    }
}

/// A labeled group of documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bubble<'a> {
    /// Display label.
    pub label: String,
    /// Members in input order.
    pub documents: Vec<&'a Document>,
}

/// Bubbles in creation order. Every input document is in exactly one bubble.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bubbles<'a> {
    /// Bubbles in creation order.
    bubbles: Vec<Bubble<'a>>,
}

impl<'a> Bubbles<'a> {
    /// A single bubble labeled `all` holding `documents` in order.
    fn all(documents: &'a [Document]) -> Self {
        Self {
            bubbles: vec![Bubble {
                label: ALL_LABEL.to_string(),
                documents: documents.iter().collect(),
            }],
        }
    }

    /// Finds a bubble by label.
    pub fn get(&self, label: &str) -> Option<&Bubble<'a>> {
        self.bubbles.iter().find(|b| b.label == label)
    }

    /// Iterates over bubbles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Bubble<'a>> {
        self.bubbles.iter()
    }

    /// Labels in creation order.
    pub fn labels(&self) -> Vec<&str> {
        self.bubbles.iter().map(|b| b.label.as_str()).collect()
    }

    /// Number of bubbles.
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    /// True if there are no bubbles.
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Number of documents across all bubbles.
    pub fn total_documents(&self) -> usize {
        self.bubbles.iter().map(|b| b.documents.len()).sum()
    }
}

impl<'a> IntoIterator for Bubbles<'a> {
    type Item = Bubble<'a>;
    type IntoIter = vec::IntoIter<Bubble<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bubbles.into_iter()
    }
}

/// Groups documents by content similarity.
#[derive(Clone)]
pub struct Clusterer {
    /// Threshold and caps.
    config: ClusterConfig,
    /// Vectorizer with the clustering vocabulary cap.
    vectorizer: Vectorizer,
}

impl Default for Clusterer {
    fn default() -> Self {
        Self::new(ClusterConfig::default())
    }
}

impl Clusterer {
    /// Creates a clusterer.
    ///
    /// # Panics
    ///
    /// Panics if `max_features` is zero or the threshold is negative or
    /// non-finite.
    pub fn new(config: ClusterConfig) -> Self {
        assert!(config.max_features > 0, "max_features must be positive");
        assert!(
            config.threshold.is_finite() && config.threshold >= 0.0,
            "threshold must be finite and non-negative"
        );
        let vectorizer = Vectorizer::new(config.max_features);
        Self { config, vectorizer }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Groups `documents` into bubbles.
    pub fn cluster<'a>(&self, documents: &'a [Document]) -> Bubbles<'a> {
        if documents.len() < self.config.min_documents {
            return Bubbles::all(documents);
        }

        let bodies: Vec<&str> = documents.iter().map(|d| d.body.as_str()).collect();
        let matrix = match self.vectorizer.fit_transform(&bodies) {
            Ok(matrix) => matrix,
            Err(err) => {
                warn!(error = %err, "vectorization failed, returning a single bubble");
                return Bubbles::all(documents);
            }
        };
        let similarity = pairwise(matrix.rows());

        let mut assigned = vec![false; documents.len()];
        let mut bubbles = Vec::new();
        for seed in 0..documents.len() {
            if assigned[seed] {
                continue;
            }
            let members: Vec<usize> = (0..documents.len())
                .filter(|&j| !assigned[j] && similarity[seed][j] > self.config.threshold)
                .collect();
            if members.is_empty() {
                continue;
            }
            for &j in &members {
                assigned[j] = true;
            }
            bubbles.push(Bubble {
                label: format!("Topic {}", bubbles.len() + 1),
                documents: members.into_iter().map(|j| &documents[j]).collect(),
            });
        }

        let misc: Vec<&Document> = documents
            .iter()
            .zip(&assigned)
            .filter(|&(_, &done)| !done)
            .map(|(doc, _)| doc)
            .collect();
        if !misc.is_empty() {
            bubbles.push(Bubble {
                label: MISC_LABEL.to_string(),
                documents: misc,
            });
        }

        if bubbles.is_empty() {
            return Bubbles::all(documents);
        }
        debug!(
            documents = documents.len(),
            bubbles = bubbles.len(),
            "clustered"
        );
        Bubbles { bubbles }
    }
}
