//! Content ranking and topic clustering for social feeds.
//!
//! The engine orders candidate documents for one actor and groups documents
//! into topic "bubbles":
//!
//! - [`Ranker`] supports four [`RankingMode`]s: interest similarity, similarity
//!   to the actor's recent writing, a weighted blend with freshness decay, and
//!   a random shuffle.
//! - [`Clusterer`] groups documents whose TF-IDF vectors are close to a seed.
//! - [`FeedAssembler`] wraps both with candidate pool preparation and
//!   pagination.
//!
//! Ranking and clustering never fail. Missing signals and vectorization
//! errors fall back to the input order or a single bubble.

#![warn(missing_docs)]

mod blend;
mod cluster;
mod document;
mod feed;
mod mode;
mod rank;

pub use blend::{Weights, descending, freshness, select_above, top_k};
pub use cluster::{ALL_LABEL, Bubble, Bubbles, ClusterConfig, Clusterer, MISC_LABEL};
pub use document::{ActorProfile, Document, MAX_HISTORY, MAX_INTERESTS};
pub use feed::{FeedAssembler, FeedPage, PageBubble};
pub use mode::{FeedView, RankingMode};
pub use rank::{Ranker, RankingConfig, ScoredCandidate};
