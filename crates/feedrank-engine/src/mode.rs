//! Ranking modes and feed views.

use std::{fmt, str};

use tracing::debug;

/// Strategy used to order a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankingMode {
    /// Similarity to the actor's interest tags.
    Interests,
    /// Similarity to the actor's recent documents.
    Content,
    /// Weighted blend of interests, content and freshness.
    #[default]
    Balanced,
    /// Uniformly random order.
    Serendipity,
}

impl RankingMode {
    /// Every mode, in display order.
    pub const ALL: [Self; 4] = [
        Self::Balanced,
        Self::Interests,
        Self::Content,
        Self::Serendipity,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interests => "interests",
            Self::Content => "content",
            Self::Balanced => "balanced",
            Self::Serendipity => "serendipity",
        }
    }

    /// Returns a brief description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Interests => "Documents similar to the actor's interest tags",
            Self::Content => "Documents similar to what the actor recently wrote",
            Self::Balanced => "Interests, recent writing and freshness combined",
            Self::Serendipity => "Random order for discovery",
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for RankingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interests" => Ok(Self::Interests),
            "content" => Ok(Self::Content),
            "balanced" => Ok(Self::Balanced),
            "serendipity" => Ok(Self::Serendipity),
            _ => Err(format!(
                "unknown mode '{s}', expected one of: balanced, interests, content, serendipity"
            )),
        }
    }
}

/// What a feed request asks for: a ranked stream or a clustered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedView {
    /// A ranked stream.
    Ranked(RankingMode),
    /// A balanced stream whose visible page is grouped into topic bubbles.
    Bubbles,
}

impl Default for FeedView {
    fn default() -> Self {
        Self::Ranked(RankingMode::default())
    }
}

impl FeedView {
    /// Resolves a request parameter to a view.
    ///
    /// A missing parameter selects `default`. Unknown names select the
    /// balanced stream.
    pub fn from_param(param: Option<&str>, default: Self) -> Self {
        let Some(name) = param else {
            return default;
        };
        name.parse().unwrap_or_else(|_| {
            debug!(mode = name, "unknown feed mode, using balanced");
            Self::Ranked(RankingMode::Balanced)
        })
    }

    /// The ranking mode used to order the candidate pool.
    pub fn ranking_mode(&self) -> RankingMode {
        match self {
            Self::Ranked(mode) => *mode,
            Self::Bubbles => RankingMode::Balanced,
        }
    }

    /// True if the page should be clustered into bubbles.
    pub fn wants_bubbles(&self) -> bool {
        matches!(self, Self::Bubbles)
    }
}

impl fmt::Display for FeedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ranked(mode) => write!(f, "{mode}"),
            Self::Bubbles => f.write_str("bubbles"),
        }
    }
}

impl str::FromStr for FeedView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("bubbles") {
            return Ok(Self::Bubbles);
        }
        s.parse::<RankingMode>().map(Self::Ranked).map_err(|_| {
            format!(
                "unknown mode '{s}', expected one of: balanced, interests, content, serendipity, bubbles"
            )
        })
    }
}
