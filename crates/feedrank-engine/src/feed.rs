//! Feed assembly: candidate pool, ranking, pagination and bubbles.

use chrono::{DateTime, Utc};
use feedrank_config::{Config, FeedSettings};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::{
    ActorProfile, ClusterConfig, Clusterer, Document, FeedView, RankingConfig, Ranker,
};

/// One topic bubble of a feed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageBubble {
    /// Bubble label.
    pub label: String,
    /// Members in page order.
    pub documents: Vec<Document>,
}

/// One page of an assembled feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedPage {
    /// The view the page was assembled for.
    pub mode: String,
    /// Documents on this page, in ranked order.
    pub documents: Vec<Document>,
    /// 1-based page number.
    pub page: usize,
    /// Page size.
    pub per_page: usize,
    /// Number of ranked documents across all pages.
    pub total: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// True if an earlier page exists.
    pub has_prev: bool,
    /// True if a later page exists.
    pub has_next: bool,
    /// Topic bubbles of this page, for the bubbles view only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bubbles: Option<Vec<PageBubble>>,
}

/// Builds feed pages from a candidate pool.
#[derive(Clone)]
pub struct FeedAssembler {
    /// Ranks the pool.
    ranker: Ranker,
    /// Groups the visible page for the bubbles view.
    clusterer: Clusterer,
    /// Documents per page.
    per_page: usize,
    /// Maximum pool size.
    candidate_limit: usize,
    /// View used when a request names none.
    default_view: FeedView,
}

impl Default for FeedAssembler {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl FeedAssembler {
    /// Creates an assembler.
    ///
    /// # Panics
    ///
    /// Panics if `per_page` or `candidate_limit` is zero.
    pub fn new(ranker: Ranker, clusterer: Clusterer, settings: &FeedSettings) -> Self {
        assert!(settings.per_page > 0, "per_page must be positive");
        assert!(
            settings.candidate_limit > 0,
            "candidate_limit must be positive"
        );
        let default_view: FeedView = settings.default_mode.parse().unwrap_or_default();
        Self {
            ranker,
            clusterer,
            per_page: settings.per_page,
            candidate_limit: settings.candidate_limit,
            default_view,
        }
    }

    /// Creates an assembler with every component configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Ranker::new(RankingConfig::from(&config.ranking)),
            Clusterer::new(ClusterConfig::from(&config.cluster)),
            &config.feed,
        )
    }

    /// The view used when a request names none.
    pub fn default_view(&self) -> FeedView {
        self.default_view
    }

    /// Orders candidates newest first and caps the pool size.
    pub fn prepare_pool(&self, mut candidates: Vec<Document>) -> Vec<Document> {
        candidates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        candidates.truncate(self.candidate_limit);
        candidates
    }

    /// Assembles one page using thread-local randomness and the current time.
    pub fn assemble(
        &self,
        profile: &ActorProfile,
        candidates: Vec<Document>,
        view: FeedView,
        page: usize,
    ) -> FeedPage {
        self.assemble_with(
            profile,
            candidates,
            view,
            page,
            &mut rand::thread_rng(),
            Utc::now(),
        )
    }

    /// Assembles one page with an explicit random source and clock.
    pub fn assemble_with<R: Rng + ?Sized>(
        &self,
        profile: &ActorProfile,
        candidates: Vec<Document>,
        view: FeedView,
        page: usize,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> FeedPage {
        let pool = self.prepare_pool(candidates);
        let ranked = self
            .ranker
            .rank_with(profile, &pool, view.ranking_mode(), rng, now);

        let page = page.max(1);
        let total = ranked.len();
        let total_pages = total.div_ceil(self.per_page);
        let documents: Vec<Document> = ranked
            .into_iter()
            .skip((page - 1).saturating_mul(self.per_page))
            .take(self.per_page)
            .cloned()
            .collect();
        debug!(%view, page, total, shown = documents.len(), "assembled feed page");

        let bubbles: Option<Vec<PageBubble>> = view.wants_bubbles().then(|| {
            self.clusterer
                .cluster(&documents)
                .into_iter()
                .map(|bubble| PageBubble {
                    label: bubble.label,
                    documents: bubble.documents.into_iter().cloned().collect(),
                })
                .collect()
        });

        FeedPage {
            mode: view.to_string(),
            documents,
            page,
            per_page: self.per_page,
            total,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
            bubbles,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::{Duration, TimeZone};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::RankingMode;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn pool(n: usize) -> Vec<Document> {
        (0..n)
            .map(|i| {
                Document::new(
                    format!("d{i}"),
                    format!("post number {i}"),
                    now() - Duration::hours(i as i64),
                    "friend",
                )
            })
            .collect()
    }

    fn assembler(per_page: usize, candidate_limit: usize) -> FeedAssembler {
        FeedAssembler::new(
            Ranker::default(),
            Clusterer::default(),
            &FeedSettings {
                per_page,
                candidate_limit,
                default_mode: "balanced".into(),
            },
        )
    }

    fn page_of(
        assembler: &FeedAssembler,
        candidates: Vec<Document>,
        view: FeedView,
        page: usize,
    ) -> FeedPage {
        let mut rng = StdRng::seed_from_u64(3);
        assembler.assemble_with(&ActorProfile::default(), candidates, view, page, &mut rng, now())
    }

    fn ids(page: &FeedPage) -> Vec<&str> {
        page.documents.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn pool_is_newest_first_and_capped() {
        let assembler = assembler(20, 3);
        let mut candidates = pool(5);
        candidates.reverse();

        let prepared = assembler.prepare_pool(candidates);
        let ids: Vec<_> = prepared.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d0", "d1", "d2"]);
    }

    #[test]
    fn pagination_arithmetic() {
        let assembler = assembler(2, 100);
        let view = FeedView::Ranked(RankingMode::Interests);

        let first = page_of(&assembler, pool(5), view, 1);
        assert_eq!(ids(&first), vec!["d0", "d1"]);
        assert_eq!(first.total, 5);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_prev);
        assert!(first.has_next);

        let last = page_of(&assembler, pool(5), view, 3);
        assert_eq!(ids(&last), vec!["d4"]);
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[test]
    fn page_zero_is_first_page() {
        let assembler = assembler(2, 100);
        let page = page_of(&assembler, pool(3), FeedView::default(), 0);
        assert_eq!(page.page, 1);
        assert_eq!(ids(&page), vec!["d0", "d1"]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let assembler = assembler(2, 100);
        let page = page_of(&assembler, pool(3), FeedView::default(), 9);
        assert!(page.documents.is_empty());
        assert_eq!(page.total_pages, 2);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn empty_pool_has_no_pages() {
        let page = page_of(&assembler(20, 100), Vec::new(), FeedView::default(), 1);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
    }

    #[test]
    fn bubbles_only_for_bubbles_view() {
        let assembler = assembler(3, 100);

        let ranked = page_of(&assembler, pool(5), FeedView::default(), 1);
        assert!(ranked.bubbles.is_none());

        let clustered = page_of(&assembler, pool(5), FeedView::Bubbles, 1);
        let bubbles = clustered.bubbles.as_ref().unwrap();
        let clustered_count: usize = bubbles.iter().map(|b| b.documents.len()).sum();
        assert_eq!(clustered_count, clustered.documents.len());
        assert_eq!(clustered.mode, "bubbles");
    }

    #[test]
    fn default_view_comes_from_settings() {
        let assembler = FeedAssembler::new(
            Ranker::default(),
            Clusterer::default(),
            &FeedSettings {
                default_mode: "serendipity".into(),
                ..FeedSettings::default()
            },
        );
        assert_eq!(
            assembler.default_view(),
            FeedView::Ranked(RankingMode::Serendipity)
        );
    }

    #[test]
    fn page_serializes_without_bubbles() {
        let page = page_of(&assembler(20, 100), pool(1), FeedView::default(), 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["per_page"], 20);
        assert!(json.get("bubbles").is_none());
    }
}
