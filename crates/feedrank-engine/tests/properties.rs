//! Behavioral properties of ranking and clustering across modes.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use feedrank_engine::{ActorProfile, Clusterer, Document, Ranker, RankingMode};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

/// Words the generated bodies are built from, with a few stopwords mixed in.
const WORDS: &[&str] = &[
    "rust", "compiler", "cats", "pets", "market", "stock", "garden", "the", "and", "music",
];

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn documents(bodies: &[String], ages: &[i64]) -> Vec<Document> {
    bodies
        .iter()
        .zip(ages)
        .enumerate()
        .map(|(i, (body, age))| {
            Document::new(format!("d{i}"), body.clone(), now() - Duration::hours(*age), "a")
        })
        .collect()
}

fn scenario() -> (ActorProfile, Vec<Document>) {
    let profile = ActorProfile::new(vec!["pets".into(), "animals".into()]);
    let candidates = vec![
        Document::new("cats", "cats are great pets", now(), "a"),
        Document::new("dogs", "dogs are great pets", now(), "b"),
        Document::new("market", "stock market rose today", now(), "c"),
    ];
    (profile, candidates)
}

fn ids(docs: &[&Document]) -> Vec<String> {
    docs.iter().map(|d| d.id.clone()).collect()
}

fn body_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..6).prop_map(|words| words.join(" "))
}

#[test]
fn scenario_interests_puts_pets_first() {
    let (profile, candidates) = scenario();
    let ranker = Ranker::default();
    let mut rng = StdRng::seed_from_u64(0);

    let ranked = ids(&ranker.rank_with(
        &profile,
        &candidates,
        RankingMode::Interests,
        &mut rng,
        now(),
    ));

    assert!(ranked.len() >= 2);
    let mut top: Vec<_> = ranked[..2].to_vec();
    top.sort();
    assert_eq!(top, vec!["cats", "dogs"]);
    assert!(ranked.iter().skip(2).all(|id| id == "market"));
}

#[test]
fn scenario_serendipity_returns_everything() {
    let (profile, candidates) = scenario();
    let ranker = Ranker::default();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ranked = ids(&ranker.rank_with(
            &profile,
            &candidates,
            RankingMode::Serendipity,
            &mut rng,
            now(),
        ));
        ranked.sort();
        assert_eq!(ranked, vec!["cats", "dogs", "market"]);
    }
}

#[test]
fn scenario_balanced_without_history() {
    let (profile, candidates) = scenario();
    let ranker = Ranker::default();

    let scored = ranker.score(&profile, &candidates, now());
    assert!(scored.iter().all(|s| s.content == 0.0));
    assert!(scored.iter().all(|s| (s.freshness - 1.0).abs() < 1e-6));

    let mut rng = StdRng::seed_from_u64(0);
    let ranked = ids(&ranker.rank_with(
        &profile,
        &candidates,
        RankingMode::Balanced,
        &mut rng,
        now(),
    ));
    assert_eq!(ranked, vec!["cats", "dogs", "market"]);
}

#[test]
fn non_random_modes_are_deterministic() {
    let (profile, candidates) = scenario();
    let profile = profile.with_history(vec![Document::new(
        "mine",
        "my cats love the market",
        now(),
        "me",
    )]);
    let ranker = Ranker::default();

    for mode in [
        RankingMode::Interests,
        RankingMode::Content,
        RankingMode::Balanced,
    ] {
        let first = ids(&ranker.rank(&profile, &candidates, mode));
        let second = ids(&ranker.rank(&profile, &candidates, mode));
        assert_eq!(first, second, "{mode} not deterministic");
    }
}

#[test]
fn serendipity_varies_between_calls() {
    let ranker = Ranker::default();
    let candidates: Vec<_> = (0..10)
        .map(|i| Document::new(format!("d{i}"), format!("topic{i} words"), now(), "a"))
        .collect();

    let orders: HashSet<Vec<String>> = (0..20)
        .map(|_| {
            ids(&ranker.rank(
                &ActorProfile::default(),
                &candidates,
                RankingMode::Serendipity,
            ))
        })
        .collect();
    assert!(orders.len() > 1);
}

#[test]
fn missing_interests_return_exact_input_order() {
    let (_, candidates) = scenario();
    let ranked = ids(&Ranker::default().rank(
        &ActorProfile::default(),
        &candidates,
        RankingMode::Interests,
    ));
    assert_eq!(ranked, vec!["cats", "dogs", "market"]);
}

#[test]
fn small_cluster_input_is_all() {
    let (_, candidates) = scenario();
    let bubbles = Clusterer::default().cluster(&candidates[..2]);
    assert_eq!(bubbles.labels(), vec!["all"]);
}

proptest! {
    #[test]
    fn ranking_never_fabricates_or_duplicates(
        bodies in prop::collection::vec(body_strategy(), 0..12),
        ages in prop::collection::vec(0i64..200, 12),
        tags in prop::collection::vec(prop::sample::select(WORDS), 0..3),
        history in prop::collection::vec(body_strategy(), 0..3),
        seed in any::<u64>(),
    ) {
        let candidates = documents(&bodies, &ages);
        let profile = ActorProfile::new(tags.iter().map(ToString::to_string).collect())
            .with_history(documents(&history, &ages));
        let ranker = Ranker::default();
        let input: HashSet<&str> = candidates.iter().map(|d| d.id.as_str()).collect();

        for mode in RankingMode::ALL {
            let mut rng = StdRng::seed_from_u64(seed);
            let ranked = ranker.rank_with(&profile, &candidates, mode, &mut rng, now());
            let seen: HashSet<&str> = ranked.iter().map(|d| d.id.as_str()).collect();

            prop_assert_eq!(seen.len(), ranked.len());
            prop_assert!(seen.is_subset(&input));
            if mode == RankingMode::Serendipity {
                prop_assert_eq!(ranked.len(), candidates.len());
            }
        }
    }

    #[test]
    fn clustering_is_exhaustive(
        bodies in prop::collection::vec(body_strategy(), 0..12),
        ages in prop::collection::vec(0i64..200, 12),
    ) {
        let candidates = documents(&bodies, &ages);
        let bubbles = Clusterer::default().cluster(&candidates);

        prop_assert_eq!(bubbles.total_documents(), candidates.len());
        let seen: HashSet<&str> = bubbles
            .iter()
            .flat_map(|b| b.documents.iter().map(|d| d.id.as_str()))
            .collect();
        prop_assert_eq!(seen.len(), candidates.len());
        if candidates.len() < 3 {
            prop_assert_eq!(bubbles.labels(), vec!["all"]);
        }
    }

    #[test]
    fn fresher_never_ranks_below_older(
        body in body_strategy(),
        older in 1i64..500,
        gap in 1i64..100,
    ) {
        let ranker = Ranker::default();
        let profile = ActorProfile::new(vec!["rust".into()]);
        let candidates = vec![
            Document::new("old", body.clone(), now() - Duration::hours(older + gap), "a"),
            Document::new("new", body, now() - Duration::hours(older), "a"),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let ranked = ids(&ranker.rank_with(
            &profile,
            &candidates,
            RankingMode::Balanced,
            &mut rng,
            now(),
        ));

        if let Some(old_pos) = ranked.iter().position(|id| id == "old") {
            let new_pos = ranked.iter().position(|id| id == "new");
            prop_assert!(new_pos.is_some_and(|p| p < old_pos));
        }
    }
}
