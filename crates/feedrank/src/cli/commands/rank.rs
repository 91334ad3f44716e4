//! Implementation of `feedrank rank`.

use std::process::ExitCode;

use chrono::Utc;
use feedrank_engine::{Document, Ranker, RankingConfig};
use serde::Serialize;

use super::shared::{load_input, rng_from_seed};
use crate::cli::{
    args::RankCommand,
    context::CommandContext,
    output::{ExplainRow, dim, documents_table, explain_table, print_json, subheader},
};

/// JSON output for `feedrank rank`.
#[derive(Serialize)]
struct JsonRankOutput<'a> {
    /// Mode used for ranking.
    mode: String,
    /// Number of candidates in the input.
    candidates: usize,
    /// Ranked documents.
    documents: Vec<&'a Document>,
    /// Per-candidate signals, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    explain: Option<Vec<ExplainRow<'a>>>,
}

/// Ranks the input candidates and prints them.
pub fn run(ctx: &CommandContext, cmd: &RankCommand) -> ExitCode {
    let input = match load_input(&cmd.input) {
        Ok(input) => input,
        Err(code) => return code,
    };

    let mode = cmd
        .mode
        .unwrap_or_else(|| ctx.default_view().ranking_mode());
    let ranker = Ranker::new(RankingConfig::from(&ctx.config.ranking));
    let now = Utc::now();
    let mut rng = rng_from_seed(cmd.seed);

    let ranked = ranker.rank_with(&input.profile, &input.candidates, mode, &mut rng, now);
    let explain = cmd.explain.then(|| {
        let scored = ranker.score(&input.profile, &input.candidates, now);
        ExplainRow::from_scores(&scored, &input.candidates)
    });

    if cmd.output.json {
        return print_json(&JsonRankOutput {
            mode: mode.to_string(),
            candidates: input.candidates.len(),
            documents: ranked,
            explain,
        });
    }

    println!(
        "{}",
        subheader(&format!(
            "Ranked {} of {} candidates ({mode}: {})",
            ranked.len(),
            input.candidates.len(),
            mode.description()
        ))
    );
    if ranked.is_empty() {
        println!("{}", dim("No documents passed the ranking threshold."));
    } else {
        println!("{}", documents_table(&ranked, 1));
    }

    if let Some(rows) = explain {
        println!();
        println!("{}", subheader("Signals (input order):"));
        println!("{}", explain_table(&rows));
    }

    ExitCode::SUCCESS
}
