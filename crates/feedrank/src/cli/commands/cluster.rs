//! Implementation of `feedrank cluster`.

use std::process::ExitCode;

use feedrank_engine::{ClusterConfig, Clusterer};

use super::shared::load_input;
use crate::cli::{
    args::ClusterCommand,
    context::CommandContext,
    output::{dim, documents_table, header, print_json, subheader},
};

/// Groups the input candidates into topic bubbles.
pub fn run(ctx: &CommandContext, cmd: &ClusterCommand) -> ExitCode {
    let input = match load_input(&cmd.input) {
        Ok(input) => input,
        Err(code) => return code,
    };

    let clusterer = Clusterer::new(ClusterConfig::from(&ctx.config.cluster));
    let bubbles = clusterer.cluster(&input.candidates);

    if cmd.output.json {
        return print_json(&bubbles);
    }

    println!(
        "{}",
        subheader(&format!(
            "{} documents in {} bubbles",
            bubbles.total_documents(),
            bubbles.len()
        ))
    );
    for bubble in bubbles.iter() {
        println!();
        println!(
            "{}",
            header(&format!("{} ({})", bubble.label, bubble.documents.len()))
        );
        if bubble.documents.is_empty() {
            println!("{}", dim("(empty)"));
        } else {
            println!("{}", documents_table(&bubble.documents, 1));
        }
    }

    ExitCode::SUCCESS
}
