//! Implementation of `feedrank feed`.

use std::process::ExitCode;

use chrono::Utc;
use feedrank_engine::{FeedAssembler, FeedPage, FeedView};

use super::shared::{load_input, rng_from_seed};
use crate::cli::{
    args::FeedCommand,
    context::CommandContext,
    output::{dim, documents_table, header, print_json, subheader},
};

/// Assembles and prints one feed page.
pub fn run(ctx: &CommandContext, cmd: &FeedCommand) -> ExitCode {
    let input = match load_input(&cmd.input) {
        Ok(input) => input,
        Err(code) => return code,
    };

    let view = FeedView::from_param(cmd.mode.as_deref(), ctx.default_view());
    let assembler = FeedAssembler::from_config(&ctx.config);
    let mut rng = rng_from_seed(cmd.seed);
    let page = assembler.assemble_with(
        &input.profile,
        input.candidates,
        view,
        cmd.page,
        &mut rng,
        Utc::now(),
    );

    if cmd.output.json {
        return print_json(&page);
    }

    print_page(&page);
    ExitCode::SUCCESS
}

/// Prints a feed page as tables.
fn print_page(page: &FeedPage) {
    println!(
        "{}",
        subheader(&format!(
            "{} feed: page {} of {} ({} documents)",
            page.mode,
            page.page,
            page.total_pages.max(1),
            page.total
        ))
    );

    let first_position = (page.page - 1)
        .saturating_mul(page.per_page)
        .saturating_add(1);
    if page.documents.is_empty() {
        println!("{}", dim("Nothing to show on this page."));
    } else if let Some(bubbles) = &page.bubbles {
        for bubble in bubbles {
            println!();
            println!(
                "{}",
                header(&format!("{} ({})", bubble.label, bubble.documents.len()))
            );
            if !bubble.documents.is_empty() {
                let docs: Vec<_> = bubble.documents.iter().collect();
                println!("{}", documents_table(&docs, 1));
            }
        }
    } else {
        let docs: Vec<_> = page.documents.iter().collect();
        println!("{}", documents_table(&docs, first_position));
    }

    let mut nav = Vec::new();
    if page.has_prev {
        nav.push(format!("--page {} for newer", page.page - 1));
    }
    if page.has_next {
        nav.push(format!("--page {} for more", page.page + 1));
    }
    if !nav.is_empty() {
        println!("{}", dim(&nav.join(", ")));
    }
}
