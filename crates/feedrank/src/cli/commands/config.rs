//! Implementation of `feedrank config`.

use std::process::ExitCode;

use crate::cli::{
    context::CommandContext,
    output::{TomlHighlighter, warning},
};

/// Shows effective configuration settings and any warnings about them.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    let highlighter = TomlHighlighter::for_stdout();
    print!("{}", highlighter.highlight(&config.settings_to_toml()));

    for w in config.validate() {
        eprintln!("{}", warning(&format!("warning: {w}")));
    }
    ExitCode::SUCCESS
}
