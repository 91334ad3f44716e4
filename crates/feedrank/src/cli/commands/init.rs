//! Implementation of `feedrank init`.

use std::{fs, process::ExitCode};

use feedrank_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{TomlHighlighter, subheader},
};

/// Writes a `.feedrank.toml` template, locally or in the home directory.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let in_home = global_config_path()
        .and_then(|p| p.parent().map(|home| home == ctx.cwd.as_path()))
        .unwrap_or(false);
    let use_global = cmd.global || in_home;

    let config_path = if use_global {
        let Some(path) = global_config_path() else {
            eprintln!("error: could not determine home directory");
            return ExitCode::FAILURE;
        };
        path
    } else {
        ctx.cwd.join(CONFIG_FILENAME)
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = if use_global {
        global_template()
    } else {
        local_template()
    };
    if let Err(e) = fs::write(&config_path, &template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    print!("{}", TomlHighlighter::for_stdout().highlight(&template));

    ExitCode::SUCCESS
}
