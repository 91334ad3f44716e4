//! Command implementations and dispatch.

pub mod cluster;
pub mod config;
pub mod feed;
pub mod init;
pub mod rank;
mod shared;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Rank(cmd) => rank::run(ctx, &cmd),
        Commands::Feed(cmd) => feed::run(ctx, &cmd),
        Commands::Cluster(cmd) => cluster::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
