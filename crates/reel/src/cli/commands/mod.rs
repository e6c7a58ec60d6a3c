//! Command implementations and dispatch.

pub mod clear;
pub mod ingest;
pub mod search;
pub mod status;
pub mod suggest;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Ingest(cmd) => ingest::run(ctx, &cmd),
        Commands::Clear => clear::run(ctx),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Suggest(cmd) => suggest::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
    }
}
