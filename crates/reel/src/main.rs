//! Command-line interface for the `reel` film search tool.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reel::cli::{args::Cli, commands, context::CommandContext};

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut ctx = match CommandContext::load(cli.index_dir) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}
