//! Implementation of `reel status`.

use std::process::ExitCode;

use crate::cli::context::CommandContext;

/// Shows the index location and document count.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let Some(dir) = ctx.index_directory() else {
        eprintln!("error: no index directory configured and no platform data directory");
        return ExitCode::FAILURE;
    };
    println!("Index: {}", dir.display());

    if let Some(config_dir) = &ctx.config.index_directory {
        println!("Configured in reel.toml: {}", config_dir.display());
    }
    println!("Stemmer: {}", ctx.config.search.stemmer);

    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    println!("Films: {}", engine.num_docs());

    ExitCode::SUCCESS
}
