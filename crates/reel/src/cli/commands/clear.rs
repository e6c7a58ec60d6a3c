//! Implementation of `reel clear`.

use std::process::ExitCode;

use crate::cli::context::CommandContext;

/// Removes every film from the index.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    match engine.clear() {
        Ok(()) => {
            println!("Index cleared.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
