//! Implementation of `reel ingest`.

use std::process::ExitCode;

use reel_index::read_films_json;

use crate::cli::{args::IngestCommand, context::CommandContext};

/// Reads a JSON catalog and indexes its films.
pub fn run(ctx: &mut CommandContext, cmd: &IngestCommand) -> ExitCode {
    let records = match read_films_json(&cmd.file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    if cmd.clear {
        if let Err(e) = engine.clear() {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    match engine.populate(records) {
        Ok(count) => {
            println!("Indexed {count} films ({} total).", engine.num_docs());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
