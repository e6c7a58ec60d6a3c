//! Implementation of `reel suggest`.

use std::process::ExitCode;

use crate::cli::{args::SuggestCommand, context::CommandContext, output::print_suggestions};

/// Prints autocomplete suggestions for a partial query.
pub fn run(ctx: &mut CommandContext, cmd: &SuggestCommand) -> ExitCode {
    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let hits = match engine.suggest(&cmd.text) {
        Ok(hits) => hits,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.output.json {
        match serde_json::to_string_pretty(&hits) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize suggestions: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_suggestions(&hits);
    }

    ExitCode::SUCCESS
}
