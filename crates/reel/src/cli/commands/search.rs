//! Implementation of `reel search`.

use std::process::ExitCode;

use reel_index::FilmQuery;

use crate::cli::{args::SearchCommand, context::CommandContext, output::print_result_page};

/// Searches the index and prints one page of ranked results.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let page_size = cmd.page_size.unwrap_or(ctx.config.search.page_size);
    let text = cmd.query.as_deref().unwrap_or("");

    let query = FilmQuery::new(text, cmd.page, page_size)
        .with_runtime(cmd.runtime_min, cmd.runtime_max)
        .with_dates(cmd.date_from, cmd.date_to);
    let query = match cmd.vote_min {
        Some(min) => query.with_vote_average_min(min),
        None => query,
    };

    let engine = match ctx.engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let page = match engine.search(&query) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.output.json {
        match serde_json::to_string_pretty(&page) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize results: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_result_page(&page);
    }

    ExitCode::SUCCESS
}
