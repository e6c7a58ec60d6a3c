//! Clap argument definitions for the `reel` CLI.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Parses a `YYYY-MM-DD` date argument.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("expected YYYY-MM-DD, got {s:?}"))
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Film catalog search - full-text queries with structured filters")]
pub struct Cli {
    /// Index directory (overrides configuration)
    #[arg(long, global = true, value_name = "DIR")]
    pub index_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `reel ingest`.
#[derive(Args, Debug, Clone)]
pub struct IngestCommand {
    /// JSON catalog file to ingest
    pub file: PathBuf,

    /// Clear the index before ingesting
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for `reel search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search text; omit to browse the whole catalog with filters only
    pub query: Option<String>,

    /// Zero-based page to return
    #[arg(short = 'p', long, default_value = "0")]
    pub page: usize,

    /// Results per page [default: from configuration]
    #[arg(short = 'n', long)]
    pub page_size: Option<usize>,

    /// Minimum runtime in minutes
    #[arg(long, value_name = "MINUTES")]
    pub runtime_min: Option<i32>,

    /// Maximum runtime in minutes
    #[arg(long, value_name = "MINUTES")]
    pub runtime_max: Option<i32>,

    /// Minimum average vote (0-10)
    #[arg(long, value_name = "SCORE")]
    pub vote_min: Option<f64>,

    /// Earliest release date (YYYY-MM-DD); requires --date-to
    #[arg(long, value_name = "DATE", value_parser = parse_date, requires = "date_to")]
    pub date_from: Option<NaiveDate>,

    /// Latest release date (YYYY-MM-DD); requires --date-from
    #[arg(long, value_name = "DATE", value_parser = parse_date, requires = "date_from")]
    pub date_to: Option<NaiveDate>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `reel suggest`.
#[derive(Args, Debug, Clone)]
pub struct SuggestCommand {
    /// Partial query text
    pub text: String,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Supported `reel` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Index a JSON film catalog
    Ingest(IngestCommand),

    /// Remove every film from the index
    Clear,

    /// Search the index
    Search(SearchCommand),

    /// Autocomplete suggestions for a partial query
    Suggest(SuggestCommand),

    /// Show index location and document count
    Status,
}
