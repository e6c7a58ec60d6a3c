//! Shared context for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use reel_config::Config;
use reel_index::SearchEngine;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config file found).
    pub config: Config,
    /// Index directory override from the command line.
    index_dir: Option<PathBuf>,
    /// Engine opened lazily on first use.
    engine: Option<SearchEngine>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(index_dir: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = match env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                eprintln!("error: could not determine current directory: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        let config = match Config::load(&cwd) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        Ok(Self {
            cwd,
            config,
            index_dir,
            engine: None,
        })
    }

    /// Returns the effective index directory, if one can be determined.
    pub fn index_directory(&self) -> Option<PathBuf> {
        self.index_dir
            .clone()
            .or_else(|| reel_index::index_directory(&self.config))
    }

    /// Returns the search engine, opening the index on first use.
    pub fn engine(&mut self) -> Result<&SearchEngine, ExitCode> {
        if self.engine.is_none() {
            let opened = match &self.index_dir {
                Some(dir) => SearchEngine::open_at(
                    dir,
                    &self.config.search.stemmer,
                    self.config.search.suggest_limit,
                ),
                None => SearchEngine::open(&self.config),
            };
            match opened {
                Ok(engine) => self.engine = Some(engine),
                Err(e) => {
                    eprintln!("error: {e}");
                    return Err(ExitCode::FAILURE);
                }
            }
        }
        Ok(self.engine.as_ref().expect("engine just set"))
    }
}
