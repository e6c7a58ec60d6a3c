//! Configuration system for reel.
//!
//! reel uses a TOML configuration file named `reel.toml`, looked up in the
//! working directory. All settings are optional; a missing file yields the
//! default configuration. The index directory is ordinary configuration
//! passed into the store, never process-global state: when it is not set
//! here, `reel-index` resolves a platform-standard application-data
//! location instead.

#![warn(missing_docs)]

mod error;
mod parse;

use std::path::{Path, PathBuf};

pub use error::ConfigError;
pub use parse::{RawConfig, RawSearchSettings, parse_config_file, parse_config_str};

/// Name of the configuration file.
pub const CONFIG_FILENAME: &str = "reel.toml";

/// Default stemmer language.
pub const DEFAULT_STEMMER: &str = "english";

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default cap on autocomplete suggestions.
pub const DEFAULT_SUGGEST_LIMIT: usize = 20;

/// Fully resolved configuration with defaults applied.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for the on-disk index, if set explicitly.
    pub index_directory: Option<PathBuf>,
    /// Search-related settings.
    pub search: SearchSettings,
}

/// Search-related settings.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Stemming language ("none" disables stemming).
    pub stemmer: String,
    /// Default page size for search results.
    pub page_size: usize,
    /// Maximum number of autocomplete suggestions.
    pub suggest_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            stemmer: DEFAULT_STEMMER.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_directory: None,
            search: SearchSettings::default(),
        }
    }
}

impl Config {
    /// Loads configuration from `reel.toml` in the given directory.
    ///
    /// Returns the default configuration if no file exists there.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let path = cwd.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Loads configuration from a specific file path.
    ///
    /// A relative `index_directory` is resolved against the directory
    /// containing the file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = parse_config_file(path)?;
        let base = path.parent();
        Ok(Self::from_raw(raw, base))
    }

    /// Applies defaults to a raw configuration.
    fn from_raw(raw: RawConfig, base: Option<&Path>) -> Self {
        let index_directory = raw.index_directory.map(|dir| {
            let dir = PathBuf::from(dir);
            match base {
                Some(base) if dir.is_relative() => base.join(dir),
                _ => dir,
            }
        });

        let search = raw.search.unwrap_or_default();
        Self {
            index_directory,
            search: SearchSettings {
                stemmer: search.stemmer.unwrap_or_else(|| DEFAULT_STEMMER.to_string()),
                page_size: search.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
                suggest_limit: search.suggest_limit.unwrap_or(DEFAULT_SUGGEST_LIMIT),
            },
        }
    }
}
