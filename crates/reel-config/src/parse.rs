//! Configuration file parsing.
//!
//! Parses `reel.toml` files into intermediate `RawConfig` structures that
//! preserve the optional nature of all fields before defaults are applied.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional; defaults are applied when converting into
/// [`crate::Config`]. This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Directory for the on-disk index. Relative paths are resolved against
    /// the directory containing the config file.
    pub index_directory: Option<String>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Stemming language ("none" disables stemming).
    pub stemmer: Option<String>,
    /// Default page size for search results.
    pub page_size: Option<usize>,
    /// Maximum number of autocomplete suggestions.
    pub suggest_limit: Option<usize>,
}

/// Parses a TOML string into a raw configuration.
///
/// The `path` is used only for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses a configuration file.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&contents, path)
}
