//! Index location resolution.
//!
//! Determines where the film index lives on disk. An explicit
//! `index_directory` in the loaded configuration always wins; without one
//! the index goes under the platform data directory for the application
//! (e.g. `~/.local/share/reel/index` on Linux).

use std::path::PathBuf;

use directories::ProjectDirs;
use reel_config::Config;

/// Subdirectory for the index inside the application data directory.
const INDEX_DIR: &str = "index";

/// Computes the index directory for the given configuration.
///
/// Returns the configured directory when one is set, otherwise the
/// platform default. `None` only when no directory is configured and the
/// platform data directory cannot be determined.
pub fn index_directory(config: &Config) -> Option<PathBuf> {
    if let Some(dir) = &config.index_directory {
        return Some(dir.clone());
    }
    default_index_directory()
}

/// Returns the platform-default index directory.
pub fn default_index_directory() -> Option<PathBuf> {
    ProjectDirs::from("", "", "reel").map(|dirs| dirs.data_dir().join(INDEX_DIR))
}
