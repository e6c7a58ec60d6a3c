//! Catalog file ingestion.
//!
//! Reads film catalogs from disk into [`RawFilmRecord`]s, the lenient
//! string-field form that indexing parses from. The catalog format is a
//! JSON array of objects; unknown keys are ignored and missing keys
//! default to empty strings, so partial exports index cleanly.

use std::{fs, path::Path};

use tracing::debug;

use crate::{document::RawFilmRecord, error::IndexError};

/// Reads a JSON catalog file into raw film records.
///
/// Fails with [`IndexError::ParseCatalog`] when the file is not a JSON
/// array of film objects. Field-level problems (bad numbers, bad dates)
/// are not errors here; they resolve to defaults during indexing.
pub fn read_films_json(path: &Path) -> Result<Vec<RawFilmRecord>, IndexError> {
    let text = fs::read_to_string(path)?;
    let records: Vec<RawFilmRecord> =
        serde_json::from_str(&text).map_err(|e| IndexError::ParseCatalog {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(path = %path.display(), films = records.len(), "read catalog");
    Ok(records)
}
