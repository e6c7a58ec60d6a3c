//! Document model for the reel search index.
//!
//! A [`FilmRecord`] is the typed, per-record representation written to the
//! index. Records arrive from ingestion as [`RawFilmRecord`]s with
//! string-typed fields; conversion applies documented defaults on parse
//! failure (numeric fields become 0, dates become absent) and never fails
//! on a malformed individual field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of the sortable release-date key: fixed-width, zero-padded,
/// so lexicographic order matches chronological order.
const DATE_KEY_FORMAT: &str = "%Y%m%d";

/// Format release dates arrive in from the catalog export.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A raw tabular record consumed from ingestion, all fields string-typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFilmRecord {
    /// Unique film identifier.
    pub id: String,
    /// Film title.
    pub title: String,
    /// Plot overview.
    pub overview: String,
    /// Runtime in minutes, as text.
    pub runtime: String,
    /// Release date in `YYYY-MM-DD` form, as text.
    pub release_date: String,
    /// Marketing tagline.
    pub tagline: String,
    /// Gross revenue in currency units, as text.
    pub revenue: String,
    /// Average vote on a 0-10 scale, as text.
    pub vote_average: String,
}

/// A typed film document.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmRecord {
    /// Unique, stable identifier. Stored verbatim, never tokenized.
    pub id: String,
    /// Film title. Tokenized and stored.
    pub title: String,
    /// Plot overview. Tokenized and stored.
    pub overview: String,
    /// Marketing tagline. Tokenized and stored.
    pub tagline: String,
    /// Runtime in minutes. Stored and range-indexed.
    pub runtime: i32,
    /// Gross revenue in currency units. Stored only, not queried.
    pub revenue: i64,
    /// Average vote on a 0-10 scale. Stored and range-indexed.
    pub vote_average: f64,
    /// Release date. Absent dates never match an active date filter.
    pub release_date: Option<NaiveDate>,
}

impl FilmRecord {
    /// Converts a raw ingestion record into a typed document.
    ///
    /// Malformed numeric fields default to 0, malformed dates to absent;
    /// field-level parse failures are not errors and ingestion continues.
    pub fn from_raw(raw: RawFilmRecord) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            overview: raw.overview,
            tagline: raw.tagline,
            runtime: raw.runtime.trim().parse().unwrap_or(0),
            revenue: raw.revenue.trim().parse().unwrap_or(0),
            vote_average: raw.vote_average.trim().parse().unwrap_or(0.0),
            release_date: parse_release_date(&raw.release_date),
        }
    }

    /// The derived default search field: title, tagline, and overview
    /// concatenated. Regenerated from the source fields at write time,
    /// never independently settable and never stored.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.title, self.tagline, self.overview)
    }

    /// The sortable `YYYYMMDD` key for the release date, if present.
    pub fn release_key(&self) -> Option<String> {
        self.release_date.map(encode_date)
    }
}

/// Encodes a date as its fixed-width sortable key.
pub fn encode_date(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Decodes a sortable key back into a date.
///
/// Returns `None` for malformed keys; stored keys are always produced by
/// [`encode_date`], so this only triggers on hand-edited segment files.
pub fn decode_date(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Parses a `YYYY-MM-DD` release date, mapping failures to absent.
pub fn parse_release_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_INPUT_FORMAT).ok()
}
