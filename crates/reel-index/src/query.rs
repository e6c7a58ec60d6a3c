//! Query model and builder.
//!
//! Translates a free-text string plus structured filter parameters into a
//! composed conjunctive query: every clause must hold for a document to
//! match. Free-text tokens are combined as an unordered conjunction of
//! terms, not a phrase — tokens may appear anywhere in the combined text,
//! in any order. (Phrase adjacency is a deliberate non-feature; switching
//! the policy would happen here, in one place.)
//!
//! All optional filters are explicit `Option`s. Absence means "no
//! constraint"; there is no sentinel value ambiguity between "no filter"
//! and "filter at the zero bound".

use chrono::NaiveDate;

use crate::{
    analyzer::Analyzer,
    document::encode_date,
    error::IndexError,
    store::StoredFilm,
};

/// Upper bound of the vote-average scale.
pub const MAX_VOTE_AVERAGE: f64 = 10.0;

/// A search request: free text, optional range filters, and pagination.
///
/// Negative pages are unrepresentable by construction (`page: usize`);
/// only `page_size == 0` needs rejecting at compile time of the query.
#[derive(Debug, Clone)]
pub struct FilmQuery {
    /// Free-text query. Empty or whitespace-only means "match everything".
    pub text: String,
    /// Zero-based page index.
    pub page: usize,
    /// Number of results per page. Must be positive.
    pub page_size: usize,
    /// Inclusive lower runtime bound, in minutes.
    pub runtime_min: Option<i32>,
    /// Inclusive upper runtime bound, in minutes.
    pub runtime_max: Option<i32>,
    /// Inclusive lower vote-average bound; the upper bound is always 10.0.
    pub vote_average_min: Option<f64>,
    /// Inclusive lower release-date bound. The date filter applies only
    /// when both bounds are present.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper release-date bound.
    pub date_to: Option<NaiveDate>,
}

impl FilmQuery {
    /// Creates a query with the given text and pagination, no filters.
    pub fn new(text: impl Into<String>, page: usize, page_size: usize) -> Self {
        Self {
            text: text.into(),
            page,
            page_size,
            runtime_min: None,
            runtime_max: None,
            vote_average_min: None,
            date_from: None,
            date_to: None,
        }
    }

    /// Creates the match-everything browse query for the full catalog.
    pub fn browse(page: usize, page_size: usize) -> Self {
        Self::new("", page, page_size)
    }

    /// Sets the inclusive runtime bounds; `None` leaves a side open.
    pub fn with_runtime(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.runtime_min = min;
        self.runtime_max = max;
        self
    }

    /// Sets the minimum vote average.
    pub fn with_vote_average_min(mut self, min: f64) -> Self {
        self.vote_average_min = Some(min);
        self
    }

    /// Sets the release-date range. Both bounds are required for the
    /// filter to apply; a single bound is not a valid partial filter.
    pub fn with_dates(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }
}

/// The composed boolean query a [`FilmQuery`] compiles to.
///
/// Logically an AND of all present clauses.
#[derive(Debug, Clone)]
pub(crate) struct CompiledQuery {
    /// Required analyzer terms; empty means "match everything".
    pub terms: Vec<String>,
    /// Inclusive runtime bounds, open-ended sides filled with extremes.
    pub runtime: Option<(i32, i32)>,
    /// Inclusive vote-average bounds.
    pub vote_average: Option<(f64, f64)>,
    /// Inclusive range over sortable `YYYYMMDD` date keys. Valid because
    /// the encoding is fixed-width and zero-padded, so lexicographic
    /// comparison matches chronological order.
    pub date_keys: Option<(String, String)>,
}

impl CompiledQuery {
    /// Whether the query has no text constraint.
    pub fn is_match_all(&self) -> bool {
        self.terms.is_empty()
    }

    /// Checks the structured range clauses against a stored film.
    ///
    /// A film with an absent release date never matches an active date
    /// filter.
    pub fn ranges_match(&self, film: &StoredFilm) -> bool {
        if let Some((min, max)) = self.runtime
            && !(min..=max).contains(&film.runtime)
        {
            return false;
        }

        if let Some((min, max)) = self.vote_average
            && !(film.vote_average >= min && film.vote_average <= max)
        {
            return false;
        }

        if let Some((from, to)) = &self.date_keys {
            match &film.release_key {
                Some(key) => {
                    if key < from || key > to {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}

/// Compiles [`FilmQuery`] requests into [`CompiledQuery`] clauses.
///
/// Owns the analyzer so query text is tokenized with exactly the same
/// pipeline the writer indexed with.
pub(crate) struct QueryBuilder {
    /// Analyzer shared (by configuration) with the writer.
    analyzer: Analyzer,
}

impl QueryBuilder {
    /// Creates a builder using the given analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    /// Validates pagination and compiles the query clauses.
    pub fn compile(&self, query: &FilmQuery) -> Result<CompiledQuery, IndexError> {
        if query.page_size == 0 {
            return Err(IndexError::validation("page_size must be positive"));
        }

        let terms = self.analyzer.tokenize(&query.text);

        let runtime = match (query.runtime_min, query.runtime_max) {
            (None, None) => None,
            (min, max) => Some((min.unwrap_or(i32::MIN), max.unwrap_or(i32::MAX))),
        };

        let vote_average = query.vote_average_min.map(|min| (min, MAX_VOTE_AVERAGE));

        // Both bounds or no date clause at all
        let date_keys = match (query.date_from, query.date_to) {
            (Some(from), Some(to)) => Some((encode_date(from), encode_date(to))),
            _ => None,
        };

        Ok(CompiledQuery {
            terms,
            runtime,
            vote_average,
            date_keys,
        })
    }
}
