//! Search execution for the reel index.
//!
//! A search acquires the latest committed snapshot, evaluates the compiled
//! boolean query against it, ranks survivors by a term-frequency relevance
//! score, and returns one page plus the total match count. Any number of
//! searches run concurrently on independent snapshots; none of them ever
//! touches the writer.

use std::{cmp::Ordering, sync::Arc};

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    analyzer::Analyzer,
    document::decode_date,
    error::IndexError,
    query::{CompiledQuery, FilmQuery, QueryBuilder},
    store::{Posting, Snapshot, Store, StoredFilm},
};

/// Uniform score for documents matched by a match-everything query, where
/// there is no term signal to rank by.
const MATCH_ALL_SCORE: f64 = 1.0;

/// Maximum earliness bonus added per query term.
const MAX_POSITION_BONUS: f64 = 0.5;

/// A film returned from a search, annotated with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct FilmHit {
    /// Unique film identifier.
    pub id: String,
    /// Film title.
    pub title: String,
    /// Plot overview.
    pub overview: String,
    /// Marketing tagline.
    pub tagline: String,
    /// Runtime in minutes.
    pub runtime: i32,
    /// Gross revenue in currency units.
    pub revenue: i64,
    /// Average vote on a 0-10 scale.
    pub vote_average: f64,
    /// Release date, when one was stored.
    pub release_date: Option<NaiveDate>,
    /// Relevance score (0.0 for unscored suggest results).
    pub score: f64,
}

/// One page of ranked search results.
#[derive(Debug, Clone, Serialize)]
pub struct ResultPage {
    /// Number of documents matching all clauses across the whole index,
    /// independent of pagination.
    pub total: usize,
    /// Zero-based page index this slice corresponds to.
    pub page: usize,
    /// Requested page size.
    pub page_size: usize,
    /// The ordered slice of results for this page. May be shorter than
    /// `page_size` (or empty) when the page runs past the end.
    pub films: Vec<FilmHit>,
}

/// Searches the index for matching films.
pub struct Searcher {
    /// The store snapshots are acquired from.
    store: Arc<Store>,
    /// Query builder holding the shared analyzer configuration.
    query_builder: QueryBuilder,
}

impl Searcher {
    /// Creates a searcher over the given store.
    ///
    /// The analyzer must be configured identically to the one the index
    /// was written with.
    pub fn new(store: Arc<Store>, analyzer: Analyzer) -> Self {
        Self {
            store,
            query_builder: QueryBuilder::new(analyzer),
        }
    }

    /// Executes a search and returns the requested page of ranked results.
    ///
    /// An out-of-range page yields an empty page, not an error; a search
    /// against an empty index returns `total == 0`. Invalid pagination
    /// fails with a validation error.
    pub fn search(&self, query: &FilmQuery) -> Result<ResultPage, IndexError> {
        let compiled = self.query_builder.compile(query)?;
        let snapshot = self.store.snapshot();

        let mut matches = collect_matches(&snapshot, &compiled);

        // Stable, reproducible order: score descending, then insertion
        // order ascending so that equal scores paginate deterministically.
        matches.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let total = matches.len();
        let start = query.page.saturating_mul(query.page_size);
        let films = matches
            .into_iter()
            .skip(start)
            .take(query.page_size)
            .filter_map(|(ord, score)| snapshot.film(ord).map(|film| film_hit(film, score)))
            .collect();

        Ok(ResultPage {
            total,
            page: query.page,
            page_size: query.page_size,
            films,
        })
    }

    /// Returns up to `limit` films whose combined text contains every term
    /// of the input, unscored, in insertion order.
    ///
    /// The autocomplete variant of [`search`](Self::search): same
    /// conjunctive matching, fixed cap, no pagination. Empty input yields
    /// no suggestions rather than the whole catalog.
    pub fn suggest(&self, text: &str, limit: usize) -> Result<Vec<FilmHit>, IndexError> {
        let compiled = self
            .query_builder
            .compile(&FilmQuery::new(text, 0, limit.max(1)))?;
        if compiled.is_match_all() {
            return Ok(Vec::new());
        }

        let snapshot = self.store.snapshot();
        let hits = collect_matches(&snapshot, &compiled)
            .into_iter()
            .take(limit)
            .filter_map(|(ord, _)| snapshot.film(ord).map(|film| film_hit(film, 0.0)))
            .collect();
        Ok(hits)
    }

    /// Returns the number of documents in the committed index.
    pub fn num_docs(&self) -> usize {
        self.store.snapshot().len()
    }
}

/// Evaluates the compiled query, returning `(ord, score)` per match in
/// insertion order.
fn collect_matches(snapshot: &Snapshot, compiled: &CompiledQuery) -> Vec<(u32, f64)> {
    if compiled.is_match_all() {
        return (0..snapshot.len() as u32)
            .filter(|&ord| {
                snapshot
                    .film(ord)
                    .is_some_and(|film| compiled.ranges_match(film))
            })
            .map(|ord| (ord, MATCH_ALL_SCORE))
            .collect();
    }

    // Duplicate query terms add nothing to the conjunction and would
    // double-count in scoring.
    let mut terms: Vec<&str> = compiled.terms.iter().map(String::as_str).collect();
    terms.sort_unstable();
    terms.dedup();

    // Every term must have a postings list; a missing term empties the
    // whole conjunction.
    let mut lists: Vec<&[Posting]> = Vec::with_capacity(terms.len());
    for term in &terms {
        match snapshot.postings(term) {
            Some(postings) => lists.push(postings),
            None => return Vec::new(),
        }
    }

    // Drive the intersection from the rarest term
    lists.sort_by_key(|postings| postings.len());
    let (driver, rest) = lists.split_first().expect("at least one term");

    let mut matches = Vec::new();
    'candidates: for posting in *driver {
        let ord = posting.ord;

        let mut score = 0.0;
        for list in rest {
            match list.binary_search_by_key(&ord, |p| p.ord) {
                Ok(i) => score += term_score(&list[i], snapshot),
                Err(_) => continue 'candidates,
            }
        }
        score += term_score(posting, snapshot);

        let Some(film) = snapshot.film(ord) else {
            continue;
        };
        if compiled.ranges_match(film) {
            matches.push((ord, score));
        }
    }

    matches
}

/// Per-term relevance contribution: term frequency relative to the
/// combined-text length, plus a bonus for terms occurring early in it.
fn term_score(posting: &Posting, snapshot: &Snapshot) -> f64 {
    let len = snapshot
        .film(posting.ord)
        .map_or(0, |film| film.combined_len);
    if len == 0 {
        return 0.0;
    }
    let len = f64::from(len);
    let tf = f64::from(posting.term_freq) / len;
    let earliness = MAX_POSITION_BONUS * (1.0 - f64::from(posting.first_position) / len);
    tf + earliness
}

/// Converts a stored film into an annotated search hit.
fn film_hit(film: &StoredFilm, score: f64) -> FilmHit {
    FilmHit {
        id: film.id.clone(),
        title: film.title.clone(),
        overview: film.overview.clone(),
        tagline: film.tagline.clone(),
        runtime: film.runtime,
        revenue: film.revenue,
        vote_average: film.vote_average,
        release_date: film.release_key.as_deref().and_then(decode_date),
        score,
    }
}
