//! Inverted-index search engine for the reel film catalog.
//!
//! This crate provides the full indexing and search infrastructure:
//! - Lenient parsing of raw catalog records into typed film documents
//! - A self-contained inverted index persisted as a single JSON segment
//! - One long-lived writer per index with atomic, all-or-nothing commits
//! - Lock-free reads over immutable snapshots of committed state
//! - Conjunctive full-text matching with structured range filters
//! - Text analysis with configurable Snowball stemming
//!
//! # Example
//!
//! ```no_run
//! use reel_index::{FilmQuery, RawFilmRecord, SearchEngine};
//!
//! // Open or create an index with English stemming
//! let engine = SearchEngine::open_at("./index".as_ref(), "english", 20).unwrap();
//!
//! // Index a film
//! engine
//!     .populate(vec![RawFilmRecord {
//!         id: "1".to_string(),
//!         title: "Space Odyssey".to_string(),
//!         overview: "A voyage beyond the infinite.".to_string(),
//!         runtime: "149".to_string(),
//!         vote_average: "8.3".to_string(),
//!         release_date: "1968-04-02".to_string(),
//!         ..Default::default()
//!     }])
//!     .unwrap();
//!
//! // Search it
//! let page = engine.search(&FilmQuery::new("space", 0, 10)).unwrap();
//! assert_eq!(page.total, 1);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod document;
mod engine;
mod error;
mod ingest;
mod location;
mod query;
mod search;
mod store;
mod writer;

pub use analyzer::{Analyzer, MAX_TOKEN_LENGTH};
pub use document::{FilmRecord, RawFilmRecord, parse_release_date};
pub use engine::SearchEngine;
pub use error::IndexError;
pub use ingest::read_films_json;
pub use location::{default_index_directory, index_directory};
pub use query::{FilmQuery, MAX_VOTE_AVERAGE};
pub use search::{FilmHit, ResultPage, Searcher};
pub use store::Store;
pub use writer::IndexWriter;
