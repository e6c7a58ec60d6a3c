//! reel: film catalog search
//!
//! A self-contained search engine for film catalogs. reel ingests JSON
//! exports of film metadata into a local inverted index and answers
//! ranked full-text queries combined with structured filters on runtime,
//! vote average, and release date, paginated for terminal use.

#![warn(missing_docs)]

pub mod cli;
