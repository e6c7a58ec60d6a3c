//! Index writer: the single owner of index mutation.
//!
//! The writer buffers additions and deletions and makes them visible
//! atomically on [`IndexWriter::commit`]. At most one writer mutates an
//! index at a time; [`crate::SearchEngine`] enforces this by keeping its
//! one writer behind a mutex. Searches never go through the writer — they
//! read independent snapshots from the store.

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, info};

use crate::{
    analyzer::Analyzer,
    document::FilmRecord,
    error::IndexError,
    store::{Snapshot, Store, StoredFilm},
};

/// Writes film documents to the index store.
pub struct IndexWriter {
    /// The store this writer mutates.
    store: Arc<Store>,
    /// Analyzer shared (by configuration) with the search side.
    analyzer: Analyzer,
    /// Documents staged since the last commit.
    buffer: Vec<FilmRecord>,
    /// Whether the next commit starts from an empty index.
    clear_pending: bool,
}

impl IndexWriter {
    /// Creates a writer over the given store.
    pub fn new(store: Arc<Store>, analyzer: Analyzer) -> Self {
        Self {
            store,
            analyzer,
            buffer: Vec::new(),
            clear_pending: false,
        }
    }

    /// Stages a film for addition.
    ///
    /// The document is buffered and not visible to search until
    /// [`commit`](Self::commit). Fails with a validation error when the
    /// film's id is empty.
    pub fn add_film(&mut self, film: FilmRecord) -> Result<(), IndexError> {
        if film.id.trim().is_empty() {
            return Err(IndexError::validation("film id must not be empty"));
        }
        self.buffer.push(film);
        Ok(())
    }

    /// Stages multiple films for addition.
    pub fn add_films(
        &mut self,
        films: impl IntoIterator<Item = FilmRecord>,
    ) -> Result<usize, IndexError> {
        let mut added = 0;
        for film in films {
            self.add_film(film)?;
            added += 1;
        }
        Ok(added)
    }

    /// Stages deletion of every document in the index.
    ///
    /// Drops committed documents and anything buffered before this call;
    /// films added afterwards survive into the same commit.
    pub fn delete_all(&mut self) {
        self.buffer.clear();
        self.clear_pending = true;
    }

    /// Discards all staged changes without touching committed state.
    pub fn rollback(&mut self) {
        self.buffer.clear();
        self.clear_pending = false;
    }

    /// Atomically makes all staged changes visible to subsequent snapshots.
    ///
    /// On failure the prior committed state remains authoritative and the
    /// staged changes stay buffered, so the caller may retry.
    pub fn commit(&mut self) -> Result<(), IndexError> {
        let mut next = if self.clear_pending {
            Snapshot::default()
        } else {
            Snapshot::clone(&self.store.snapshot())
        };

        for film in &self.buffer {
            let (stored, term_stats) = self.index_film(film);
            next.append(stored, term_stats);
        }

        let added = self.buffer.len();
        let cleared = self.clear_pending;
        self.store.commit_snapshot(next)?;

        self.buffer.clear();
        self.clear_pending = false;
        info!(added, cleared, "committed index changes");
        Ok(())
    }

    /// Returns the number of documents visible in the committed index.
    pub fn num_docs(&self) -> usize {
        self.store.snapshot().len()
    }

    /// Tokenizes a film and produces its stored form plus per-term stats.
    fn index_film(&self, film: &FilmRecord) -> (StoredFilm, HashMap<String, (u32, u32)>) {
        let tokens = self.analyzer.tokenize(&film.combined_text());

        let mut term_stats: HashMap<String, (u32, u32)> = HashMap::new();
        for (position, term) in tokens.iter().enumerate() {
            let entry = term_stats
                .entry(term.clone())
                .or_insert((0, position as u32));
            entry.0 += 1;
        }
        debug!(id = %film.id, terms = term_stats.len(), "indexed film");

        let stored = StoredFilm {
            id: film.id.clone(),
            title: film.title.clone(),
            overview: film.overview.clone(),
            tagline: film.tagline.clone(),
            runtime: film.runtime,
            revenue: film.revenue,
            vote_average: film.vote_average,
            release_key: film.release_key(),
            combined_len: tokens.len() as u32,
        };

        (stored, term_stats)
    }
}
