//! The search engine facade.
//!
//! [`SearchEngine`] owns the single long-lived [`IndexWriter`] for an index
//! directory and hands searches to a [`Searcher`] over the same store.
//! Writes serialize through a mutex; searches never take it, they read the
//! latest committed snapshot.

use std::{path::Path, sync::Arc};

use parking_lot::Mutex;
use reel_config::Config;
use tracing::info;

use crate::{
    analyzer::Analyzer,
    document::{FilmRecord, RawFilmRecord},
    error::IndexError,
    location,
    query::FilmQuery,
    search::{FilmHit, ResultPage, Searcher},
    store::Store,
    writer::IndexWriter,
};

/// A film search engine over one index directory.
pub struct SearchEngine {
    /// The sole writer for this index. All mutation goes through it.
    writer: Mutex<IndexWriter>,
    /// Read side, sharing the writer's store.
    searcher: Searcher,
    /// Result cap applied to suggestions.
    suggest_limit: usize,
}

impl SearchEngine {
    /// Opens the engine described by the configuration.
    ///
    /// Resolves the index directory ([`location::index_directory`]), creates
    /// it if missing, and loads any previously committed segment.
    pub fn open(config: &Config) -> Result<Self, IndexError> {
        let dir = location::index_directory(config).ok_or_else(|| IndexError::OpenIndex {
            path: Path::new("").to_path_buf(),
            message: "no index directory configured and no platform data directory".to_string(),
        })?;
        Self::open_at(&dir, &config.search.stemmer, config.search.suggest_limit)
    }

    /// Opens the engine at an explicit directory, bypassing location
    /// resolution. Used for directory overrides and tests.
    pub fn open_at(dir: &Path, stemmer: &str, suggest_limit: usize) -> Result<Self, IndexError> {
        let analyzer = Analyzer::from_name(stemmer)?;
        let store = Arc::new(Store::open(dir)?);
        info!(dir = %dir.display(), docs = store.snapshot().len(), "opened index");

        Ok(Self {
            writer: Mutex::new(IndexWriter::new(store.clone(), analyzer)),
            searcher: Searcher::new(store, analyzer),
            suggest_limit,
        })
    }

    /// Indexes a batch of raw records and commits them in one step.
    ///
    /// Field parsing is lenient (malformed numerics become defaults, bad
    /// dates become absent) but a record without an id fails the whole
    /// batch before anything is committed. Returns the number of films
    /// indexed. Existing documents are kept; use [`clear`](Self::clear)
    /// first for a full rebuild.
    pub fn populate(
        &self,
        records: impl IntoIterator<Item = RawFilmRecord>,
    ) -> Result<usize, IndexError> {
        let mut writer = self.writer.lock();
        let mut count = 0;
        for raw in records {
            if let Err(e) = writer.add_film(FilmRecord::from_raw(raw)) {
                // Drop the partial batch so it cannot ride along with a
                // later commit.
                writer.rollback();
                return Err(e);
            }
            count += 1;
        }
        writer.commit()?;
        info!(films = count, "populated index");
        Ok(count)
    }

    /// Removes every document from the index and commits the empty state.
    pub fn clear(&self) -> Result<(), IndexError> {
        let mut writer = self.writer.lock();
        writer.delete_all();
        writer.commit()?;
        info!("cleared index");
        Ok(())
    }

    /// Executes a search against the latest committed state.
    pub fn search(&self, query: &FilmQuery) -> Result<ResultPage, IndexError> {
        self.searcher.search(query)
    }

    /// Returns autocomplete suggestions for a partial query.
    pub fn suggest(&self, text: &str) -> Result<Vec<FilmHit>, IndexError> {
        self.searcher.suggest(text, self.suggest_limit)
    }

    /// Number of committed documents.
    pub fn num_docs(&self) -> usize {
        self.searcher.num_docs()
    }
}

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;

    fn raw(id: &str, title: &str, runtime: &str, date: &str) -> RawFilmRecord {
        RawFilmRecord {
            id: id.to_string(),
            title: title.to_string(),
            runtime: runtime.to_string(),
            release_date: date.to_string(),
            ..Default::default()
        }
    }

    fn open(temp: &TempDir) -> SearchEngine {
        SearchEngine::open_at(temp.path(), "english", 20).unwrap()
    }

    #[test]
    fn populate_then_search() {
        let temp = TempDir::new().unwrap();
        let engine = open(&temp);

        let count = engine
            .populate(vec![
                raw("1", "Space Odyssey", "149", "1968-04-02"),
                raw("2", "Space Jam", "87", "1996-11-15"),
            ])
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(engine.num_docs(), 2);

        let page = engine.search(&FilmQuery::new("space", 0, 10)).unwrap();
        assert_eq!(page.total, 2);
    }

    #[test]
    fn populate_extends_existing_index() {
        let temp = TempDir::new().unwrap();
        let engine = open(&temp);

        engine
            .populate(vec![raw("1", "Space Odyssey", "149", "1968-04-02")])
            .unwrap();
        engine
            .populate(vec![raw("2", "Space Jam", "87", "1996-11-15")])
            .unwrap();

        assert_eq!(engine.num_docs(), 2);
    }

    #[test]
    fn clear_empties_the_index() {
        let temp = TempDir::new().unwrap();
        let engine = open(&temp);

        engine
            .populate(vec![raw("1", "Space Odyssey", "149", "1968-04-02")])
            .unwrap();
        engine.clear().unwrap();

        assert_eq!(engine.num_docs(), 0);
        let page = engine.search(&FilmQuery::browse(0, 10)).unwrap();
        assert_eq!(page.total, 0);
    }

    #[test]
    fn populate_rejects_record_without_id() {
        let temp = TempDir::new().unwrap();
        let engine = open(&temp);

        let err = engine
            .populate(vec![raw("", "Untitled", "90", "2000-01-01")])
            .unwrap_err();
        assert!(matches!(err, IndexError::Validation(_)));
        assert_eq!(engine.num_docs(), 0);
    }

    #[test]
    fn failed_populate_leaves_no_residue_for_later_commits() {
        let temp = TempDir::new().unwrap();
        let engine = open(&temp);

        // The valid record precedes the invalid one in the batch
        let err = engine
            .populate(vec![
                raw("1", "Space Odyssey", "149", "1968-04-02"),
                raw("", "Untitled", "90", "2000-01-01"),
            ])
            .unwrap_err();
        assert!(matches!(err, IndexError::Validation(_)));
        assert_eq!(engine.num_docs(), 0);

        engine
            .populate(vec![raw("2", "Space Jam", "87", "1996-11-15")])
            .unwrap();

        // Only the second batch is visible
        assert_eq!(engine.num_docs(), 1);
        let page = engine.search(&FilmQuery::new("odyssey", 0, 10)).unwrap();
        assert_eq!(page.total, 0);
    }

    #[test]
    fn state_survives_reopen() {
        let temp = TempDir::new().unwrap();
        {
            let engine = open(&temp);
            engine
                .populate(vec![raw("1", "Space Odyssey", "149", "1968-04-02")])
                .unwrap();
        }

        let engine = open(&temp);
        assert_eq!(engine.num_docs(), 1);
        let page = engine.search(&FilmQuery::new("odyssey", 0, 10)).unwrap();
        assert_eq!(page.total, 1);
    }

    #[test]
    fn suggest_uses_configured_limit() {
        let temp = TempDir::new().unwrap();
        let engine = SearchEngine::open_at(temp.path(), "english", 2).unwrap();

        engine
            .populate(vec![
                raw("1", "Space One", "90", "2000-01-01"),
                raw("2", "Space Two", "90", "2000-01-01"),
                raw("3", "Space Three", "90", "2000-01-01"),
            ])
            .unwrap();

        let hits = engine.suggest("space").unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn open_respects_config_index_directory() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            index_directory: Some(temp.path().join("films")),
            ..Default::default()
        };

        let engine = SearchEngine::open(&config).unwrap();
        engine
            .populate(vec![raw("1", "Space Odyssey", "149", "1968-04-02")])
            .unwrap();

        assert!(temp.path().join("films").join("segment.json").exists());
    }
}
