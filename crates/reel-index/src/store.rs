//! Durable index store and read snapshots.
//!
//! The store owns a single on-disk segment file per index directory and an
//! in-memory [`Snapshot`] of the committed state. Snapshots are immutable:
//! each commit persists and publishes a fresh `Arc<Snapshot>`, and readers
//! clone the current Arc once, then evaluate their whole query against it
//! without holding any lock. A reader that started before a commit keeps
//! seeing its own fully self-consistent state.
//!
//! Durability model: the segment is serialized to `segment.json.tmp` and
//! renamed over `segment.json`. A crash before the rename leaves the prior
//! committed state authoritative; a leftover temp file is ignored on open.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndexError;

/// Name of the committed segment file within the index directory.
pub const SEGMENT_FILENAME: &str = "segment.json";

/// Scratch file used for atomic segment replacement.
const SEGMENT_TMP_FILENAME: &str = "segment.json.tmp";

/// On-disk layout version. A mismatch is corruption, not a migration.
pub const FORMAT_VERSION: u32 = 1;

/// A single entry in a postings list: one (term, document) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Insertion order of the document within the snapshot.
    pub ord: u32,
    /// How many times the term occurs in the document's combined text.
    pub term_freq: u32,
    /// Token position of the term's first occurrence, for the earliness
    /// component of scoring.
    pub first_position: u32,
}

/// Stored field values for one film, plus the index-side statistics
/// scoring needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFilm {
    /// Unique film identifier, stored verbatim.
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
    /// Sortable `YYYYMMDD` release-date key, absent when the date was
    /// missing or unparseable.
    pub release_key: Option<String>,
    /// Token count of the combined text, the length normalizer for scoring.
    pub combined_len: u32,
}

/// An immutable view of the index's committed state at a point in time.
///
/// Invariants: film ords are dense (`films[ord]` is the film with that
/// ord), every postings list is sorted by ord ascending, and every posting
/// references an existing film.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Forward store, indexed by ord (insertion order).
    films: Vec<StoredFilm>,
    /// Term to postings-list mapping over the combined text field.
    postings: HashMap<String, Vec<Posting>>,
}

impl Snapshot {
    /// Returns the number of committed documents.
    pub fn len(&self) -> usize {
        self.films.len()
    }

    /// Returns true if the snapshot holds no documents.
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Looks up a film by its ord.
    pub fn film(&self, ord: u32) -> Option<&StoredFilm> {
        self.films.get(ord as usize)
    }

    /// Iterates films in insertion order.
    pub fn films(&self) -> impl Iterator<Item = &StoredFilm> {
        self.films.iter()
    }

    /// Returns the postings list for a term, sorted by ord.
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Appends a film with its per-term statistics, assigning the next ord.
    ///
    /// `term_stats` maps each distinct term of the combined text to its
    /// (frequency, first position). Appending preserves the sorted-by-ord
    /// invariant because ords only grow.
    pub(crate) fn append(&mut self, film: StoredFilm, term_stats: HashMap<String, (u32, u32)>) {
        let ord = self.films.len() as u32;
        self.films.push(film);

        for (term, (term_freq, first_position)) in term_stats {
            self.postings.entry(term).or_default().push(Posting {
                ord,
                term_freq,
                first_position,
            });
        }
    }
}

/// On-disk envelope around a snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct Segment {
    /// Layout version, checked on load.
    format_version: u32,
    /// The committed snapshot.
    snapshot: Snapshot,
}

/// The durable index store for one index directory.
///
/// Holds the currently published snapshot behind an `RwLock`; the lock is
/// only taken to clone or swap the Arc, never across query evaluation or
/// serialization, so readers and the writer do not block each other.
#[derive(Debug)]
pub struct Store {
    /// Index directory containing the segment file.
    dir: PathBuf,
    /// Currently published committed snapshot.
    current: RwLock<Arc<Snapshot>>,
}

impl Store {
    /// Opens the store at the given directory, creating it if needed.
    ///
    /// Loads the committed segment when one exists. A present but
    /// unreadable or incompatible segment file fails with
    /// [`IndexError::StoreCorruption`]; the caller must rebuild from
    /// source data rather than retry.
    pub fn open(dir: &Path) -> Result<Self, IndexError> {
        fs::create_dir_all(dir).map_err(|e| IndexError::OpenIndex {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let segment_path = dir.join(SEGMENT_FILENAME);
        let snapshot = if segment_path.exists() {
            load_segment(&segment_path)?
        } else {
            Snapshot::default()
        };

        debug!(dir = %dir.display(), docs = snapshot.len(), "opened index store");

        Ok(Self {
            dir: dir.to_path_buf(),
            current: RwLock::new(Arc::new(snapshot)),
        })
    }

    /// Returns the index directory.
    pub fn directory(&self) -> &Path {
        &self.dir
    }

    /// Acquires the latest committed snapshot.
    ///
    /// The returned Arc is independent of later commits; holding it keeps
    /// that state alive for the duration of a search.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Persists a snapshot atomically, then publishes it to readers.
    ///
    /// Write-then-rename keeps the prior committed state authoritative if
    /// the process is interrupted mid-persist. Publication happens only
    /// after the rename succeeds, so readers never observe a state that is
    /// not also durable.
    pub(crate) fn commit_snapshot(&self, snapshot: Snapshot) -> Result<(), IndexError> {
        let segment = Segment {
            format_version: FORMAT_VERSION,
            snapshot,
        };

        let contents = serde_json::to_string(&segment).map_err(|e| {
            IndexError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("failed to serialize segment: {e}"),
            ))
        })?;

        let tmp_path = self.dir.join(SEGMENT_TMP_FILENAME);
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, self.dir.join(SEGMENT_FILENAME))?;

        let published = Arc::new(segment.snapshot);
        debug!(docs = published.len(), "published committed snapshot");
        *self.current.write() = published;
        Ok(())
    }
}

/// Loads and validates a committed segment file.
fn load_segment(path: &Path) -> Result<Snapshot, IndexError> {
    let contents = fs::read_to_string(path)?;

    let segment: Segment = serde_json::from_str(&contents)
        .map_err(|e| IndexError::corruption(path.to_path_buf(), e.to_string()))?;

    if segment.format_version != FORMAT_VERSION {
        return Err(IndexError::corruption(
            path.to_path_buf(),
            format!(
                "unsupported format version {} (expected {FORMAT_VERSION})",
                segment.format_version
            ),
        ));
    }

    Ok(segment.snapshot)
}
