//! Single shared handle to the SQLite document store.
//!
//! One connection is opened at startup, before the server binds, and shared
//! process-wide behind a mutex; SQLite multiplexes the concurrent requests
//! through it. The `rooms` and `reservations` collections are plain
//! `id TEXT PRIMARY KEY, doc TEXT` tables holding JSON documents, and
//! insertion order is recovered through `rowid`.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use rusqlite::Connection;
use thiserror::Error;

/// Errors raised while opening or using the store handle.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or configured.
    #[error("failed to open document store: {0}")]
    Open(#[source] rusqlite::Error),
    /// A statement failed during execution.
    #[error("document store query failed: {0}")]
    Query(#[from] rusqlite::Error),
    /// A stored document no longer deserialises into its domain type.
    #[error("stored document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS rooms (
        id  TEXT PRIMARY KEY,
        doc TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS reservations (
        id  TEXT PRIMARY KEY,
        doc TEXT NOT NULL
    );
";

/// Shared handle to the SQLite document store.
///
/// Cloning is cheap; every clone refers to the same connection.
#[derive(Clone)]
pub struct DocumentStore {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentStore {
    /// Open the store at the given path, configure it, and ensure the
    /// collection tables exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] when the file cannot be opened or the
    /// schema cannot be applied. Startup treats this as fatal.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(StoreError::Open)?;
        Self::initialise(conn)
    }

    /// Open an in-memory store for tests.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] when SQLite refuses the connection.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(StoreError::Open)?;
        Self::initialise(conn)
    }

    fn initialise(conn: Connection) -> Result<Self, StoreError> {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(StoreError::Open)?;
        conn.pragma_update(None, "busy_timeout", 5_000)
            .map_err(StoreError::Open)?;
        conn.execute_batch(SCHEMA).map_err(StoreError::Open)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a closure against the shared connection.
    ///
    /// A poisoned lock is recovered: the connection itself holds no
    /// in-crate invariants that a panicking borrower could break.
    pub(crate) fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let guard = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}

#[cfg(test)]
mod tests {
    //! Store open and schema coverage.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn open_in_memory_creates_the_collections() {
        let store = DocumentStore::open_in_memory().expect("store opens");
        let count: i64 = store
            .with_conn(|conn| {
                conn.query_row(
                    "SELECT count(*) FROM sqlite_master
                     WHERE type = 'table' AND name IN ('rooms', 'reservations')",
                    [],
                    |row| row.get(0),
                )
                .map_err(StoreError::from)
            })
            .expect("query succeeds");
        assert_eq!(count, 2);
    }

    #[rstest]
    fn open_persists_documents_across_handles() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("store.db");

        {
            let store = DocumentStore::open(&path).expect("store opens");
            store
                .with_conn(|conn| {
                    conn.execute(
                        "INSERT INTO rooms (id, doc) VALUES (?1, ?2)",
                        rusqlite::params!["r1", "{}"],
                    )?;
                    Ok(())
                })
                .expect("insert succeeds");
        }

        let reopened = DocumentStore::open(&path).expect("store reopens");
        let count: i64 = reopened
            .with_conn(|conn| {
                conn.query_row("SELECT count(*) FROM rooms", [], |row| row.get(0))
                    .map_err(StoreError::from)
            })
            .expect("query succeeds");
        assert_eq!(count, 1);
    }

    #[rstest]
    fn open_fails_for_an_unwritable_path() {
        let result = DocumentStore::open("/nonexistent-dir/store.db");
        assert!(matches!(result, Err(StoreError::Open(_))));
    }
}
