//! Snapshot repository contract plus SQLite and in-memory backends.
//!
//! # Responsibility
//! - Store and retrieve one serialized collection per stable key.
//! - Convert collections to and from JSON at a single choke point.
//!
//! # Invariants
//! - `save_blob` replaces the whole payload for a key (no partial writes).
//! - `load_collection` never fails: missing or corrupt data becomes the
//!   default value and is logged, not surfaced.
//!
//! # See also
//! - docs/architecture/persistence.md

use crate::db::DbError;
use log::warn;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, PoisonError};

/// Stable snapshot keys, one per persisted collection.
pub const KEY_FOOD_ENTRIES: &str = "food_entries";
pub const KEY_EXERCISE_ENTRIES: &str = "exercise_entries";
pub const KEY_MOOD_ENTRIES: &str = "mood_entries";
pub const KEY_WEIGHT_ENTRIES: &str = "weight_entries";
pub const KEY_USER_PROFILE: &str = "user_profile";
pub const KEY_GOALS: &str = "goals";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialization(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "snapshot serialization failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Narrow save/load contract abstracting durable storage.
///
/// Implementations are shared between the store's startup load and the
/// background persister, so the contract requires `Send + Sync`.
pub trait SnapshotRepository: Send + Sync {
    /// Stores `payload` under `key`, replacing any previous payload.
    fn save_blob(&self, key: &str, payload: &[u8]) -> RepoResult<()>;

    /// Loads the payload stored under `key`; `None` when absent.
    fn load_blob(&self, key: &str) -> RepoResult<Option<Vec<u8>>>;
}

/// SQLite-backed snapshot repository over the `snapshots` table.
pub struct SqliteSnapshotRepository {
    conn: Mutex<Connection>,
}

impl SqliteSnapshotRepository {
    /// Wraps an already-bootstrapped connection (see `db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock_conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A poisoned lock still guards a consistent connection; writes are
        // single whole-payload statements.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn save_blob(&self, key: &str, payload: &[u8]) -> RepoResult<()> {
        let conn = self.lock_conn();
        conn.execute(
            "INSERT INTO snapshots (key, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![key, payload],
        )?;
        Ok(())
    }

    fn load_blob(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        let conn = self.lock_conn();
        let mut stmt = conn.prepare("SELECT payload FROM snapshots WHERE key = ?1;")?;
        let mut rows = stmt.query(params![key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }
}

/// In-memory snapshot repository for tests and throwaway sessions.
#[derive(Default)]
pub struct MemorySnapshotRepository {
    blobs: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotRepository for MemorySnapshotRepository {
    fn save_blob(&self, key: &str, payload: &[u8]) -> RepoResult<()> {
        let mut blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        blobs.insert(key.to_string(), payload.to_vec());
        Ok(())
    }

    fn load_blob(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        let blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(blobs.get(key).cloned())
    }
}

/// Serializes `value` as JSON and stores it under `key`.
pub fn save_collection<T>(repo: &dyn SnapshotRepository, key: &str, value: &T) -> RepoResult<()>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_vec(value)?;
    repo.save_blob(key, &payload)
}

/// Loads and decodes the collection stored under `key`.
///
/// Missing data, storage errors and undecodable payloads all yield the
/// default value; corruption is treated as "no prior data".
pub fn load_collection<T>(repo: &dyn SnapshotRepository, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let payload = match repo.load_blob(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return T::default(),
        Err(err) => {
            warn!("event=snapshot_load module=repo status=error key={key} error={err}");
            return T::default();
        }
    };

    match serde_json::from_slice(&payload) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=snapshot_load module=repo status=corrupt key={key} error={err}");
            T::default()
        }
    }
}
