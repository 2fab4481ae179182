//! Embedded schema migrations for the snapshot store.
//!
//! # Responsibility
//! - Keep the ordered migration list and replay the pending tail.
//!
//! # Invariants
//! - Versions are strictly increasing and mirrored to `PRAGMA user_version`.
//! - A database from a newer build is rejected, never downgraded.
//!
//! # See also
//! - docs/architecture/persistence.md

use log::info;
use rusqlite::Connection;

use crate::db::{DbError, DbResult};

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "snapshots",
    sql: include_str!("0001_snapshots.sql"),
}];

/// Highest migration version shipped in this build.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |m| m.version)
}

/// Brings the connection's schema up to [`latest_version`].
///
/// Already-current databases return without touching the schema. Each pending
/// migration runs inside one transaction together with its `user_version`
/// bump, so a crash never leaves the version ahead of the schema.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stored = stored_version(conn)?;
    let latest = latest_version();

    if stored > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: stored,
            latest_supported: latest,
        });
    }
    if stored == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > stored) {
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
        info!(
            "event=db_migrate module=db status=ok version={} name={}",
            migration.version, migration.name
        );
    }
    tx.commit()?;

    Ok(())
}

fn stored_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}
