//! Snapshot persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the named-blob save/load contract durable storage must honor.
//! - Isolate SQLite details from store/business orchestration.
//!
//! # Invariants
//! - Each key holds one complete serialized collection; writes replace
//!   the payload wholesale.
//! - Missing or corrupt payloads decode to defaults; they never fail a
//!   store bootstrap.
//!
//! # See also
//! - docs/architecture/persistence.md

pub mod snapshot_repo;
pub mod write_behind;
