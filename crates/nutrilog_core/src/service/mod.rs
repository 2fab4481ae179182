//! Tracking use-case layer.
//!
//! # Responsibility
//! - Own the in-memory tracking state and its derived views.
//! - Shield UI and FFI callers from snapshot storage details.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod tracker_service;
