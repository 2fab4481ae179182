//! Domain model for nutrition and health tracking.
//!
//! # Responsibility
//! - Define canonical value records for every logged entry kind.
//! - Keep derived quantities (scaled nutrition, BMI, goal progress) as
//!   read-only computations, never stored fields.
//!
//! # Invariants
//! - Every record carries a stable `Uuid` generated at creation.
//! - Updates replace records wholesale; no caller-visible field mutation.
//! - Timestamps are `DateTime<Utc>`; calendar-day semantics are applied
//!   at query time, not at storage time.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod activity;
pub mod food;
pub mod goal;
pub mod nutrition;
pub mod profile;
pub mod social;
pub mod subscription;
pub mod summary;
