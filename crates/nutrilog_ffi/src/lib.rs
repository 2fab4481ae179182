//! Flutter-facing FFI surface for NutriLog.

pub mod api;
