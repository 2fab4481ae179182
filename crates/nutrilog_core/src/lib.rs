//! Core domain logic for NutriLog.
//! This crate is the single source of truth for tracking and progress invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod progress;
pub mod recognition;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{ExerciseEntry, ExerciseKind, MoodEntry, MoodKind, WeightEntry};
pub use model::food::{FoodEntry, MealSlot, RecordMethod};
pub use model::goal::{DietPlan, Goal, GoalKind, KeyResult, MealPlan, Okr};
pub use model::nutrition::NutritionFacts;
pub use model::profile::{Gender, HealthSnapshot, UserProfile};
pub use model::social::{FoodBuddy, FoodPost};
pub use model::subscription::{Subscription, SubscriptionTier};
pub use model::summary::{DaySummary, NutritionSummary};
pub use progress::{bmi, bmi_category, calorie_progress, macro_split, BmiCategory, MacroSplit};
pub use recognition::{
    CaptureSource, MockRecognitionProvider, RecognitionError, RecognitionProvider,
    RecognitionResult,
};
pub use repo::snapshot_repo::{
    MemorySnapshotRepository, RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository,
};
pub use repo::write_behind::SnapshotWriter;
pub use service::tracker_service::TrackerService;

/// Liveness probe used by the bridge wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Version of this crate, as published to the UI's about screen.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
