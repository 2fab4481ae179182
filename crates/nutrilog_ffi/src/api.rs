//! Tracking use-case API exposed to Flutter.
//!
//! # Responsibility
//! - Expose stable, use-case-level tracking calls to Dart via FRB.
//! - Report failures through response envelopes, never through thrown
//!   errors or panics.
//!
//! # Invariants
//! - No exported function may panic across the bridge.
//! - Each call rebuilds its store from the persisted snapshots and
//!   flushes writes before returning.
//!
//! # See also
//! - docs/architecture/persistence.md

use nutrilog_core::db::open_db;
use nutrilog_core::recognition::catalog;
use nutrilog_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FoodEntry, MealSlot, NutritionFacts, RecordMethod, SqliteSnapshotRepository, TrackerService,
    WeightEntry,
};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

const TRACKER_DB_FILE_NAME: &str = "nutrilog_tracker.sqlite3";
static TRACKER_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Liveness probe for verifying the generated bridge wiring.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Safe to invoke from the UI isolate.
/// - Never throws into Dart.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Reports the core crate version for the about screen.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Safe to invoke from the UI isolate.
/// - Never throws into Dart.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Configures process-wide file logging on first call.
///
/// `level` accepts `trace|debug|info|warn|error` in any casing and
/// `log_dir` must be an absolute directory for the rolling log files.
///
/// # FFI contract
/// - Sync call; creates the log directory when missing.
/// - Calling again with the same configuration is a no-op.
/// - A different level or directory on a later call comes back as an error.
/// - Never panics; empty string means success, anything else is the failure text.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for tracking command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional created entry ID.
    pub entry_id: Option<String>,
    /// Status line for the UI to surface.
    pub message: String,
}

impl TrackActionResponse {
    fn success(message: impl Into<String>, entry_id: String) -> Self {
        Self {
            ok: true,
            entry_id: Some(entry_id),
            message: message.into(),
        }
    }

    fn done(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            entry_id: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entry_id: None,
            message: message.into(),
        }
    }
}

/// Today's intake totals and target progress.
#[derive(Debug, Clone, PartialEq)]
pub struct TodaySummaryResponse {
    pub ok: bool,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    /// Fraction of the daily target consumed, in [0, 1].
    pub progress: f64,
    pub target_kcal: f64,
    pub streak_days: u32,
    pub message: String,
}

impl TodaySummaryResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            progress: 0.0,
            target_kcal: 0.0,
            streak_days: 0,
            message: message.into(),
        }
    }
}

/// One day of the weekly report.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyDayItem {
    /// ISO `YYYY-MM-DD` local calendar date.
    pub date: String,
    pub calories: f64,
    pub exercise_minutes: i64,
    pub water_ml: f64,
}

/// Weekly report envelope, oldest day first.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReportResponse {
    pub ok: bool,
    pub days: Vec<WeeklyDayItem>,
    pub message: String,
}

/// Logs one food entry with caller-provided per-100-unit nutrition.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - `meal_slot` is one of `breakfast|lunch|dinner|snack` (case-insensitive).
/// - `quantity` defaults to 100 when omitted or non-positive.
/// - Never panics; returns the created entry ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn track_food(
    name: String,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    quantity: Option<f64>,
    meal_slot: String,
) -> TrackActionResponse {
    let trimmed = name.trim().to_string();
    if trimmed.is_empty() {
        return TrackActionResponse::failure("track_food failed: name is empty");
    }
    let slot = match parse_meal_slot(&meal_slot) {
        Some(slot) => slot,
        None => {
            return TrackActionResponse::failure(format!(
                "track_food failed: unknown meal slot `{meal_slot}`"
            ));
        }
    };

    let result = with_store(|store| {
        let mut entry = FoodEntry::new(
            trimmed.clone(),
            NutritionFacts::new(calories, protein_g, carbs_g, fat_g),
            RecordMethod::ManualEntry,
        );
        entry.emoji = catalog::emoji_for(&trimmed).to_string();
        entry.meal_slot = slot;
        if let Some(quantity) = quantity {
            if quantity > 0.0 && quantity.is_finite() {
                entry.quantity = quantity;
            }
        }
        let id = entry.id;
        store.add_food(entry);
        id
    });

    match result {
        Ok(id) => TrackActionResponse::success("Food logged.", id.to_string()),
        Err(err) => TrackActionResponse::failure(format!("track_food failed: {err}")),
    }
}

/// Removes a food entry by its stable ID.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Removing an already-removed ID still succeeds.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_food(entry_id: String) -> TrackActionResponse {
    let id = match Uuid::parse_str(entry_id.trim()) {
        Ok(id) => id,
        Err(err) => {
            return TrackActionResponse::failure(format!(
                "remove_food failed: invalid entry id: {err}"
            ));
        }
    };

    match with_store(|store| store.remove_food(id)) {
        Ok(()) => TrackActionResponse::done("Food removed."),
        Err(err) => TrackActionResponse::failure(format!("remove_food failed: {err}")),
    }
}

/// Logs a body-weight measurement in kilograms.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Non-positive weights are rejected without touching stored state.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn track_weight(weight_kg: f64) -> TrackActionResponse {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return TrackActionResponse::failure(format!(
            "track_weight failed: weight must be positive, got {weight_kg}"
        ));
    }

    let result = with_store(|store| {
        let entry = WeightEntry::new(weight_kg);
        let id = entry.id;
        store.add_weight(entry);
        id
    });

    match result {
        Ok(id) => TrackActionResponse::success("Weight logged.", id.to_string()),
        Err(err) => TrackActionResponse::failure(format!("track_weight failed: {err}")),
    }
}

/// Returns today's intake totals, target progress and logging streak.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures come back in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn today_summary() -> TodaySummaryResponse {
    match with_store(|store| TodaySummaryResponse {
        ok: true,
        calories: store.today_calories(),
        protein_g: store.today_protein(),
        carbs_g: store.today_carbs(),
        fat_g: store.today_fat(),
        progress: store.calorie_progress(),
        target_kcal: store.daily_calorie_target(),
        streak_days: store.logging_streak_days(),
        message: String::new(),
    }) {
        Ok(summary) => summary,
        Err(err) => TodaySummaryResponse::failure(format!("today_summary failed: {err}")),
    }
}

/// Returns the last seven local days, oldest first.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures come back in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn weekly_report() -> WeeklyReportResponse {
    match with_store(|store| {
        store
            .weekly_series()
            .into_iter()
            .map(|day| WeeklyDayItem {
                date: day.date.to_string(),
                calories: day.calories,
                exercise_minutes: day.exercise_minutes,
                water_ml: day.water_intake_ml,
            })
            .collect::<Vec<_>>()
    }) {
        Ok(days) => WeeklyReportResponse {
            ok: true,
            days,
            message: String::new(),
        },
        Err(err) => WeeklyReportResponse {
            ok: false,
            days: Vec::new(),
            message: format!("weekly_report failed: {err}"),
        },
    }
}

fn parse_meal_slot(raw: &str) -> Option<MealSlot> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "breakfast" => Some(MealSlot::Breakfast),
        "lunch" => Some(MealSlot::Lunch),
        "dinner" => Some(MealSlot::Dinner),
        "snack" => Some(MealSlot::Snack),
        _ => None,
    }
}

fn resolve_tracker_db_path() -> PathBuf {
    TRACKER_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("NUTRILOG_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(TRACKER_DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(f: impl FnOnce(&mut TrackerService) -> T) -> Result<T, String> {
    let db_path = resolve_tracker_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("tracker DB open failed: {err}"))?;
    let mut store = TrackerService::new(Arc::new(SqliteSnapshotRepository::new(conn)));
    let value = f(&mut store);
    store.flush_persistence();
    Ok(value)
}
