//! Exercise, mood and weight entry models.
//!
//! # Responsibility
//! - Define the non-food logged record kinds.
//! - Clamp bounded fields (intensity, durations) at construction.
//!
//! # Invariants
//! - `ExerciseEntry` duration and burned calories are never negative.
//! - `MoodEntry` intensity stays within 1..=5.
//! - `WeightEntry` does not clamp; non-positive weights are rejected at
//!   the store boundary instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exercise category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Cardio,
    Strength,
    Flexibility,
    Sports,
    Daily,
}

/// One logged exercise session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub id: Uuid,
    pub name: String,
    pub kind: ExerciseKind,
    /// Duration in whole seconds.
    pub duration_secs: i64,
    /// Estimated energy expenditure in kcal.
    pub calories_burned: f64,
    pub timestamp: DateTime<Utc>,
    pub notes: Option<String>,
}

impl ExerciseEntry {
    /// Creates a session record; negative duration or calories saturate to 0.
    pub fn new(
        name: impl Into<String>,
        kind: ExerciseKind,
        duration_secs: i64,
        calories_burned: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            duration_secs: duration_secs.max(0),
            calories_burned: calories_burned.max(0.0),
            timestamp: Utc::now(),
            notes: None,
        }
    }
}

/// Mood category with a fixed display emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodKind {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Calm,
    Stressed,
}

impl MoodKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Angry => "😠",
            Self::Anxious => "😰",
            Self::Excited => "🤩",
            Self::Calm => "😌",
            Self::Stressed => "😤",
        }
    }
}

/// One mood diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood: MoodKind,
    /// Strength of the mood, 1..=5.
    pub intensity: u8,
    /// Free-form diary text.
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// What triggered the mood, as free-form tags.
    pub triggers: Vec<String>,
}

impl MoodEntry {
    /// Creates a diary entry; intensity is clamped into 1..=5.
    pub fn new(mood: MoodKind, intensity: u8, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood,
            intensity: intensity.clamp(1, 5),
            content: content.into(),
            timestamp: Utc::now(),
            triggers: Vec::new(),
        }
    }
}

/// One body-weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    /// Body weight in kilograms; must be > 0 to be accepted by the store.
    pub weight_kg: f64,
    pub timestamp: DateTime<Utc>,
    pub notes: Option<String>,
}

impl WeightEntry {
    pub fn new(weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            weight_kg,
            timestamp: Utc::now(),
            notes: None,
        }
    }
}
