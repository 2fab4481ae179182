//! Goal, OKR and diet-plan models.
//!
//! # Responsibility
//! - Define measurable health goals and their progress inputs.
//! - Keep OKR/key-result progress derived, never stored.
//!
//! # Invariants
//! - `KeyResult::progress()` is clamped to [0, 1] and guards `target <= 0`.
//! - `Okr::progress()` is the arithmetic mean over key results, 0 when empty.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::food::MealSlot;
use crate::progress;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a goal aims to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    WeightLoss,
    WeightGain,
    Maintenance,
    MuscleBuild,
    FatLoss,
    Fitness,
}

/// A measurable health goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub kind: GoalKind,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
    pub is_active: bool,
}

impl Goal {
    pub fn new(
        kind: GoalKind,
        target_value: f64,
        current_value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            target_value,
            current_value,
            unit: unit.into(),
            deadline: None,
            is_active: true,
        }
    }
}

/// A measurable sub-goal contributing to an OKR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    pub id: Uuid,
    pub description: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
}

impl KeyResult {
    pub fn new(
        description: impl Into<String>,
        target: f64,
        current: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            target,
            current,
            unit: unit.into(),
        }
    }

    /// Completion ratio clamped to [0, 1]; 0 when `target <= 0`.
    pub fn progress(&self) -> f64 {
        progress::key_result_progress(self.current, self.target)
    }
}

/// Objective with its key results for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Okr {
    pub objective: String,
    /// Quarter label, e.g. "2024 Q1".
    pub quarter: String,
    pub key_results: Vec<KeyResult>,
}

impl Okr {
    pub fn new(objective: impl Into<String>, quarter: impl Into<String>) -> Self {
        Self {
            objective: objective.into(),
            quarter: quarter.into(),
            key_results: Vec::new(),
        }
    }

    /// Mean of key-result progress; 0 when there are no key results.
    pub fn progress(&self) -> f64 {
        progress::okr_progress(&self.key_results)
    }
}

/// A selectable diet plan with per-meal recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub duration_days: u32,
    /// Daily calorie target adopted when the plan is activated.
    pub daily_calories: f64,
    pub meal_plans: Vec<MealPlan>,
    pub is_active: bool,
}

impl DietPlan {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        duration_days: u32,
        daily_calories: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            duration_days,
            daily_calories,
            meal_plans: Vec::new(),
            is_active: false,
        }
    }
}

/// Recommended foods for one meal slot of a diet plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: Uuid,
    pub meal_slot: MealSlot,
    /// Recommended food names.
    pub foods: Vec<String>,
    pub target_calories: f64,
}

impl MealPlan {
    pub fn new(meal_slot: MealSlot, foods: Vec<String>, target_calories: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            meal_slot,
            foods,
            target_calories,
        }
    }
}
