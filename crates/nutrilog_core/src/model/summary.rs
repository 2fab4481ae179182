//! Derived summary records returned by aggregate queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's aggregated intake and activity.
///
/// Produced by the weekly-series query; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Local calendar day the sums cover.
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Whole exercise minutes, truncated per entry before summing.
    pub exercise_minutes: i64,
    /// Placeholder until water logging exists; fixed at 2000 ml.
    pub water_intake_ml: f64,
}

/// Macro totals across a set of food entries, quantity-scaled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}
