//! Pure goal and body-metric computations.
//!
//! # Responsibility
//! - Compute calorie-target progress, BMI and OKR aggregates.
//! - Hold the only copy of the BMI category thresholds.
//!
//! # Invariants
//! - Every function saturates or clamps instead of failing; no input
//!   produces NaN or an error.
//! - Nothing here reads the clock; date-scoped logic lives in the store.

use crate::model::goal::KeyResult;
use crate::model::summary::DaySummary;

const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
const CARBS_KCAL_PER_GRAM: f64 = 4.0;
const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Tolerance around the daily target within which a day counts as on-target.
const ON_TARGET_TOLERANCE_KCAL: f64 = 200.0;

/// Fraction of the daily calorie target consumed, clamped to [0, 1].
///
/// Returns 0 when `target <= 0` or the ratio is not finite.
pub fn calorie_progress(consumed_kcal: f64, target_kcal: f64) -> f64 {
    if target_kcal <= 0.0 {
        return 0.0;
    }
    let ratio = consumed_kcal / target_kcal;
    if !ratio.is_finite() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Body mass index from height in centimeters and weight in kilograms.
///
/// Returns 0 for non-positive or non-finite inputs.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if !height_cm.is_finite() || !weight_kg.is_finite() || height_cm <= 0.0 || weight_kg <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI band; boundaries are half-open (18.5, 24 and 28 open the next band).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Stable lowercase label for display and serialization.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// Maps a BMI value onto its category.
///
/// The thresholds here are the single source for every category decision
/// in the crate.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.0 {
        BmiCategory::Normal
    } else if bmi < 28.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Completion ratio of one key result, clamped to [0, 1].
///
/// Returns 0 when `target <= 0`.
pub fn key_result_progress(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let ratio = current / target;
    if !ratio.is_finite() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Arithmetic mean of key-result progress; 0 for an empty list.
pub fn okr_progress(key_results: &[KeyResult]) -> f64 {
    if key_results.is_empty() {
        return 0.0;
    }
    let total: f64 = key_results
        .iter()
        .map(|kr| key_result_progress(kr.current, kr.target))
        .sum();
    total / key_results.len() as f64
}

/// Calorie-share fractions of the three macros, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Splits macro grams into calorie-share fractions using 4/4/9 kcal per gram.
///
/// The denominator is the macro-derived calorie total, so the shares sum
/// to 1 whenever any macro is present; all zeros otherwise.
pub fn macro_split(protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroSplit {
    let protein_kcal = protein_g.max(0.0) * PROTEIN_KCAL_PER_GRAM;
    let carbs_kcal = carbs_g.max(0.0) * CARBS_KCAL_PER_GRAM;
    let fat_kcal = fat_g.max(0.0) * FAT_KCAL_PER_GRAM;
    let total = protein_kcal + carbs_kcal + fat_kcal;
    if total <= 0.0 || !total.is_finite() {
        return MacroSplit::default();
    }
    MacroSplit {
        protein: protein_kcal / total,
        carbs: carbs_kcal / total,
        fat: fat_kcal / total,
    }
}

/// Days whose calorie sum lies within 200 kcal of the daily target.
pub fn days_on_target(days: &[DaySummary], target_kcal: f64) -> usize {
    days.iter()
        .filter(|day| (day.calories - target_kcal).abs() <= ON_TARGET_TOLERANCE_KCAL)
        .count()
}

/// Days with at least one logged calorie.
pub fn days_with_entries(days: &[DaySummary]) -> usize {
    days.iter().filter(|day| day.calories > 0.0).count()
}
