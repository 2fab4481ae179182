//! Nutrition facts value type.
//!
//! # Responsibility
//! - Represent per-100-unit nutrient amounts for a food.
//! - Provide linear scaling for quantity-based totals.
//!
//! # Invariants
//! - All fields are non-negative; the constructor saturates negatives to 0.
//! - Scaling is linear and never cached by holders of this type.

use serde::{Deserialize, Serialize};

/// Nutrient amounts per 100 mass-units of a food.
///
/// The first four fields are the required macros; the trailing micro
/// fields default to 0 when a source does not report them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal.
    pub calories: f64,
    /// Protein in grams.
    pub protein: f64,
    /// Carbohydrates in grams.
    pub carbs: f64,
    /// Fat in grams.
    pub fat: f64,
    /// Dietary fiber in grams.
    pub fiber: f64,
    /// Sugar in grams.
    pub sugar: f64,
    /// Sodium in milligrams.
    pub sodium: f64,
    /// Potassium in milligrams.
    pub potassium: f64,
    /// Vitamin C in milligrams.
    pub vitamin_c: f64,
    /// Calcium in milligrams.
    pub calcium: f64,
    /// Iron in milligrams.
    pub iron: f64,
}

impl NutritionFacts {
    /// Creates facts from the four required macro amounts.
    ///
    /// # Invariants
    /// - Negative inputs saturate to 0; construction never fails.
    /// - Micro-nutrient fields are initialized to 0.
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories: calories.max(0.0),
            protein: protein.max(0.0),
            carbs: carbs.max(0.0),
            fat: fat.max(0.0),
            ..Self::default()
        }
    }

    /// Returns a copy with every field multiplied by `factor`.
    ///
    /// Used for quantity-based totals (`factor = quantity / 100`).
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
            sugar: self.sugar * factor,
            sodium: self.sodium * factor,
            potassium: self.potassium * factor,
            vitamin_c: self.vitamin_c * factor,
            calcium: self.calcium * factor,
            iron: self.iron * factor,
        }
    }
}
