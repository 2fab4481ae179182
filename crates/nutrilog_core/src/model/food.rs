//! Food entry domain model.
//!
//! # Responsibility
//! - Define the canonical logged-food record and its capture metadata.
//! - Keep quantity-scaled nutrition a derived computation.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `confidence` stays within [0, 1]; non-AI entries carry 1.0.
//! - `total_nutrition()` is recomputed on demand, never cached.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::nutrition::NutritionFacts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a food entry was captured.
///
/// Serialized with the compact wire names used by existing stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordMethod {
    /// Camera capture followed by AI identification.
    #[serde(rename = "photo")]
    PhotoRecognition,
    /// Image picked from the photo library, then identified.
    #[serde(rename = "album")]
    AlbumSelection,
    /// Barcode scan lookup.
    #[serde(rename = "barcode")]
    BarcodeScan,
    /// Typed in by hand.
    #[serde(rename = "manual")]
    ManualEntry,
}

/// Meal slot a food entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Display emoji for the slot.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Breakfast => "🌅",
            Self::Lunch => "☀️",
            Self::Dinner => "🌙",
            Self::Snack => "🍿",
        }
    }
}

/// One logged food record.
///
/// `nutrition` holds per-100-unit facts; the quantity-scaled total is
/// always derived via [`FoodEntry::total_nutrition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Stable global ID used for updates, removal and post references.
    pub id: Uuid,
    /// Food name as captured or recognized.
    pub name: String,
    /// Display icon; "🍽️" when no keyword rule matched.
    pub emoji: String,
    /// Optional local image reference.
    pub image: Option<String>,
    /// Estimated or weighed mass in grams.
    pub weight_grams: f64,
    /// Human-readable portion description.
    pub portion: String,
    /// Consumed quantity in `unit`; nutrition scales by `quantity / 100`.
    pub quantity: f64,
    /// Unit for `quantity`.
    pub unit: String,
    /// Nutrient amounts per 100 units.
    pub nutrition: NutritionFacts,
    /// Creation time in UTC.
    pub timestamp: DateTime<Utc>,
    /// Capture path that produced this entry.
    pub record_method: RecordMethod,
    /// Barcode payload for scanned entries.
    pub barcode: Option<String>,
    /// Meal slot this entry counts toward.
    pub meal_slot: MealSlot,
    /// Optional remote image URL.
    pub image_url: Option<String>,
    /// Identification confidence in [0, 1]; 1.0 for non-AI entries.
    pub confidence: f64,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Optional mood note attached at logging time.
    pub mood_note: Option<String>,
}

impl FoodEntry {
    /// Creates a new entry with a generated stable ID and `Utc::now()`.
    ///
    /// # Invariants
    /// - Defaults: 100 g, quantity 100, unit "g", breakfast slot,
    ///   confidence 1.0, no optional metadata.
    pub fn new(
        name: impl Into<String>,
        nutrition: NutritionFacts,
        record_method: RecordMethod,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, nutrition, record_method)
    }

    /// Creates a new entry with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        nutrition: NutritionFacts,
        record_method: RecordMethod,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: "🍽️".to_string(),
            image: None,
            weight_grams: 100.0,
            portion: "1 serving".to_string(),
            quantity: 100.0,
            unit: "g".to_string(),
            nutrition,
            timestamp: Utc::now(),
            record_method,
            barcode: None,
            meal_slot: MealSlot::Breakfast,
            image_url: None,
            confidence: 1.0,
            tags: Vec::new(),
            mood_note: None,
        }
    }

    /// Sets the identification confidence, clamped to [0, 1].
    pub fn set_confidence(&mut self, confidence: f64) {
        self.confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Nutrient totals for the consumed quantity.
    ///
    /// # Invariants
    /// - Linear in `quantity`: every field equals the per-100 value
    ///   multiplied by `quantity / 100`.
    pub fn total_nutrition(&self) -> NutritionFacts {
        self.nutrition.scaled(self.quantity / 100.0)
    }
}
