//! User profile and health snapshot models.
//!
//! # Responsibility
//! - Hold the single-user identity, body metrics and preference tags.
//! - Expose derived age and BMI without storing them.
//!
//! # Invariants
//! - BMI is always computed from current height/weight, never persisted.
//! - `HealthSnapshot` is session state fed by sensors and weight logs.

use crate::progress;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// The app's single user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub avatar: Option<String>,
    pub nickname: String,
    pub gender: Gender,
    pub birthday: NaiveDate,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub occupation: String,
    pub dietary_preferences: Vec<String>,
    pub exercise_preferences: Vec<String>,
    pub food_allergies: Vec<String>,
}

impl UserProfile {
    pub fn new(
        nickname: impl Into<String>,
        gender: Gender,
        birthday: NaiveDate,
        height_cm: f64,
        weight_kg: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            avatar: None,
            nickname: nickname.into(),
            gender,
            birthday,
            height_cm,
            weight_kg,
            occupation: String::new(),
            dietary_preferences: Vec::new(),
            exercise_preferences: Vec::new(),
            food_allergies: Vec::new(),
        }
    }

    /// Completed years of age on `date`; 0 when `date` precedes the birthday.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        date.years_since(self.birthday).unwrap_or(0)
    }
}

/// Point-in-time body metrics, partly sensor-fed.
///
/// Held by the store as session state; not one of the persisted
/// collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Step count reported by the device sensor boundary.
    pub steps: u32,
    pub heart_rate: Option<u32>,
    pub blood_pressure: Option<String>,
    pub sleep_hours: Option<f64>,
}

impl HealthSnapshot {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
            steps: 0,
            heart_rate: None,
            blood_pressure: None,
            sleep_hours: None,
        }
    }

    /// Body mass index derived from the snapshot's height and weight.
    pub fn bmi(&self) -> f64 {
        progress::bmi(self.height_cm, self.weight_kg)
    }
}
