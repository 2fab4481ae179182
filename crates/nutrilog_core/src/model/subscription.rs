//! Membership subscription model.
//!
//! # Invariants
//! - `end_date` is derived from `start_date` plus the tier duration at
//!   construction and never edited afterwards.

use chrono::{Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Paid membership tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Monthly,
    HalfYearly,
    Yearly,
}

impl SubscriptionTier {
    /// Calendar months covered by one purchase of this tier.
    pub fn duration_months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::HalfYearly => 6,
            Self::Yearly => 12,
        }
    }
}

/// One membership purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub tier: SubscriptionTier,
    pub start_date: NaiveDate,
    /// `start_date` advanced by the tier's calendar months; the day of
    /// month is clipped when the target month is shorter.
    pub end_date: NaiveDate,
    pub price: f64,
    pub is_active: bool,
}

impl Subscription {
    /// Creates an active subscription starting on the local calendar day.
    pub fn new(tier: SubscriptionTier, price: f64) -> Self {
        Self::starting_on(tier, Local::now().date_naive(), price)
    }

    /// Creates an active subscription with an explicit start date.
    pub fn starting_on(tier: SubscriptionTier, start_date: NaiveDate, price: f64) -> Self {
        let end_date = start_date
            .checked_add_months(Months::new(tier.duration_months()))
            .unwrap_or(start_date);
        Self {
            id: Uuid::new_v4(),
            tier,
            start_date,
            end_date,
            price,
            is_active: true,
        }
    }
}
