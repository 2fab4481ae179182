//! Catalog-backed mock recognition provider.
//!
//! # Responsibility
//! - Simulate an identification backend without any model dependency.
//! - Expose latency, failure-rate and seed knobs for development and tests.
//!
//! # Invariants
//! - Success returns 1..=3 entries drawn from the built-in catalog.
//! - Confidence is drawn from [0.7, 0.95]; weight from [50, 200] grams.
//! - With a seed, the draw sequence is fully reproducible.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::food::FoodEntry;
use crate::recognition::catalog::{self, emoji_for};
use crate::recognition::provider::{CaptureSource, RecognitionProvider};
use crate::recognition::{RecognitionError, RecognitionResult};

/// Default simulated inference latency.
const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

/// Stand-in provider that draws results from the food catalog.
pub struct MockRecognitionProvider {
    latency: Duration,
    failure_rate: f64,
    rng: Option<Mutex<StdRng>>,
}

impl MockRecognitionProvider {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            failure_rate: 0.0,
            rng: None,
        }
    }

    /// Overrides the simulated inference latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Probability of returning `RecognitionFailed`, clamped to [0, 1].
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = if rate.is_finite() {
            rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    /// Makes every draw reproducible from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    fn draw_entries<R: Rng>(
        &self,
        rng: &mut R,
        source: CaptureSource,
    ) -> RecognitionResult<Vec<FoodEntry>> {
        if self.failure_rate > 0.0 && rng.gen::<f64>() < self.failure_rate {
            return Err(RecognitionError::RecognitionFailed);
        }
        let foods = catalog::catalog();
        let count: usize = rng.gen_range(1..=3);
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            let (name, nutrition) = foods[rng.gen_range(0..foods.len())];
            let mut entry = FoodEntry::new(name, nutrition, source.record_method());
            entry.emoji = emoji_for(name).to_string();
            entry.weight_grams = rng.gen_range(50.0..=200.0);
            entry.set_confidence(rng.gen_range(0.7..=0.95));
            entries.push(entry);
        }
        Ok(entries)
    }
}

impl Default for MockRecognitionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecognitionProvider for MockRecognitionProvider {
    async fn identify(
        &self,
        image: &[u8],
        source: CaptureSource,
    ) -> RecognitionResult<Vec<FoodEntry>> {
        if image.is_empty() {
            warn!("event=recognize module=recognition provider=mock status=error reason=empty_image");
            return Err(RecognitionError::ImageProcessingFailed);
        }
        tokio::time::sleep(self.latency).await;
        let result = match &self.rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                self.draw_entries(&mut *rng, source)
            }
            None => self.draw_entries(&mut rand::thread_rng(), source),
        };
        match &result {
            Ok(entries) => info!(
                "event=recognize module=recognition provider=mock status=ok items={}",
                entries.len()
            ),
            Err(err) => warn!(
                "event=recognize module=recognition provider=mock status=error error={err}"
            ),
        }
        result
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
