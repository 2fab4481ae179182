//! Recognition provider seam.
//!
//! # Responsibility
//! - Define the async boundary identification backends implement.
//! - Map capture sources onto food-entry record methods.
//!
//! # Invariants
//! - Implementations are `Send + Sync`; callers may share them across tasks.
//! - An empty `Ok` candidate list is valid and distinct from the
//!   `NoFoodDetected` error; providers choose which to report.

use async_trait::async_trait;

use crate::model::food::{FoodEntry, RecordMethod};
use crate::recognition::RecognitionResult;

/// Where the image handed to a provider came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    Camera,
    Album,
}

impl CaptureSource {
    /// Record method stamped onto entries produced from this source.
    pub fn record_method(&self) -> RecordMethod {
        match self {
            Self::Camera => RecordMethod::PhotoRecognition,
            Self::Album => RecordMethod::AlbumSelection,
        }
    }
}

/// Async backend that turns an image into candidate food entries.
#[async_trait]
pub trait RecognitionProvider: Send + Sync {
    /// Identifies foods in `image`, stamping entries for `source`.
    async fn identify(
        &self,
        image: &[u8],
        source: CaptureSource,
    ) -> RecognitionResult<Vec<FoodEntry>>;

    /// Stable provider name for logs.
    fn provider_name(&self) -> &str;
}
