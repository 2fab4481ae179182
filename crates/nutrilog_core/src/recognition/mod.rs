//! Food recognition boundary.
//!
//! # Responsibility
//! - Define the provider seam capture flows call to identify foods.
//! - Ship the built-in food catalog and a mock provider for development.
//!
//! # Invariants
//! - Providers never touch store state; they only produce candidate entries.
//! - Callers decide which candidates become logged food entries.
//!
//! # See also
//! - docs/architecture/recognition.md

pub mod catalog;
pub mod mock;
pub mod provider;

use std::error::Error;
use std::fmt;

pub use catalog::{
    emoji_for, food_suggestions, nutrition_for, nutrition_summary, recommended_foods,
    DEFAULT_FOOD_EMOJI,
};
pub use mock::MockRecognitionProvider;
pub use provider::{CaptureSource, RecognitionProvider};

/// Result alias for recognition operations.
pub type RecognitionResult<T> = Result<T, RecognitionError>;

/// Failures a recognition provider can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionError {
    /// The image payload could not be decoded or preprocessed.
    ImageProcessingFailed,
    /// The provider's model could not be loaded.
    ModelLoadingFailed,
    /// Inference ran but produced no usable result.
    RecognitionFailed,
    /// Inference succeeded and found no food in the image.
    NoFoodDetected,
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageProcessingFailed => write!(f, "image processing failed"),
            Self::ModelLoadingFailed => write!(f, "recognition model failed to load"),
            Self::RecognitionFailed => write!(f, "food recognition failed"),
            Self::NoFoodDetected => write!(f, "no food detected in image"),
        }
    }
}

impl Error for RecognitionError {}
