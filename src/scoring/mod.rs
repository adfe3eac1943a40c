//! Diet risk scoring
//!
//! Turns weekly nutrition totals into model features, asks a risk model
//! for a probability and maps it onto a 0-100 score.

pub mod features;
pub mod scorer;

use thiserror::Error;

pub use features::DietFeatures;
pub use scorer::{score_from_avatar_risk, score_user, score_users};

/// Scoring error types
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Invalid diet input: {0}")]
    InvalidInput(String),

    #[error("Risk model error: {0}")]
    Model(String),
}

/// A trained classifier that predicts diabetes risk from diet features
pub trait RiskModel {
    /// Probability of the positive class, 0.0-1.0
    fn predict_risk(&self, features: &DietFeatures) -> Result<f64, ScoreError>;
}
