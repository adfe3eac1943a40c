//! Data models
//!
//! Rust structs for the records exchanged with the SaveUs web service and
//! the locally stored food nutrition rows.

mod diet;
mod exercise_recommendation;
mod food;
mod meal;

pub use diet::{DietScore, RiskLevel, UserDietInfo};
pub use exercise_recommendation::{ExerciseRecommendation, Routine};
pub use food::Food;
pub use meal::MealEntry;
