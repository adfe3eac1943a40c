//! Exercise recommendation model
//!
//! Response shape produced by the exercise classifier: the predicted
//! category for a user and the routine that goes with it.

use serde::{Deserialize, Serialize};

/// A recommendation result for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseRecommendation {
    pub user_id: i32,
    pub predicted_category: String,
    pub routine: Option<Routine>,
}

/// Routine attached to a recommendation
///
/// Serialized keys are the Korean labels consumers match on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    #[serde(rename = "준비운동", default)]
    pub warm_up: Option<String>,
    /// Main exercises in execution order
    #[serde(rename = "본운동", default)]
    pub main_exercises: Option<Vec<String>>,
    #[serde(rename = "정리운동", default)]
    pub cool_down: Option<String>,
}

impl ExerciseRecommendation {
    pub fn new(user_id: i32, predicted_category: impl Into<String>, routine: Option<Routine>) -> Self {
        Self {
            user_id,
            predicted_category: predicted_category.into(),
            routine,
        }
    }
}

impl Routine {
    pub fn new<I, S>(warm_up: impl Into<String>, main_exercises: I, cool_down: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            warm_up: Some(warm_up.into()),
            main_exercises: Some(main_exercises.into_iter().map(Into::into).collect()),
            cool_down: Some(cool_down.into()),
        }
    }
}
