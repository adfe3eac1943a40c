//! Feature preprocessing
//!
//! Mirrors the preprocessing the risk model was trained with, so feature
//! names and order must not change.

use serde::Serialize;

use super::ScoreError;
use crate::models::UserDietInfo;

/// Feature names in model input order
pub const FEATURE_NAMES: [&str; 9] = [
    "AGE",
    "BMI",
    "SEX",
    "LOG_PCT_CALORIE",
    "PCT_PROTEIN",
    "LOG_PCT_SODIUM",
    "RATIO_SUGAR_TO_CHO",
    "LOG_RATIO_FAT",
    "RATIO_CHO",
];

/// Recommended daily sodium, mg
const SODIUM_REFERENCE_MG: f64 = 2000.0;

const AVATAR_AGE: f64 = 52.0;
const AVATAR_BMI: f64 = 26.0;
const AVATAR_SEX: f64 = 1.0;

/// Model input row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DietFeatures {
    pub age: f64,
    pub bmi: f64,
    pub sex: f64,
    pub log_pct_calorie: f64,
    pub pct_protein: f64,
    pub log_pct_sodium: f64,
    pub ratio_sugar_to_cho: f64,
    pub log_ratio_fat: f64,
    pub ratio_cho: f64,
}

impl DietFeatures {
    pub fn from_diet(u: &UserDietInfo) -> Result<Self, ScoreError> {
        if u.height == 0.0 {
            return Err(ScoreError::InvalidInput(format!(
                "user {} has zero height",
                u.user_id
            )));
        }
        let height_m = u.height / 100.0;
        let bmi = u.weight / (height_m * height_m);

        // Standard body weight times kcal per kg
        let kcal_per_kg = if u.is_male() { 30.0 } else { 25.0 };
        let rec_calorie = (u.height - 100.0) * 0.9 * kcal_per_kg;

        let pct_calorie = ratio(u.total_kcal, rec_calorie);
        let pct_protein = ratio(u.total_protein, u.weight);
        let pct_sodium = u.total_sodium / SODIUM_REFERENCE_MG;

        let ratio_fat = ratio(u.total_fat * 9.0, u.total_kcal);
        let ratio_cho = ratio(u.total_carbs * 4.0, u.total_kcal);
        let ratio_sugar_to_cho = ratio(u.total_sugar, u.total_carbs);

        Ok(Self {
            age: f64::from(u.age),
            bmi,
            sex: f64::from(u.sex),
            log_pct_calorie: pct_calorie.ln_1p(),
            pct_protein,
            log_pct_sodium: pct_sodium.ln_1p(),
            ratio_sugar_to_cho,
            log_ratio_fat: ratio_fat.ln_1p(),
            ratio_cho,
        })
    }

    /// Same diet on the reference profile used for relative scoring
    pub fn as_avatar(&self) -> Self {
        Self {
            age: AVATAR_AGE,
            bmi: AVATAR_BMI,
            sex: AVATAR_SEX,
            ..*self
        }
    }

    /// Values in [`FEATURE_NAMES`] order
    pub fn to_array(&self) -> [f64; 9] {
        [
            self.age,
            self.bmi,
            self.sex,
            self.log_pct_calorie,
            self.pct_protein,
            self.log_pct_sodium,
            self.ratio_sugar_to_cho,
            self.log_ratio_fat,
            self.ratio_cho,
        ]
    }
}

/// Division that yields 0 for a non-positive denominator
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
