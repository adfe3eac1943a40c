//! Diet risk models
//!
//! Weekly nutrition totals per user and the risk score computed from them.

use serde::{Deserialize, Serialize};

/// A user's profile and nutrition totals for the scoring window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDietInfo {
    pub user_id: i64,
    pub age: i32,
    /// 1 = male, 2 = female
    pub sex: i32,
    pub height: f64, // cm
    pub weight: f64, // kg
    pub total_kcal: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub total_protein: f64,
    pub total_sodium: f64,
    pub total_sugar: f64,
}

impl UserDietInfo {
    pub fn is_male(&self) -> bool {
        self.sex == 1
    }
}

/// Risk band shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Danger,
    Warning,
    Good,
}

impl RiskLevel {
    pub fn from_score(score: i32) -> Self {
        if score < 50 {
            RiskLevel::Danger
        } else if score < 80 {
            RiskLevel::Warning
        } else {
            RiskLevel::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Danger => "DANGER",
            RiskLevel::Warning => "WARNING",
            RiskLevel::Good => "GOOD",
        }
    }
}

/// Score result for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietScore {
    pub user_id: i64,
    /// 0-100, higher is healthier
    pub score: i32,
    /// Predicted risk as a percentage
    pub similarity: i32,
    pub risk_level: RiskLevel,
}
