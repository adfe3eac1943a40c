//! Score computation
//!
//! The score is relative: the model is asked about the user's diet on a
//! fixed reference profile (the avatar), and that risk is mapped onto
//! 0-100 with piecewise linear bands.

use tracing::{debug, warn};

use super::{DietFeatures, RiskModel, ScoreError};
use crate::models::{DietScore, RiskLevel, UserDietInfo};

/// Risk band edges, lowest first
const RISK_EXCELLENT: f64 = 0.20;
const RISK_GOOD: f64 = 0.53;
const RISK_FAIR: f64 = 0.68;
const RISK_CEILING: f64 = 0.91;

/// Map the avatar's predicted risk onto a 0-100 score
///
/// - up to 0.20: 100
/// - 0.20-0.53: 80-100
/// - 0.53-0.68: 40-80
/// - 0.68-0.91: 0-40, anything above is 0
pub fn score_from_avatar_risk(risk: f64) -> i32 {
    let score = if risk <= RISK_EXCELLENT {
        100.0
    } else if risk <= RISK_GOOD {
        80.0 + (RISK_GOOD - risk) / (RISK_GOOD - RISK_EXCELLENT) * 20.0
    } else if risk <= RISK_FAIR {
        40.0 + (RISK_FAIR - risk) / (RISK_FAIR - RISK_GOOD) * 40.0
    } else {
        (RISK_CEILING - risk) / (RISK_CEILING - RISK_FAIR) * 40.0
    };

    score.clamp(0.0, 100.0) as i32
}

/// Score one user
pub fn score_user<M: RiskModel + ?Sized>(model: &M, user: &UserDietInfo) -> Result<DietScore, ScoreError> {
    let features = DietFeatures::from_diet(user)?;

    let real_risk = checked_risk(model.predict_risk(&features)?)?;
    let avatar_risk = checked_risk(model.predict_risk(&features.as_avatar())?)?;

    let score = score_from_avatar_risk(avatar_risk);
    let risk_level = RiskLevel::from_score(score);
    debug!(user_id = user.user_id, score, risk_level = risk_level.as_str(), "scored user");
    Ok(DietScore {
        user_id: user.user_id,
        score,
        similarity: (real_risk * 100.0) as i32,
        risk_level,
    })
}

/// Model output must be a probability
fn checked_risk(risk: f64) -> Result<f64, ScoreError> {
    if risk.is_finite() && (0.0..=1.0).contains(&risk) {
        Ok(risk)
    } else {
        Err(ScoreError::Model(format!("risk out of range: {risk}")))
    }
}

/// Score every user; users that fail are logged and left out
pub fn score_users<M: RiskModel + ?Sized>(model: &M, users: &[UserDietInfo]) -> Vec<DietScore> {
    users
        .iter()
        .filter_map(|user| match score_user(model, user) {
            Ok(score) => Some(score),
            Err(e) => {
                warn!(user_id = user.user_id, error = %e, "skipping user in diet scoring");
                None
            }
        })
        .collect()
}
