//! Runtime configuration
//!
//! Everything is read from the environment. The binary loads a `.env`
//! file into it first when one is present.

use std::path::PathBuf;

/// Default endpoint of the food nutrient database API
pub const DEFAULT_NUTRITION_API_URL: &str =
    "https://apis.data.go.kr/1471000/FoodNtrCpntDbInfo02/getFoodNtrCpntDbInq02";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub nutrition_api_key: Option<String>,
    pub nutrition_api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_path: database_path_from_env(),
            nutrition_api_key: std::env::var("NUTRITION_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            nutrition_api_url: std::env::var("NUTRITION_API_URL")
                .unwrap_or_else(|_| DEFAULT_NUTRITION_API_URL.to_string()),
        }
    }
}

/// Get the database path from environment or use default
fn database_path_from_env() -> PathBuf {
    std::env::var("SAVEUS_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
                    path = grandparent.to_path_buf();
                }
            }

            path.push("data");
            path.push("saveus.db");
            path
        })
}
