//! HTTP client for the food nutrient database

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use super::mapping::parse_response;
use crate::config::Config;
use crate::models::Food;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const ROWS_PER_PAGE: u32 = 100;

/// Nutrition API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("NUTRITION_API_KEY is not set")]
    MissingApiKey,

    #[error("Nutrition API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the food nutrient database API
#[derive(Debug, Clone)]
pub struct FoodNutritionClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl FoodNutritionClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let api_key = config
            .nutrition_api_key
            .clone()
            .ok_or(ApiError::MissingApiKey)?;
        Self::new(api_key, config.nutrition_api_url.clone())
    }

    /// Fetch nutrient facts for a product report number
    pub async fn fetch_food(&self, report_no: &str) -> Result<Option<Food>, ApiError> {
        let response = self.fetch(&[("ITEM_REPORT_NO", report_no)]).await?;
        let food = parse_response(&response);
        tracing::debug!(report_no, found = food.is_some(), "nutrition api lookup");
        Ok(food)
    }

    /// Raw GET with the default query merged under `extra`
    pub async fn fetch(&self, extra: &[(&str, &str)]) -> Result<Value, ApiError> {
        let rows = ROWS_PER_PAGE.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("serviceKey", self.api_key.as_str()),
            ("type", "json"),
            ("numOfRows", rows.as_str()),
        ];
        for (key, value) in extra {
            query.retain(|(k, _)| k != key);
            query.push((*key, *value));
        }

        let value = self
            .http
            .get(&self.base_url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(value)
    }
}
