//! Public nutrition database client
//!
//! Fetches nutrient facts by product report number and maps the API's
//! row format onto [`Food`](crate::models::Food).

mod client;
mod mapping;

pub use client::{ApiError, FoodNutritionClient};
pub use mapping::{parse_response, parse_row};
