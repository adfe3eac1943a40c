//! Response mapping
//!
//! The API returns every value as a loosely typed string keyed by column
//! codes. Numeric columns that do not parse are stored as zero.

use serde_json::Value;

use crate::models::Food;

/// Column code to food field, in the order they are applied
const FIELD_MAP: &[(&str, Field)] = &[
    ("FOOD_NM_KR", Field::FoodName),
    ("FOOD_CAT1_NM", Field::Category),
    ("AMT_NUM1", Field::CaloriesKcal),
    ("AMT_NUM3", Field::ProteinG),
    ("AMT_NUM4", Field::FatG),
    ("AMT_NUM6", Field::CarbsG),
    ("AMT_NUM7", Field::SugarG),
    ("AMT_NUM8", Field::FiberG),
    ("AMT_NUM9", Field::CalciumMg),
    ("AMT_NUM13", Field::SodiumMg),
];

#[derive(Debug, Clone, Copy)]
enum Field {
    FoodName,
    Category,
    CaloriesKcal,
    ProteinG,
    FatG,
    CarbsG,
    SugarG,
    FiberG,
    CalciumMg,
    SodiumMg,
}

/// Pick the most recently updated row from an API response and map it
///
/// Returns `None` when `body.totalCount` is missing or below one.
pub fn parse_response(response: &Value) -> Option<Food> {
    let body = response.get("body")?;
    let total_count = body.get("totalCount").and_then(as_number).unwrap_or(0.0);
    if total_count < 1.0 {
        return None;
    }

    let items = body.get("items")?.as_array()?;
    let latest = items.iter().fold(None::<&Value>, |best, item| match best {
        Some(b) if update_date(item) <= update_date(b) => Some(b),
        _ => Some(item),
    })?;

    Some(parse_row(latest))
}

/// Map a single API row onto a Food, leaving unknown columns untouched
pub fn parse_row(row: &Value) -> Food {
    let mut food = Food::default();
    let Some(columns) = row.as_object() else {
        return food;
    };

    for (code, field) in FIELD_MAP {
        let Some(raw) = columns.get(*code) else {
            continue;
        };
        match field {
            Field::FoodName => food.food_name = as_text(raw).unwrap_or_default(),
            Field::Category => food.category = as_text(raw),
            Field::CaloriesKcal => food.calories_kcal = as_number(raw).unwrap_or(0.0),
            Field::ProteinG => food.protein_g = Some(as_number(raw).unwrap_or(0.0)),
            Field::FatG => food.fat_g = Some(as_number(raw).unwrap_or(0.0)),
            Field::CarbsG => food.carbs_g = Some(as_number(raw).unwrap_or(0.0)),
            Field::SugarG => food.sugar_g = Some(as_number(raw).unwrap_or(0.0)),
            Field::FiberG => food.fiber_g = Some(as_number(raw).unwrap_or(0.0)),
            Field::CalciumMg => food.calcium_mg = Some(as_number(raw).unwrap_or(0.0)),
            Field::SodiumMg => food.sodium_mg = Some(as_number(raw).unwrap_or(0.0)),
        }
    }

    food
}

fn update_date(item: &Value) -> &str {
    item.get("UPDATE_DATE").and_then(Value::as_str).unwrap_or("")
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(name: &str, updated: &str, kcal: &str) -> Value {
        json!({
            "FOOD_NM_KR": name,
            "FOOD_CAT1_NM": "과자류",
            "AMT_NUM1": kcal,
            "AMT_NUM3": "2.5",
            "AMT_NUM4": "",
            "AMT_NUM6": "30",
            "AMT_NUM7": "12.1",
            "AMT_NUM8": "-",
            "AMT_NUM9": null,
            "AMT_NUM13": 180,
            "UPDATE_DATE": updated,
            "ITEM_REPORT_NO": "19780614001"
        })
    }

    #[test]
    fn test_parse_row_coerces_numbers() {
        let food = parse_row(&row("새우깡", "2024-01-01", "120"));
        assert_eq!(food.food_id, None);
        assert_eq!(food.food_name, "새우깡");
        assert_eq!(food.category.as_deref(), Some("과자류"));
        assert_eq!(food.calories_kcal, 120.0);
        assert_eq!(food.protein_g, Some(2.5));
        assert_eq!(food.carbs_g, Some(30.0));
        assert_eq!(food.sugar_g, Some(12.1));
        assert_eq!(food.sodium_mg, Some(180.0));
    }

    #[test]
    fn test_unparseable_numbers_become_zero() {
        let food = parse_row(&row("새우깡", "2024-01-01", "N/A"));
        assert_eq!(food.calories_kcal, 0.0);
        assert_eq!(food.fat_g, Some(0.0));
        assert_eq!(food.fiber_g, Some(0.0));
        assert_eq!(food.calcium_mg, Some(0.0));
    }

    #[test]
    fn test_missing_columns_stay_unset() {
        let food = parse_row(&json!({"FOOD_NM_KR": "물", "AMT_NUM1": "0"}));
        assert_eq!(food.food_name, "물");
        assert_eq!(food.category, None);
        assert_eq!(food.protein_g, None);
        assert_eq!(food.sodium_mg, None);
    }

    #[test]
    fn test_parse_response_picks_latest_update() {
        let response = json!({
            "header": {"resultCode": "00"},
            "body": {
                "totalCount": 3,
                "items": [
                    row("old", "2021-05-01", "100"),
                    row("newest", "2023-09-12", "110"),
                    row("middle", "2022-02-02", "105")
                ]
            }
        });
        let food = parse_response(&response).unwrap();
        assert_eq!(food.food_name, "newest");
        assert_eq!(food.calories_kcal, 110.0);
    }

    #[test]
    fn test_parse_response_keeps_first_on_tie() {
        let response = json!({
            "body": {
                "totalCount": "2",
                "items": [row("first", "2023-01-01", "1"), row("second", "2023-01-01", "2")]
            }
        });
        assert_eq!(parse_response(&response).unwrap().food_name, "first");
    }

    #[test]
    fn test_parse_response_empty() {
        assert!(parse_response(&json!({})).is_none());
        assert!(parse_response(&json!({"body": {"totalCount": 0, "items": []}})).is_none());
        assert!(parse_response(&json!({"body": {"items": [row("x", "2020", "1")]}})).is_none());
    }
}
