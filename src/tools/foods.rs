//! Food Nutrition Tools
//!
//! Lookup and import of food nutrient facts. Imports check the local cache
//! first and only call the public API on a miss.

use tracing::info;

use crate::db::Database;
use crate::models::Food;
use crate::nutrition_api::FoodNutritionClient;

/// Food names are stored with every space removed
pub fn normalize_food_name(name: &str) -> String {
    name.chars().filter(|c| *c != ' ').collect()
}

/// Look up a stored food by name
pub fn get_food_nutrition(db: &Database, food_name: &str) -> Result<Option<Food>, String> {
    let name = normalize_food_name(food_name);
    if name.is_empty() {
        return Err("food_name cannot be empty".to_string());
    }

    db.with_conn(|conn| Food::get_by_name(conn, &name))
        .map_err(|e| format!("Failed to get food: {}", e))
}

/// Return the stored food, or fetch it by report number and store it
///
/// `Ok(None)` means the API has no row for the report number. A missing
/// client is only an error when the food is not stored yet.
pub async fn import_food_nutrition(
    db: &Database,
    client: Option<&FoodNutritionClient>,
    food_name: &str,
    report_no: &str,
) -> Result<Option<Food>, String> {
    if let Some(food) = get_food_nutrition(db, food_name)? {
        return Ok(Some(food));
    }
    let name = normalize_food_name(food_name);
    let client = client
        .ok_or_else(|| "Nutrition API is not configured (set NUTRITION_API_KEY)".to_string())?;

    let fetched = client
        .fetch_food(report_no.trim())
        .await
        .map_err(|e| format!("Failed to fetch food: {}", e))?;

    let Some(mut food) = fetched else {
        return Ok(None);
    };
    food.food_name = name;

    let stored = db
        .with_conn(|conn| Food::insert(conn, &food))
        .map_err(|e| format!("Failed to store food: {}", e))?;

    info!(food_id = ?stored.food_id, food_name = %stored.food_name, report_no, "imported food nutrition");
    Ok(Some(stored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn database(dir: &tempfile::TempDir) -> Database {
        let db = Database::new(dir.path().join("foods.db")).unwrap();
        db.with_conn(run_migrations).unwrap();
        db
    }

    #[test]
    fn test_normalize_food_name() {
        assert_eq!(normalize_food_name(" 초코 파이 "), "초코파이");
        assert_eq!(normalize_food_name("kimchi"), "kimchi");
    }

    #[test]
    fn test_get_food_nutrition_normalizes_name() {
        let dir = tempfile::tempdir().unwrap();
        let db = database(&dir);
        db.with_conn(|conn| {
            Food::insert(conn, &Food { food_name: "초코파이".into(), calories_kcal: 171.0, ..Default::default() })
        })
        .unwrap();

        let food = get_food_nutrition(&db, "초코 파이").unwrap().unwrap();
        assert_eq!(food.calories_kcal, 171.0);
        assert!(get_food_nutrition(&db, "몽쉘").unwrap().is_none());
        assert!(get_food_nutrition(&db, "  ").is_err());
    }

    #[tokio::test]
    async fn test_import_fetches_and_stores_once() {
        let dir = tempfile::tempdir().unwrap();
        let db = database(&dir);

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_body(
                r#"{"body": {"totalCount": 1, "items": [
                    {"FOOD_NM_KR": "오리온 초코파이", "AMT_NUM1": "171", "UPDATE_DATE": "2024-01-01"}
                ]}}"#,
            )
            .expect(1)
            .create_async()
            .await;
        let client = FoodNutritionClient::new("secret", server.url()).unwrap();

        let first = import_food_nutrition(&db, Some(&client), "초코 파이", "19760342001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.food_name, "초코파이");
        assert!(first.food_id.is_some());

        let second = import_food_nutrition(&db, Some(&client), "초코파이", "19760342001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(second, first);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_import_unknown_report_number() {
        let dir = tempfile::tempdir().unwrap();
        let db = database(&dir);

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_body(r#"{"body": {"totalCount": 0, "items": []}}"#)
            .create_async()
            .await;
        let client = FoodNutritionClient::new("secret", server.url()).unwrap();

        let result = import_food_nutrition(&db, Some(&client), "없는과자", "0").await.unwrap();
        assert!(result.is_none());
        assert_eq!(db.with_conn(|conn| Food::count(conn)).unwrap(), 0);
    }

    #[tokio::test]
    async fn test_import_without_client_uses_stored_food() {
        let dir = tempfile::tempdir().unwrap();
        let db = database(&dir);
        db.with_conn(|conn| {
            Food::insert(conn, &Food { food_name: "초코파이".into(), calories_kcal: 171.0, ..Default::default() })
        })
        .unwrap();

        let food = import_food_nutrition(&db, None, "초코 파이", "19760342001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(food.calories_kcal, 171.0);

        let err = import_food_nutrition(&db, None, "몽쉘", "1").await.unwrap_err();
        assert!(err.contains("NUTRITION_API_KEY"));
    }
}
