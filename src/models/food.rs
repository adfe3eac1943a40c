//! Food nutrition model
//!
//! Per-food nutrient facts, cached locally after they are pulled from the
//! public nutrition database.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// Nutrient facts for one food
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub food_id: Option<i64>,
    pub food_name: String,
    pub category: Option<String>,
    pub calories_kcal: f64,
    pub carbs_g: Option<f64>,
    pub protein_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub sugar_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub calcium_mg: Option<f64>,
}

impl Food {
    /// Create a Food from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            food_id: row.get("food_id")?,
            food_name: row.get("food_name")?,
            category: row.get("category")?,
            calories_kcal: row.get("calories_kcal")?,
            carbs_g: row.get("carbs_g")?,
            protein_g: row.get("protein_g")?,
            fat_g: row.get("fat_g")?,
            sugar_g: row.get("sugar_g")?,
            fiber_g: row.get("fiber_g")?,
            sodium_mg: row.get("sodium_mg")?,
            calcium_mg: row.get("calcium_mg")?,
        })
    }

    /// Get a food by its exact name
    pub fn get_by_name(conn: &Connection, food_name: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM food_nutrition WHERE food_name = ?1")?;

        let result = stmt.query_row([food_name], Self::from_row);
        match result {
            Ok(food) => Ok(Some(food)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert a food and return the stored row
    ///
    /// `food_id` on the input is ignored. When the name is already stored the
    /// existing row is kept and returned.
    pub fn insert(conn: &Connection, food: &Food) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO food_nutrition (
                food_name, category, calories_kcal, carbs_g, protein_g,
                fat_g, sugar_g, fiber_g, sodium_mg, calcium_mg
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(food_name) DO NOTHING
            "#,
            params![
                food.food_name,
                food.category,
                food.calories_kcal,
                food.carbs_g,
                food.protein_g,
                food.fat_g,
                food.sugar_g,
                food.fiber_g,
                food.sodium_mg,
                food.calcium_mg,
            ],
        )?;

        Self::get_by_name(conn, &food.food_name)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Number of stored foods
    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM food_nutrition", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn kimchi() -> Food {
        Food {
            food_id: None,
            food_name: "배추김치".to_string(),
            category: Some("김치류".to_string()),
            calories_kcal: 18.0,
            carbs_g: Some(3.2),
            protein_g: Some(1.4),
            fat_g: Some(0.3),
            sugar_g: None,
            fiber_g: Some(2.6),
            sodium_mg: Some(498.0),
            calcium_mg: None,
        }
    }

    #[test]
    fn test_insert_assigns_id_and_round_trips() {
        let conn = conn();
        let stored = Food::insert(&conn, &kimchi()).unwrap();

        assert!(stored.food_id.is_some());
        assert_eq!(Food { food_id: None, ..stored.clone() }, kimchi());
        assert_eq!(stored.sugar_g, None);
    }

    #[test]
    fn test_get_by_name() {
        let conn = conn();
        Food::insert(&conn, &kimchi()).unwrap();

        let found = Food::get_by_name(&conn, "배추김치").unwrap().unwrap();
        assert_eq!(found.category.as_deref(), Some("김치류"));
        assert!(Food::get_by_name(&conn, "배추 김치").unwrap().is_none());
    }

    #[test]
    fn test_count() {
        let conn = conn();
        assert_eq!(Food::count(&conn).unwrap(), 0);
        Food::insert(&conn, &kimchi()).unwrap();
        Food::insert(&conn, &Food { food_name: "두부".to_string(), ..Default::default() }).unwrap();
        assert_eq!(Food::count(&conn).unwrap(), 2);
    }

    #[test]
    fn test_insert_same_name_keeps_first_row() {
        let conn = conn();
        let first = Food::insert(&conn, &kimchi()).unwrap();
        let second = Food::insert(&conn, &Food { calories_kcal: 99.0, ..kimchi() }).unwrap();

        assert_eq!(second, first);
        assert_eq!(second.calories_kcal, 18.0);
        assert_eq!(Food::count(&conn).unwrap(), 1);
    }
}
