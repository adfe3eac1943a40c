//! Meal model
//!
//! A meal log record as exchanged with the web layer. The same shape
//! carries single entries and rolled-up summaries, so every field is
//! optional.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Meal log entry or time-of-day aggregate row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub entry_id: Option<i64>,
    pub user_id: Option<i64>,

    pub meal_name: Option<String>,

    /// Display time, "HH:mm"
    pub meal_time: Option<String>,

    pub calories: Option<i32>,
    pub protein: Option<i32>,
    pub carbs: Option<i32>,
    pub fat: Option<i32>,

    pub sugar: Option<i32>,   // grams
    pub fiber: Option<i32>,   // grams
    pub calcium: Option<i32>, // milligrams
    pub sodium: Option<i32>,  // milligrams

    /// Stored timestamp; not kept in sync with `meal_time`
    #[serde(default, with = "iso_local")]
    pub eat_time: Option<NaiveDateTime>,

    /// Calories eaten 05:00-11:00
    pub calories_breakfast: Option<i32>,
    pub protein_breakfast: Option<i32>,
    pub calories_lunch: Option<i32>,
    pub calories_dinner: Option<i32>,
    /// Calories eaten 21:00-04:00
    pub calories_late_night: Option<i32>,

    pub meal_count: Option<i32>,
}

impl fmt::Display for MealEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MealEntry{{entryId={}, userId={}, mealName='{}', mealTime='{}', \
             calories={}, protein={}, carbs={}, fat={}, \
             sugar={}, fiber={}, calcium={}, sodium={}, eatTime={}}}",
            OrNull(&self.entry_id),
            OrNull(&self.user_id),
            OrNull(&self.meal_name),
            OrNull(&self.meal_time),
            OrNull(&self.calories),
            OrNull(&self.protein),
            OrNull(&self.carbs),
            OrNull(&self.fat),
            OrNull(&self.sugar),
            OrNull(&self.fiber),
            OrNull(&self.calcium),
            OrNull(&self.sodium),
            OrNull(&self.eat_time.map(IsoLocal)),
        )
    }
}

/// Renders `None` as `null`
struct OrNull<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => fmt::Display::fmt(v, f),
            None => f.write_str("null"),
        }
    }
}

/// ISO local date-time that drops zero seconds and trailing zero fraction groups
struct IsoLocal(NaiveDateTime);

impl fmt::Display for IsoLocal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.0;
        write!(f, "{}", dt.format("%Y-%m-%dT%H:%M"))?;

        let nanos = dt.nanosecond() % 1_000_000_000;
        if dt.second() == 0 && nanos == 0 {
            return Ok(());
        }
        write!(f, ":{:02}", dt.second())?;

        if nanos == 0 {
            Ok(())
        } else if nanos % 1_000_000 == 0 {
            write!(f, ".{:03}", nanos / 1_000_000)
        } else if nanos % 1_000 == 0 {
            write!(f, ".{:06}", nanos / 1_000)
        } else {
            write!(f, ".{:09}", nanos)
        }
    }
}

/// ISO local date-time on the wire; seconds and fraction optional when parsing
mod iso_local {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
    const READ_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.collect_str(&dt.format(WRITE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        READ_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&raw, fmt).ok())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid local date-time: {raw}")))
    }
}
