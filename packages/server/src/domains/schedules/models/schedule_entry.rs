use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// ScheduleEntry - a single class in a school's weekly schedule
///
/// The day is a Polish label as scraped ("Poniedziałek", ...), the time a
/// single "HH:MM-HH:MM" range string. Storage keeps entries unordered;
/// presentation imposes the canonical Monday-first ordering via `day_order`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: i64,
    pub school_id: String,
    pub day: String,
    pub time: String,
    pub class_name: String,
    pub instructor: Option<String>,
    pub level: Option<String>,
}

impl ScheduleEntry {
    /// All entries for a school, in insertion order.
    pub async fn find_for_school(school_id: &str, pool: &SqlitePool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, ScheduleEntry>(
            "SELECT * FROM schedule_entries WHERE school_id = ? ORDER BY id",
        )
        .bind(school_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert a new entry (returns the stored record).
    pub async fn create(
        school_id: &str,
        day: &str,
        time: &str,
        class_name: &str,
        instructor: Option<&str>,
        level: Option<&str>,
        pool: &SqlitePool,
    ) -> Result<Self> {
        sqlx::query_as::<_, ScheduleEntry>(
            r#"
            INSERT INTO schedule_entries (school_id, day, time, class_name, instructor, level)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(school_id)
        .bind(day)
        .bind(time)
        .bind(class_name)
        .bind(instructor)
        .bind(level)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// Canonical Monday-first position of a Polish day label. Unknown labels
/// sort after every known day.
pub fn day_order(day: &str) -> usize {
    match day.trim().to_lowercase().as_str() {
        "poniedziałek" => 0,
        "wtorek" => 1,
        "środa" => 2,
        "czwartek" => 3,
        "piątek" => 4,
        "sobota" => 5,
        "niedziela" => 6,
        _ => 7,
    }
}
