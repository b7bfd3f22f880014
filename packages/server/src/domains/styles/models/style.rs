use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Style - a shared vocabulary entry (e.g. "Vinyasa", "Hatha")
///
/// Styles are never deleted when a school drops out of the directory; they
/// are reusable across schools. Stored name uniqueness is case-sensitive,
/// while lookups are case-insensitive, so "Vinyasa" and "vinyasa" can
/// coexist and collide on lookup (see `find_by_name_ci`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Style {
    pub id: i64,
    pub name: String,
}

impl Style {
    /// Case-insensitive name lookup. When several stored styles differ only
    /// by case, the lowest id wins, so repeated lookups stay deterministic.
    pub async fn find_by_name_ci(name: &str, pool: &SqlitePool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Style>(
            "SELECT * FROM styles WHERE LOWER(name) = LOWER(?) ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Exact name lookup (the stored, case-sensitive contract).
    pub async fn find_by_name(name: &str, pool: &SqlitePool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Style>("SELECT * FROM styles WHERE name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Resolve a style by exact name, creating it when missing (import path).
    pub async fn find_or_create(name: &str, pool: &SqlitePool) -> Result<Self> {
        if let Some(style) = Self::find_by_name(name, pool).await? {
            return Ok(style);
        }

        sqlx::query_as::<_, Style>("INSERT INTO styles (name) VALUES (?) RETURNING *")
            .bind(name)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Distinct style names, sorted ascending.
    pub async fn unique_names(pool: &SqlitePool) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT name FROM styles ORDER BY name")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Style names associated with a school, in fetch order (ascending
    /// style id).
    pub async fn names_for_school(school_id: &str, pool: &SqlitePool) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT st.name FROM school_styles ss
            JOIN styles st ON ss.style_id = st.id
            WHERE ss.school_id = ?
            ORDER BY st.id
            "#,
        )
        .bind(school_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
