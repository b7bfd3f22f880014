use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// SchoolStyle - many-to-many join between schools and styles
///
/// Pure association row; cascades on delete of either parent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SchoolStyle {
    pub school_id: String,
    pub style_id: i64,
}

impl SchoolStyle {
    /// Link a school to a style. Re-linking an existing pair is a no-op.
    pub async fn create(school_id: &str, style_id: i64, pool: &SqlitePool) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO school_styles (school_id, style_id) VALUES (?, ?)")
            .bind(school_id)
            .bind(style_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
