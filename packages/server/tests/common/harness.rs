use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied.
///
/// Capped at one connection: every pooled connection to `sqlite::memory:`
/// would otherwise get its own empty database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect to in-memory sqlite");

    server_core::MIGRATOR
        .run(&pool)
        .await
        .expect("run migrations");

    pool
}
