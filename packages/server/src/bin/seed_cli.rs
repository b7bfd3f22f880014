//! Seed the directory database from a `data.json` export.
//!
//! Re-running with the same input is a no-op: schools are matched by slug
//! and skipped when already present.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use server_core::common::db::connect_pool;
use server_core::config::Config;
use server_core::domains::import::import_file;

#[derive(Parser)]
#[command(name = "seed_cli")]
#[command(about = "Import data.json listing records into the directory database")]
struct Cli {
    /// Path to the data.json export
    #[arg(long, default_value = "data.json")]
    file: PathBuf,

    /// Database URL (defaults to DATABASE_URL from the environment)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let database_url = cli.database_url.unwrap_or(config.database_url);

    let pool = connect_pool(&database_url, 5).await?;
    println!("✓ Connected to database");

    server_core::MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let summary = import_file(&cli.file, &pool).await?;

    println!("\n✨ Seed complete!");
    println!("   Created: {}", summary.schools_created);
    println!("   Skipped: {}", summary.schools_skipped);
    println!("   Styles created: {}", summary.styles_created);
    println!("   Schedule entries: {}", summary.schedule_entries_created);

    Ok(())
}
