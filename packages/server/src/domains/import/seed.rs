use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::domains::import::records::SchoolRecord;
use crate::domains::schedules::models::ScheduleEntry;
use crate::domains::schools::models::{School, SchoolSource};
use crate::domains::styles::models::{SchoolStyle, Style};

/// Outcome counters for one import run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportSummary {
    pub schools_created: usize,
    pub schools_skipped: usize,
    pub styles_created: usize,
    pub schedule_entries_created: usize,
}

/// Read a `data.json`-shaped file and import it.
pub async fn import_file(path: &Path, pool: &SqlitePool) -> Result<ImportSummary> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed data file {}", path.display()))?;
    let records: Vec<SchoolRecord> =
        serde_json::from_str(&raw).context("Failed to parse seed data")?;
    import_records(records, pool).await
}

/// Import flat listing records into the normalized tables.
///
/// Skip-if-exists-by-id: a record whose school id is already present is
/// skipped wholesale, so re-running the same input is a no-op and manually
/// curated rows are never clobbered by a re-import. Styles are resolved by
/// exact name (created when missing) and linked; schedule entries are
/// inserted verbatim for newly created schools.
pub async fn import_records(
    records: Vec<SchoolRecord>,
    pool: &SqlitePool,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for record in records {
        record
            .source
            .parse::<SchoolSource>()
            .with_context(|| format!("Record {} has an invalid source tag", record.id))?;

        if School::find_by_id(&record.id, pool).await?.is_some() {
            tracing::debug!(id = %record.id, "school exists, skipping");
            summary.schools_skipped += 1;
            continue;
        }

        let styles = record.styles.clone();
        let schedule = record.schedule.clone();
        let school = record
            .into_school()
            .insert(pool)
            .await
            .context("Failed to insert school")?;

        for name in &styles {
            let style = match Style::find_by_name(name, pool).await? {
                Some(style) => style,
                None => {
                    summary.styles_created += 1;
                    Style::find_or_create(name, pool).await?
                }
            };
            SchoolStyle::create(&school.id, style.id, pool).await?;
        }

        for entry in &schedule {
            ScheduleEntry::create(
                &school.id,
                &entry.day,
                &entry.time,
                &entry.class_name,
                entry.instructor.as_deref(),
                entry.level.as_deref(),
                pool,
            )
            .await?;
            summary.schedule_entries_created += 1;
        }

        tracing::info!(id = %school.id, city = %school.city, styles = styles.len(), "created school");
        summary.schools_created += 1;
    }

    tracing::info!(
        created = summary.schools_created,
        skipped = summary.schools_skipped,
        styles_created = summary.styles_created,
        schedule_entries = summary.schedule_entries_created,
        "import finished"
    );

    Ok(summary)
}
