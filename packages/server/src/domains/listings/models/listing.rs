use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::domains::schedules::models::schedule_entry::{day_order, ScheduleEntry};
use crate::domains::schools::models::School;
use crate::domains::styles::models::Style;

/// Listing - a school denormalized with its style names and weekly schedule
///
/// The unit every consumer works with. Never persisted: always recomputed
/// from the three normalized tables on read.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    #[serde(flatten)]
    pub school: School,
    pub styles: Vec<String>,
    pub schedule: Vec<ScheduleEntry>,
}

/// Categorical staleness of a listing's price data, derived from days since
/// the last price verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Fresh,
    Aging,
    Stale,
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Freshness::Fresh => write!(f, "fresh"),
            Freshness::Aging => write!(f, "aging"),
            Freshness::Stale => write!(f, "stale"),
        }
    }
}

// =============================================================================
// Query surface
// =============================================================================

impl Listing {
    /// Every school, hydrated, ordered by (city, name) ascending.
    ///
    /// No pagination at this layer; the full result set is returned. Cheap
    /// at the current catalog scale, and the defining ceiling of this
    /// component if the catalog ever grows past that.
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Self>> {
        Self::hydrate_all(School::find_all(pool).await?, pool).await
    }

    /// Single hydrated listing. Absence is `None`, never an error.
    pub async fn get_by_id(id: &str, pool: &SqlitePool) -> Result<Option<Self>> {
        match School::find_by_id(id, pool).await? {
            Some(school) => Ok(Some(Self::hydrate(school, pool).await?)),
            None => Ok(None),
        }
    }

    /// Case-insensitive exact city match, name-sorted.
    pub async fn get_by_city(city: &str, pool: &SqlitePool) -> Result<Vec<Self>> {
        Self::hydrate_all(School::find_by_city(city, pool).await?, pool).await
    }

    /// Case-insensitive style name match, name-sorted. An unknown style or
    /// one with no associations yields an empty collection, not an error.
    pub async fn get_by_style(style_name: &str, pool: &SqlitePool) -> Result<Vec<Self>> {
        let Some(style) = Style::find_by_name_ci(style_name, pool).await? else {
            return Ok(Vec::new());
        };
        Self::hydrate_all(School::find_by_style_id(style.id, pool).await?, pool).await
    }

    async fn hydrate(school: School, pool: &SqlitePool) -> Result<Self> {
        let styles = Style::names_for_school(&school.id, pool).await?;
        let schedule = ScheduleEntry::find_for_school(&school.id, pool).await?;
        Ok(Self {
            school,
            styles,
            schedule,
        })
    }

    /// Two extra lookups per school. Fine at catalog scale (hundreds of
    /// rows); revisit with a single joined query if that stops being true.
    /// A failed sub-lookup fails the whole request - no partial listings.
    async fn hydrate_all(schools: Vec<School>, pool: &SqlitePool) -> Result<Vec<Self>> {
        let mut listings = Vec::with_capacity(schools.len());
        for school in schools {
            listings.push(Self::hydrate(school, pool).await?);
        }
        Ok(listings)
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Staleness of the price data as of `today`. Never-verified listings
    /// count as stale.
    pub fn freshness(&self, today: NaiveDate) -> Freshness {
        match self.school.last_price_check {
            None => Freshness::Stale,
            Some(checked) => {
                let days = (today - checked).num_days();
                if days <= 30 {
                    Freshness::Fresh
                } else if days <= 90 {
                    Freshness::Aging
                } else {
                    Freshness::Stale
                }
            }
        }
    }

    /// Schedule in canonical presentation order: Monday-first day, then time
    /// range, then insertion order.
    pub fn schedule_by_day(&self) -> Vec<ScheduleEntry> {
        let mut entries = self.schedule.clone();
        entries.sort_by(|a, b| {
            day_order(&a.day)
                .cmp(&day_order(&b.day))
                .then_with(|| a.time.cmp(&b.time))
                .then_with(|| a.id.cmp(&b.id))
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_with(last_price_check: Option<NaiveDate>) -> Listing {
        Listing {
            school: School {
                id: "test-studio".to_string(),
                name: "Test Studio".to_string(),
                city: "Kraków".to_string(),
                address: String::new(),
                neighborhood: None,
                website_url: String::new(),
                phone: None,
                email: None,
                price: None,
                trial_price: None,
                single_class_price: None,
                pricing_notes: None,
                rating: None,
                reviews: None,
                description_raw: String::new(),
                description: String::new(),
                editorial_summary: String::new(),
                opening_hours: String::new(),
                image_url: String::new(),
                latitude: None,
                longitude: None,
                google_place_id: String::new(),
                google_maps_url: String::new(),
                last_price_check,
                last_updated: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                source: "manual".to_string(),
            },
            styles: vec![],
            schedule: vec![],
        }
    }

    #[test]
    fn test_freshness_boundaries() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let days_ago = |n: i64| today - chrono::Duration::days(n);

        assert_eq!(listing_with(Some(today)).freshness(today), Freshness::Fresh);
        assert_eq!(
            listing_with(Some(days_ago(30))).freshness(today),
            Freshness::Fresh
        );
        assert_eq!(
            listing_with(Some(days_ago(31))).freshness(today),
            Freshness::Aging
        );
        assert_eq!(
            listing_with(Some(days_ago(90))).freshness(today),
            Freshness::Aging
        );
        assert_eq!(
            listing_with(Some(days_ago(91))).freshness(today),
            Freshness::Stale
        );
    }

    #[test]
    fn test_never_verified_is_stale() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(listing_with(None).freshness(today), Freshness::Stale);
    }

    #[test]
    fn test_schedule_by_day_orders_monday_first() {
        let mut listing = listing_with(None);
        let entry = |id: i64, day: &str, time: &str| ScheduleEntry {
            id,
            school_id: "test-studio".to_string(),
            day: day.to_string(),
            time: time.to_string(),
            class_name: "Joga".to_string(),
            instructor: None,
            level: None,
        };
        listing.schedule = vec![
            entry(1, "Niedziela", "10:00-11:30"),
            entry(2, "Poniedziałek", "18:00-19:30"),
            entry(3, "Poniedziałek", "08:00-09:30"),
        ];

        let ordered = listing.schedule_by_day();
        assert_eq!(
            ordered.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
    }
}
