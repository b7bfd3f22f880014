use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// School - a single yoga studio in the directory
///
/// The id is a stable slug, globally unique and immutable once created. It
/// doubles as the dedup key for the import pipeline (create-vs-skip).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub neighborhood: Option<String>,
    pub website_url: String,
    pub phone: Option<String>,
    pub email: Option<String>,

    // Pricing in PLN. A trial price of exactly zero means a free trial
    // class, distinct from None ("unknown").
    pub price: Option<f64>,
    pub trial_price: Option<f64>,
    pub single_class_price: Option<f64>,
    pub pricing_notes: Option<String>,

    // Externally sourced aggregates
    pub rating: Option<f64>,
    pub reviews: Option<i64>,

    // Content
    pub description_raw: String,
    pub description: String,
    pub editorial_summary: String,
    pub opening_hours: String,
    pub image_url: String,

    // Location
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    // External identifiers
    pub google_place_id: String,
    pub google_maps_url: String,

    // Provenance
    pub last_price_check: Option<NaiveDate>,
    pub last_updated: NaiveDate,
    pub source: String, // 'manual', 'crawl4ai', 'google-places'
}

/// Approximate city centroid: arithmetic mean over geocoded schools only.
/// Consumed by the "nearest city" geolocation heuristic, nothing else.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CityCoords {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Record provenance enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SchoolSource {
    Manual,
    Crawl4ai,
    GooglePlaces,
}

impl std::fmt::Display for SchoolSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchoolSource::Manual => write!(f, "manual"),
            SchoolSource::Crawl4ai => write!(f, "crawl4ai"),
            SchoolSource::GooglePlaces => write!(f, "google-places"),
        }
    }
}

impl std::str::FromStr for SchoolSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "manual" => Ok(SchoolSource::Manual),
            "crawl4ai" => Ok(SchoolSource::Crawl4ai),
            "google-places" => Ok(SchoolSource::GooglePlaces),
            _ => Err(anyhow::anyhow!("Invalid school source: {}", s)),
        }
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl School {
    /// Find school by slug. Absence is a valid result, not an error.
    pub async fn find_by_id(id: &str, pool: &SqlitePool) -> Result<Option<Self>> {
        sqlx::query_as::<_, School>("SELECT * FROM schools WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All schools, ordered by (city, name) ascending.
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, School>("SELECT * FROM schools ORDER BY city, name")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Case-insensitive exact match on city name, name-sorted.
    pub async fn find_by_city(city: &str, pool: &SqlitePool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, School>(
            "SELECT * FROM schools WHERE LOWER(city) = LOWER(?) ORDER BY name",
        )
        .bind(city)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Schools associated with a style, name-sorted.
    pub async fn find_by_style_id(style_id: i64, pool: &SqlitePool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, School>(
            r#"
            SELECT s.* FROM schools s
            JOIN school_styles ss ON ss.school_id = s.id
            WHERE ss.style_id = ?
            ORDER BY s.name
            "#,
        )
        .bind(style_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Distinct city values, sorted ascending. Also the validity list for
    /// city route parameters.
    pub async fn unique_cities(pool: &SqlitePool) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT city FROM schools ORDER BY city")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Per-city mean coordinates across geocoded schools. Cities where no
    /// school has coordinates are omitted entirely.
    pub async fn city_coords(pool: &SqlitePool) -> Result<Vec<CityCoords>> {
        sqlx::query_as::<_, CityCoords>(
            r#"
            SELECT city, AVG(latitude) AS latitude, AVG(longitude) AS longitude
            FROM schools
            WHERE latitude IS NOT NULL AND longitude IS NOT NULL
            GROUP BY city
            ORDER BY city
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert this school (returns the stored record).
    pub async fn insert(&self, pool: &SqlitePool) -> Result<Self> {
        sqlx::query_as::<_, School>(
            r#"
            INSERT INTO schools (
                id, name, city, address, neighborhood, website_url, phone, email,
                price, trial_price, single_class_price, pricing_notes,
                rating, reviews,
                description_raw, description, editorial_summary, opening_hours, image_url,
                latitude, longitude, google_place_id, google_maps_url,
                last_price_check, last_updated, source
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&self.id)
        .bind(&self.name)
        .bind(&self.city)
        .bind(&self.address)
        .bind(&self.neighborhood)
        .bind(&self.website_url)
        .bind(&self.phone)
        .bind(&self.email)
        .bind(self.price)
        .bind(self.trial_price)
        .bind(self.single_class_price)
        .bind(&self.pricing_notes)
        .bind(self.rating)
        .bind(self.reviews)
        .bind(&self.description_raw)
        .bind(&self.description)
        .bind(&self.editorial_summary)
        .bind(&self.opening_hours)
        .bind(&self.image_url)
        .bind(self.latitude)
        .bind(self.longitude)
        .bind(&self.google_place_id)
        .bind(&self.google_maps_url)
        .bind(self.last_price_check)
        .bind(self.last_updated)
        .bind(&self.source)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
