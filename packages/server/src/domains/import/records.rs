use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::schools::models::School;

/// A flat listing record as produced by the scraping/enrichment pipeline
/// (`data.json`). Field names follow that file's camelCase convention;
/// schedule entries also accept the snake_case keys of older exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub trial_price: Option<f64>,
    #[serde(default)]
    pub single_class_price: Option<f64>,
    #[serde(default)]
    pub pricing_notes: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<i64>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub description_raw: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub editorial_summary: String,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub schedule: Vec<ScheduleRecord>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub google_place_id: String,
    #[serde(default)]
    pub google_maps_url: String,
    #[serde(default)]
    pub last_price_check: Option<NaiveDate>,
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
    #[serde(default = "default_source")]
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub time: String,
    #[serde(default, alias = "class_name")]
    pub class_name: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

fn default_source() -> String {
    "manual".to_string()
}

impl SchoolRecord {
    /// The school row this record maps to. Styles and schedule are handled
    /// separately by the importer.
    pub fn into_school(self) -> School {
        School {
            id: self.id,
            name: self.name,
            city: self.city,
            address: self.address,
            neighborhood: self.neighborhood,
            website_url: self.website_url,
            phone: self.phone,
            email: self.email,
            price: self.price,
            trial_price: self.trial_price,
            single_class_price: self.single_class_price,
            pricing_notes: self.pricing_notes,
            rating: self.rating,
            reviews: self.reviews,
            description_raw: self.description_raw,
            description: self.description,
            editorial_summary: self.editorial_summary,
            opening_hours: self.opening_hours,
            image_url: self.image_url,
            latitude: self.latitude,
            longitude: self.longitude,
            google_place_id: self.google_place_id,
            google_maps_url: self.google_maps_url,
            last_price_check: self.last_price_check,
            last_updated: self.last_updated.unwrap_or_else(|| Utc::now().date_naive()),
            source: self.source,
        }
    }
}
