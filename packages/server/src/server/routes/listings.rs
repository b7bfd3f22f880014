use axum::extract::{Extension, Path, Query};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domains::listings::models::{Freshness, Listing};
use crate::domains::schools::models::{CityCoords, School};
use crate::domains::styles::models::Style;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListingsQuery {
    pub city: Option<String>,
    pub style: Option<String>,
}

/// GET /api/listings - the directory, optionally scoped by `?city=` and/or
/// `?style=`.
///
/// City pages are routed off the unique-cities list, so an unknown city is
/// a 404; an unknown style is a valid empty result.
pub async fn list_listings(
    Extension(state): Extension<AppState>,
    Query(query): Query<ListingsQuery>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    let listings = match (&query.city, &query.style) {
        (Some(city), style) => {
            let cities = School::unique_cities(&state.db_pool).await?;
            if !cities.iter().any(|c| c.eq_ignore_ascii_case(city)) {
                return Err(ApiError::NotFound);
            }
            let mut listings = Listing::get_by_city(city, &state.db_pool).await?;
            if let Some(style) = style {
                listings.retain(|l| l.styles.iter().any(|s| s.eq_ignore_ascii_case(style)));
            }
            listings
        }
        (None, Some(style)) => Listing::get_by_style(style, &state.db_pool).await?,
        (None, None) => Listing::get_all(&state.db_pool).await?,
    };

    Ok(Json(listings))
}

#[derive(Debug, Serialize)]
pub struct ListingDetail {
    #[serde(flatten)]
    pub listing: Listing,
    pub freshness: Freshness,
}

/// GET /api/listings/{id} - one listing, with its price-data freshness and
/// the schedule in canonical day order.
pub async fn get_listing(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingDetail>, ApiError> {
    let Some(mut listing) = Listing::get_by_id(&id, &state.db_pool).await? else {
        return Err(ApiError::NotFound);
    };

    listing.schedule = listing.schedule_by_day();
    let freshness = listing.freshness(Utc::now().date_naive());

    Ok(Json(ListingDetail { listing, freshness }))
}

/// GET /api/cities - distinct city names, ascending.
pub async fn list_cities(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(School::unique_cities(&state.db_pool).await?))
}

/// GET /api/cities/coords - approximate city centroids for the nearest-city
/// heuristic.
pub async fn city_coords(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<CityCoords>>, ApiError> {
    Ok(Json(School::city_coords(&state.db_pool).await?))
}

/// GET /api/styles - distinct style names, ascending.
pub async fn list_styles(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(Style::unique_names(&state.db_pool).await?))
}
