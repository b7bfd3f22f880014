//! Coarse geolocation helpers for the "nearest city" affordance.

use std::cmp::Ordering;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::schools::models::CityCoords;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinate pairs.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// The city centroid closest to the given position. City centroids are
/// averaged school coordinates, so this is a coarse "which city are you
/// probably in" heuristic, nothing more.
pub fn nearest_city(latitude: f64, longitude: f64, cities: &[CityCoords]) -> Option<&CityCoords> {
    cities.iter().min_by(|a, b| {
        let da = haversine_km(latitude, longitude, a.latitude, a.longitude);
        let db = haversine_km(latitude, longitude, b.latitude, b.longitude);
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    })
}

/// Best-effort position source (browser geolocation in the web client).
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<(f64, f64)>;
}

/// Resolve the caller's nearest directory city. Best effort: a provider
/// failure or timeout yields `None` and the caller's view state stays
/// untouched.
pub async fn locate_nearest_city(
    provider: &dyn GeolocationProvider,
    cities: &[CityCoords],
    timeout: Duration,
) -> Option<String> {
    match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(Ok((latitude, longitude))) => {
            nearest_city(latitude, longitude, cities).map(|c| c.city.clone())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<CityCoords> {
        vec![
            CityCoords {
                city: "Kraków".to_string(),
                latitude: 50.06,
                longitude: 19.94,
            },
            CityCoords {
                city: "Warszawa".to_string(),
                latitude: 52.23,
                longitude: 21.01,
            },
            CityCoords {
                city: "Gdańsk".to_string(),
                latitude: 54.35,
                longitude: 18.65,
            },
        ]
    }

    #[test]
    fn test_haversine_known_distance() {
        // Kraków to Warszawa is roughly 250 km as the crow flies.
        let d = haversine_km(50.06, 19.94, 52.23, 21.01);
        assert!((240.0..260.0).contains(&d), "got {} km", d);
    }

    #[test]
    fn test_nearest_city_picks_minimum_distance() {
        let cities = cities();
        // Wieliczka, just outside Kraków.
        let nearest = nearest_city(49.98, 20.06, &cities).unwrap();
        assert_eq!(nearest.city, "Kraków");
    }

    #[test]
    fn test_nearest_city_empty_input() {
        assert!(nearest_city(50.0, 20.0, &[]).is_none());
    }

    struct FixedPosition(f64, f64);

    #[async_trait]
    impl GeolocationProvider for FixedPosition {
        async fn current_position(&self) -> Result<(f64, f64)> {
            Ok((self.0, self.1))
        }
    }

    struct NeverResolves;

    #[async_trait]
    impl GeolocationProvider for NeverResolves {
        async fn current_position(&self) -> Result<(f64, f64)> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            unreachable!("position lookup should have timed out")
        }
    }

    #[tokio::test]
    async fn test_locate_nearest_city_resolves() {
        let provider = FixedPosition(52.2, 21.0);
        let city = locate_nearest_city(&provider, &cities(), Duration::from_secs(1)).await;
        assert_eq!(city.as_deref(), Some("Warszawa"));
    }

    #[tokio::test]
    async fn test_locate_nearest_city_times_out_quietly() {
        let provider = NeverResolves;
        let city = locate_nearest_city(&provider, &cities(), Duration::from_millis(50)).await;
        assert_eq!(city, None);
    }
}
