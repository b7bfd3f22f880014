//! Application setup and server configuration.

use axum::extract::Extension;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    city_coords, get_listing, health_handler, list_cities, list_listings, list_styles,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

/// Build the Axum application router
pub fn build_app(pool: SqlitePool) -> Router {
    let state = AppState { db_pool: pool };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/listings", get(list_listings))
        .route("/api/listings/:id", get(get_listing))
        .route("/api/cities", get(list_cities))
        .route("/api/cities/coords", get(city_coords))
        .route("/api/styles", get(list_styles))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
