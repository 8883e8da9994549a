//! HTTP surface: axum router over [`WeatherService`].

pub mod cors;
pub mod handlers;

use crate::core::service::WeatherService;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

pub fn build_router(service: Arc<WeatherService>, cors_origins: &[String]) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/api/weather/:lat/:lon", get(handlers::weather_daily))
        .route(
            "/api/weather/:lat/:lon/:start/:end",
            get(handlers::weather_daily),
        )
        .route("/api/weekly/:lat/:lon", get(handlers::weather_weekly))
        .route(
            "/api/weekly/:lat/:lon/:start/:end",
            get(handlers::weather_weekly),
        )
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors::create_cors_layer(cors_origins)),
        )
        .with_state(state)
}
