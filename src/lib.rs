//! Lightquote: pricing quotes for holiday-lighting installations.

pub mod config;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::pricing::responses::HealthResponse;
use crate::pricing::PricingConfig;

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    /// Pricing used when a request brings no config of its own
    pub default_config: Arc<PricingConfig>,
}

impl AppState {
    pub fn new(default_config: PricingConfig) -> Self {
        Self {
            default_config: Arc::new(default_config),
        }
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
