//! HTTP routes for the quote API.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use crate::error::Result;
use crate::AppState;

use super::models::{PricingConfig, QuoteRequest};
use super::requests::QuoteRequestBody;
use super::responses::QuoteResponse;
use super::services::compute_quote;
use super::validation::{validate_config, validate_footage};

/// Quote API routes, mounted under `/api/quote`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quote", post(create_quote))
        .route("/api/quote/defaults", get(default_config))
}

/// Compute a quote from footage and an optional pricing config
async fn create_quote(
    State(state): State<AppState>,
    body: std::result::Result<Json<QuoteRequestBody>, JsonRejection>,
) -> Result<Json<QuoteResponse>> {
    let Json(body) = body?;

    let config: PricingConfig = match body.config {
        Some(config) => config.into(),
        None => state.default_config.as_ref().clone(),
    };

    if body.strict {
        validate_footage(body.footage)?;
        validate_config(&config)?;
    }

    let quote = compute_quote(&QuoteRequest::new(body.footage), &config);
    debug!(
        footage = quote.applied_footage,
        tier = quote.tier.label,
        materials = %quote.materials_cost,
        kits = quote.kit_count,
        "Quote computed"
    );

    Ok(Json(QuoteResponse::from_quote(quote, &config)))
}

/// Server default pricing config
async fn default_config(State(state): State<AppState>) -> Json<PricingConfig> {
    Json(state.default_config.as_ref().clone())
}
