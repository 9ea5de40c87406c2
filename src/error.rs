//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Pricing(#[from] PricingError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Rejected request body: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    PricingErrorResponse {
                        error_type: "bad_request".to_string(),
                        message: msg.clone(),
                        details: None,
                    },
                )
            }
            AppError::Pricing(e) => {
                tracing::warn!("Strict validation failed: {}", e);
                let details = match e {
                    PricingError::ConfigurationError { errors, .. } => {
                        Some(serde_json::json!({ "errors": errors }))
                    }
                    PricingError::InvalidFootage { raw } => {
                        Some(serde_json::json!({ "footage": raw }))
                    }
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    PricingErrorResponse {
                        error_type: e.error_type().to_string(),
                        message: e.to_string(),
                        details,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let response = AppError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(PricingError::InvalidFootage {
            raw: "-1".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
