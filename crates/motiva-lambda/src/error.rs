use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for the verification routes.
///
/// `Provider` answers carry `paid: false` in the body so a client that only
/// reads the payload still fails closed. Internal detail is logged, never
/// returned.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Config(String),
    Provider(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ProviderErrorBody {
    error: String,
    paid: bool,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg })).into_response()
            }
            ApiError::Config(msg) => {
                tracing::error!("configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Server configuration error".to_string(),
                    }),
                )
                    .into_response()
            }
            ApiError::Provider(msg) => {
                tracing::error!("provider error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ProviderErrorBody {
                        error: "Failed to verify payment".to_string(),
                        paid: false,
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<motiva_payments::error::PaymentsError> for ApiError {
    fn from(e: motiva_payments::error::PaymentsError) -> Self {
        ApiError::Provider(e.to_string())
    }
}
