//! motiva-lambda
//!
//! The payment verification API: four GET routes behind open CORS, run
//! under `lambda_http`. Verification answers fail closed; any provider
//! or configuration problem reads as "not paid" to the caller.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::http::{Method, header};
use axum::middleware as axum_mw;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Assemble the API router over the given state.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/questions", get(routes::questions::list_questions))
        .route(
            "/verify-payment",
            get(routes::verify_payment::verify_payment),
        )
        .route(
            "/verify-session",
            get(routes::verify_session::verify_session),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
