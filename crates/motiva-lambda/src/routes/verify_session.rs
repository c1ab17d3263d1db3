use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use motiva_payments::sessions::session_outcome;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VerifySessionQuery {
    #[serde(default)]
    session_id: Option<String>,
}

#[derive(Serialize)]
pub struct VerifySessionResponse {
    pub paid: bool,
    pub email: Option<String>,
}

/// Resolve a checkout session id to payment status and customer email.
/// The email is null when the provider recorded none.
pub async fn verify_session(
    State(state): State<AppState>,
    Query(query): Query<VerifySessionQuery>,
) -> Result<Json<VerifySessionResponse>, ApiError> {
    let session_id = query
        .session_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Session ID parameter is required".to_string()))?;

    let payments = state
        .payments
        .as_ref()
        .ok_or_else(|| ApiError::Config("STRIPE_SECRET_KEY is not set".to_string()))?;

    let session = payments.retrieve_session(session_id).await?;
    let outcome = session_outcome(&session);

    tracing::info!(paid = outcome.paid, "checkout session resolved");
    Ok(Json(VerifySessionResponse {
        paid: outcome.paid,
        email: outcome.email,
    }))
}
