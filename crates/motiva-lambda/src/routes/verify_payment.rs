use axum::Json;
use axum::extract::{Query, State};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use motiva_payments::charges::has_matching_paid_charge;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VerifyPaymentQuery {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Serialize)]
pub struct VerifyPaymentResponse {
    pub paid: bool,
}

/// Does this email have a succeeded, paid charge inside the lookback
/// window? `{paid: false}` is a successful answer; only provider trouble
/// is an error.
pub async fn verify_payment(
    State(state): State<AppState>,
    Query(query): Query<VerifyPaymentQuery>,
) -> Result<Json<VerifyPaymentResponse>, ApiError> {
    let email = query
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email parameter is required".to_string()))?;

    let payments = state
        .payments
        .as_ref()
        .ok_or_else(|| ApiError::Config("STRIPE_SECRET_KEY is not set".to_string()))?;

    let charges = payments.list_recent_charges(Timestamp::now()).await?;
    let paid = has_matching_paid_charge(&charges, email);

    tracing::info!(paid, "payment lookup by email complete");
    Ok(Json(VerifyPaymentResponse { paid }))
}
