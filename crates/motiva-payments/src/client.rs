use jiff::{SignedDuration, Timestamp};
use reqwest::Client;
use tracing::debug;

use crate::charges::{Charge, ChargeList};
use crate::error::PaymentsError;
use crate::sessions::CheckoutSession;

/// Charges older than this never count towards verification.
pub const LOOKBACK_DAYS: i64 = 30;

const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Minimal Stripe REST client. Read-only: lists charges and retrieves
/// checkout sessions, authenticated with the account secret key.
pub struct StripeClient {
    http: Client,
    secret_key: String,
    base_url: String,
}

impl StripeClient {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_base_url(secret_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different host. Tests use this to swap the
    /// provider for a local stand-in.
    pub fn with_base_url(secret_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            secret_key: secret_key.into(),
            base_url: base_url.into(),
        }
    }

    /// `GET /v1/charges`, limited to the last [`LOOKBACK_DAYS`] days and the
    /// provider's 100-charge page cap.
    pub async fn list_recent_charges(
        &self,
        now: Timestamp,
    ) -> Result<Vec<Charge>, PaymentsError> {
        let cutoff = now - SignedDuration::from_hours(24 * LOOKBACK_DAYS);
        let url = format!("{}/v1/charges", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.secret_key)
            .query(&[
                ("limit", "100".to_string()),
                ("created[gte]", cutoff.as_second().to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PaymentsError::HttpStatus(response.status()));
        }

        let list: ChargeList = response.json().await?;
        debug!(count = list.data.len(), "listed recent charges");
        Ok(list.data)
    }

    /// `GET /v1/checkout/sessions/{id}`.
    pub async fn retrieve_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSession, PaymentsError> {
        let url = format!(
            "{}/v1/checkout/sessions/{}",
            self.base_url.trim_end_matches('/'),
            session_id,
        );

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PaymentsError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}
