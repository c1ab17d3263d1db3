use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use motiva_gate::error::VerifyError;
use motiva_gate::verifier::{PaymentVerifier, SessionVerification};

/// Hard cap on each verification call. A hung request must not leave the
/// gate in `Verifying` forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`PaymentVerifier`] backed by the hosted verification API.
pub struct ApiVerifier {
    http: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct PaidResponse {
    paid: bool,
}

#[derive(Deserialize)]
struct SessionResponse {
    paid: bool,
    #[serde(default)]
    email: Option<String>,
}

impl ApiVerifier {
    pub fn new(base_url: impl Into<String>) -> Result<Self, VerifyError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VerifyError::Request(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl PaymentVerifier for ApiVerifier {
    async fn verify_email(&self, email: &str) -> Result<bool, VerifyError> {
        let response = self
            .http
            .get(self.url("/verify-payment"))
            .query(&[("email", email)])
            .send()
            .await
            .map_err(|e| VerifyError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VerifyError::Status(response.status().as_u16()));
        }

        let body: PaidResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::Malformed(e.to_string()))?;
        Ok(body.paid)
    }

    async fn verify_session(
        &self,
        session_id: &str,
    ) -> Result<SessionVerification, VerifyError> {
        let response = self
            .http
            .get(self.url("/verify-session"))
            .query(&[("session_id", session_id)])
            .send()
            .await
            .map_err(|e| VerifyError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VerifyError::Status(response.status().as_u16()));
        }

        let body: SessionResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::Malformed(e.to_string()))?;
        Ok(SessionVerification {
            paid: body.paid,
            email: body.email,
        })
    }
}
