use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::EmailError;

const DEFAULT_BASE_URL: &str = "https://api.emailjs.com";

/// Account coordinates for the template send API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Template parameters for the result-summary email. Field names double as
/// template variable names on the provider side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub to_email: String,
    pub to_name: String,
    pub primary_driver: String,
    pub secondary_driver: String,
}

pub struct EmailClient {
    http: Client,
    config: EmailConfig,
    base_url: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ReportSummary,
}

impl EmailClient {
    pub fn new(config: EmailConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(config: EmailConfig, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            config,
            base_url: base_url.into(),
        }
    }

    /// One template send. Success is any 2xx; no retries.
    pub async fn send(&self, summary: &ReportSummary) -> Result<(), EmailError> {
        let url = format!(
            "{}/api/v1.0/email/send",
            self.base_url.trim_end_matches('/'),
        );
        let payload = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: summary,
        };

        let response = self.http.post(url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(EmailError::HttpStatus(response.status()));
        }
        Ok(())
    }
}
