use std::env;
use std::sync::Arc;

use motiva_payments::client::StripeClient;

/// Shared application state, injected into route handlers via Axum state.
///
/// `payments` is `None` when the provider secret key is missing; the
/// verification routes then answer with a configuration error instead of
/// calling the provider.
#[derive(Clone)]
pub struct AppState {
    pub payments: Option<Arc<StripeClient>>,
}

impl AppState {
    /// Builds state from `STRIPE_SECRET_KEY`. `STRIPE_BASE_URL` redirects
    /// provider calls, for local stubs.
    pub fn from_env() -> Self {
        let payments = env::var("STRIPE_SECRET_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|key| match env::var("STRIPE_BASE_URL") {
                Ok(base) if !base.trim().is_empty() => {
                    Arc::new(StripeClient::with_base_url(key, base))
                }
                _ => Arc::new(StripeClient::new(key)),
            });
        Self { payments }
    }

    /// State with no provider configured. Routes answer 500.
    pub fn unconfigured() -> Self {
        Self { payments: None }
    }

    pub fn with_client(client: StripeClient) -> Self {
        Self {
            payments: Some(Arc::new(client)),
        }
    }
}
