use thiserror::Error;

/// Errors emitted by [`crate::client::StripeClient`].
#[derive(Debug, Error)]
pub enum PaymentsError {
    #[error("payment provider returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
