use thiserror::Error;

/// Errors emitted by [`crate::client::EmailClient`].
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("email service returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
