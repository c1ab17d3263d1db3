use thiserror::Error;

/// Failure while asking the remote verifier about a payment. The gate
/// treats every variant the same as an explicit "not paid".
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("verification request failed: {0}")]
    Request(String),

    #[error("verification endpoint returned status {0}")]
    Status(u16),

    #[error("malformed verification response: {0}")]
    Malformed(String),
}
