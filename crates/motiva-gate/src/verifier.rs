use async_trait::async_trait;

use crate::error::VerifyError;

/// Outcome of resolving a checkout session with the payment provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionVerification {
    pub paid: bool,
    pub email: Option<String>,
}

/// The remote verification collaborator, injected into the gate so tests
/// can substitute a deterministic fake for the network.
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    /// Does this email have a recent successful charge?
    async fn verify_email(&self, email: &str) -> Result<bool, VerifyError>;

    /// Resolve a checkout session id to payment status and customer email.
    async fn verify_session(&self, session_id: &str)
        -> Result<SessionVerification, VerifyError>;
}
