use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// How long a cached verification stays valid. After this, the record is
/// discarded and the payment provider must be asked again.
pub const VALIDITY: SignedDuration = SignedDuration::from_hours(24);

/// Cached proof that an email (or checkout session) was verified as paid.
/// Never mutated in place, only replaced or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRecord {
    pub email: String,
    pub verified_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuthRecord {
    pub fn new(
        email: impl Into<String>,
        verified_at: Timestamp,
        session_id: Option<String>,
    ) -> Self {
        Self {
            email: email.into(),
            verified_at,
            session_id,
        }
    }

    /// Pure window check: valid iff less than [`VALIDITY`] has elapsed
    /// between `verified_at` and `now`.
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        now.duration_since(self.verified_at) < VALIDITY
    }
}
