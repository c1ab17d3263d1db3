use jiff::Timestamp;
use tracing::{info, warn};

use motiva_core::cache_keys;
use motiva_storage::kv::KvStore;
use motiva_storage::state;

use crate::record::AuthRecord;
use crate::verifier::{PaymentVerifier, SessionVerification};

/// Gate states. `Authorized` is terminal for the session; `Denied` is not,
/// since the user may retry or return with a fresh checkout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Unverified,
    Verifying,
    Authorized(AuthRecord),
    Denied,
}

impl GateState {
    pub fn is_authorized(&self) -> bool {
        matches!(self, GateState::Authorized(_))
    }
}

/// The payment-gate state machine over an injected cache store.
///
/// All transitions run on the caller's task; the state is `Verifying` only
/// while a verification call is in flight.
pub struct PaymentGate<S: KvStore> {
    store: S,
    state: GateState,
}

impl<S: KvStore> PaymentGate<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: GateState::Unverified,
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Inspect the cached authorization record. Within its validity window
    /// the gate goes straight to `Authorized` with no remote call; expired
    /// or unreadable records are deleted and the gate stays `Unverified`.
    pub fn restore(&mut self, now: Timestamp) -> &GateState {
        match state::load_json::<AuthRecord, _>(&self.store, cache_keys::AUTH_RECORD) {
            Ok(Some(record)) if record.is_valid_at(now) => {
                info!(email = %record.email, "cached verification still valid");
                self.state = GateState::Authorized(record);
            }
            Ok(Some(record)) => {
                info!(email = %record.email, "cached verification expired");
                self.discard_record();
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "unreadable cached verification, discarding");
                self.discard_record();
            }
        }
        &self.state
    }

    /// Verify a checkout session id returned by the provider's redirect.
    /// Confirmed paid caches a fresh record and authorizes; anything else
    /// (unpaid, error, timeout) denies.
    pub async fn verify_session<V>(
        &mut self,
        verifier: &V,
        session_id: &str,
        now: Timestamp,
    ) -> &GateState
    where
        V: PaymentVerifier + ?Sized,
    {
        if self.state.is_authorized() {
            return &self.state;
        }

        self.state = GateState::Verifying;
        match verifier.verify_session(session_id).await {
            Ok(SessionVerification { paid: true, email }) => {
                let record = AuthRecord::new(
                    email.unwrap_or_default(),
                    now,
                    Some(session_id.to_string()),
                );
                self.authorize(record);
            }
            Ok(SessionVerification { paid: false, .. }) => {
                info!(session_id, "checkout session resolved as unpaid");
                self.state = GateState::Denied;
            }
            Err(e) => {
                warn!(session_id, error = %e, "session verification failed, denying");
                self.state = GateState::Denied;
            }
        }
        &self.state
    }

    /// User-initiated check keyed by typed email. Same fail-closed rule as
    /// [`Self::verify_session`].
    pub async fn verify_email<V>(
        &mut self,
        verifier: &V,
        email: &str,
        now: Timestamp,
    ) -> &GateState
    where
        V: PaymentVerifier + ?Sized,
    {
        if self.state.is_authorized() {
            return &self.state;
        }

        self.state = GateState::Verifying;
        match verifier.verify_email(email).await {
            Ok(true) => {
                self.authorize(AuthRecord::new(email, now, None));
            }
            Ok(false) => {
                info!(email, "no recent successful charge for email");
                self.state = GateState::Denied;
            }
            Err(e) => {
                warn!(email, error = %e, "email verification failed, denying");
                self.state = GateState::Denied;
            }
        }
        &self.state
    }

    fn authorize(&mut self, record: AuthRecord) {
        // The verification was affirmative; losing the cache write only
        // costs a redundant check on some future load.
        if let Err(e) = state::save_json(&mut self.store, cache_keys::AUTH_RECORD, &record) {
            warn!(error = %e, "could not cache verification record");
        }
        info!(email = %record.email, "payment verified, results unlocked");
        self.state = GateState::Authorized(record);
    }

    fn discard_record(&mut self) {
        if let Err(e) = self.store.delete(cache_keys::AUTH_RECORD) {
            warn!(error = %e, "could not delete cached verification record");
        }
        self.state = GateState::Unverified;
    }
}
