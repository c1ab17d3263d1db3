use jiff::civil::Date;
use tracing::{info, warn};

use motiva_core::cache_keys;
use motiva_storage::kv::KvStore;

use crate::client::{EmailClient, ReportSummary};

/// Outcome of one delivery request. Informational only; callers must not
/// treat `Failed` as a reason to withhold results or export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    AlreadySent,
    Failed,
}

/// Per-email-per-day attempt markers over an injected store. The marker is
/// written when a send is attempted, not when it succeeds: one attempt per
/// email per calendar day, even a failed one.
pub struct DeliveryLedger<S: KvStore> {
    store: S,
}

impl<S: KvStore> DeliveryLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn already_attempted(&self, email: &str, date: Date) -> bool {
        match self.store.get(&cache_keys::delivery_marker(email, date)) {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!(error = %e, "could not read delivery marker, assuming none");
                false
            }
        }
    }

    pub fn mark_attempted(&mut self, email: &str, date: Date) {
        let key = cache_keys::delivery_marker(email, date);
        if let Err(e) = self.store.set(&key, &date.to_string()) {
            warn!(error = %e, "could not write delivery marker");
        }
    }
}

/// Send the result summary unless one was already attempted for this email
/// today. The marker goes down before the network call so a slow or failed
/// send still consumes the day's attempt.
pub async fn send_report_summary<S: KvStore>(
    client: &EmailClient,
    ledger: &mut DeliveryLedger<S>,
    summary: &ReportSummary,
    today: Date,
) -> DeliveryStatus {
    if ledger.already_attempted(&summary.to_email, today) {
        return DeliveryStatus::AlreadySent;
    }
    ledger.mark_attempted(&summary.to_email, today);

    match client.send(summary).await {
        Ok(()) => {
            info!(email = %summary.to_email, "result summary sent");
            DeliveryStatus::Sent
        }
        Err(e) => {
            warn!(email = %summary.to_email, error = %e, "result summary delivery failed");
            DeliveryStatus::Failed
        }
    }
}
