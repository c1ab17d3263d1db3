//! motiva-email
//!
//! Result-summary delivery through an EmailJS-compatible template API, with
//! a per-email-per-day ledger so repeated result views never spam the buyer.
//! Delivery is best-effort: a failure is reported, never retried, and never
//! blocks results or export.

pub mod client;
pub mod delivery;
pub mod error;
