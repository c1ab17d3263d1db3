//! motiva-gate
//!
//! The payment gate: decides whether the current session may see results.
//! The authoritative payment record lives with the payment provider; this
//! crate's job is to avoid redundant verification calls (via a time-boxed
//! cached record) while never granting access without at least one
//! affirmative verification, fresh or cached-and-unexpired.

pub mod error;
pub mod flows;
pub mod record;
pub mod verifier;
