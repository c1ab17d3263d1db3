//! motiva-payments
//!
//! Stripe REST client for payment verification. Two read-only calls: list
//! recent charges (matched against a buyer email) and retrieve a checkout
//! session. The matching rules are pure functions so they can be tested
//! without a network.

pub mod charges;
pub mod client;
pub mod error;
pub mod sessions;
