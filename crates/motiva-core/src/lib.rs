//! motiva-core
//!
//! Pure domain types for the Motiva career-motivation assessment: the
//! question bank, answer tracking, driver scoring, interpretation copy, and
//! cache key conventions. No network or filesystem dependency; this is the
//! shared vocabulary of the Motiva system.

pub mod cache_keys;
pub mod error;
pub mod interpretations;
pub mod models;
pub mod scoring;
