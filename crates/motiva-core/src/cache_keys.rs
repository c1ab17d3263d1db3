//! Cache key conventions.
//!
//! Pure string functions, no I/O. These define the canonical layout of
//! entries in the local verification cache.

use jiff::civil::Date;

/// Fixed key for the cached payment authorization record. One record per
/// cache; the record itself carries the verified email.
pub const AUTH_RECORD: &str = "auth-record";

/// Per-email-per-day marker that a result summary email was attempted.
pub fn delivery_marker(email: &str, date: Date) -> String {
    format!("email-sent_{}_{date}", email.trim().to_lowercase())
}
