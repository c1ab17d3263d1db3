//! motiva-storage
//!
//! The local verification cache: a small key-value store behind the
//! [`kv::KvStore`] trait so gating and delivery logic can be tested against
//! an in-memory fake. The file-backed implementation mirrors how the rest
//! of the app persists JSON: one value per file, atomic writes, restrictive
//! permissions. Expiry is not enforced here; readers check validity
//! windows themselves.

pub mod error;
pub mod file;
pub mod kv;
pub mod state;
