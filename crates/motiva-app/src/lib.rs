//! motiva-app
//!
//! The terminal client: runs the 21-question assessment, drives the payment
//! gate against the verification API, prints the ranked profile, writes the
//! PDF report, and attempts the daily summary email.

pub mod api;
pub mod config;
pub mod flow;
