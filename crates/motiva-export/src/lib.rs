//! motiva-export
//!
//! PDF report generation. A Tera template turns a [`motiva_core::models::report::Report`]
//! into Markdown-ish text; the layout pass flows that text into A4 pages;
//! printpdf draws the pages with builtin fonts.

pub mod error;
pub mod layout;
pub mod pdf;
pub mod render;
pub mod styles;
