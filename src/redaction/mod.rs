//! Redaction module.
//!
//! Pattern building and value masking for sensitive log fields.

pub mod filter;

pub use filter::*;
