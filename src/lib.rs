//! PiiGuard Core - Credential extraction and log redaction
//!
//! This crate provides the two request-scoped pipelines a user-facing
//! API needs around personal data:
//!
//! 1. **Redaction** - sensitive `key=value` fields are masked before a
//!    log line is emitted
//! 2. **Authentication** - HTTP Basic credentials are decoded and
//!    resolved against a user store, failing closed on any malformed
//!    input
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `redaction` - pattern building and value masking for log fields
//! - `logging` - redacting formatter and the INFO-level sink factory
//! - `auth` - Basic-Auth decode chain and path-exclusion rules
//! - `store` - user lookup seam plus an in-memory implementation
//! - `config` - environment-driven settings for the database collaborator
//!
//! Both pipelines are pure function chains with no shared state; every
//! invocation is independent and safe to run concurrently.

pub mod auth;
pub mod config;
pub mod logging;
pub mod redaction;
pub mod store;

pub use auth::basic::BasicAuth;
pub use auth::paths::require_auth;
pub use logging::init_user_data_logger;
pub use redaction::filter::{filter_datum, PII_FIELDS};
pub use store::{MemoryUserStore, User, UserStore};
