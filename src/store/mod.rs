//! User store seam.
//!
//! Lookup capability consumed by credential resolution. Persistence
//! itself lives outside this crate; `MemoryUserStore` backs tests and
//! demos.

pub mod memory;
pub mod user;

pub use memory::*;
pub use user::*;

use std::collections::HashMap;

use thiserror::Error;

/// Lookup failure inside a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user store unavailable: {0}")]
    Unavailable(String),
    #[error("unsupported search criteria: {0}")]
    BadCriteria(String),
}

/// Search capability over user records.
pub trait UserStore: Send + Sync {
    /// Users matching every criteria key, in store order.
    fn search(&self, criteria: &HashMap<String, String>) -> Result<Vec<User>, StoreError>;
}
