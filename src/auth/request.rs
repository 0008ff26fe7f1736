//! Request seam.
//!
//! The credential chain only needs header lookup; any framework
//! request type can implement this.

use std::collections::HashMap;

/// Minimal view of an incoming request.
pub trait HeaderSource {
    /// Value of a header, if present. Names are matched exactly.
    fn header(&self, name: &str) -> Option<&str>;
}

/// In-memory request used by tests and demos.
#[derive(Debug, Default)]
pub struct StaticRequest {
    headers: HashMap<String, String>,
}

impl StaticRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }
}

impl HeaderSource for StaticRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|value| value.as_str())
    }
}
