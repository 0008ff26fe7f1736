//! User entity.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A stored user record.
///
/// The secret is kept as a lowercase SHA-256 hex digest; clear text
/// never persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Create a user with a fresh id, hashing the clear secret.
    pub fn new(email: &str, secret: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password_hash: hash_secret(secret),
        }
    }

    /// Check a clear secret against the stored digest.
    pub fn is_valid_password(&self, secret: &str) -> bool {
        hash_secret(secret) == self.password_hash
    }

    /// Attribute lookup by field name, used by criteria matching.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "email" => Some(&self.email),
            _ => None,
        }
    }
}

/// Lowercase SHA-256 hex digest of a secret.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
