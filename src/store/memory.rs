//! In-memory user store.
//!
//! Fixture-backed implementation for tests and demos. Real deployments
//! put a database behind the same trait.

use std::collections::HashMap;

use super::user::User;
use super::{StoreError, UserStore};

/// Store holding its records in insertion order.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Vec<User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, keeping insertion order.
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Load records from a JSON array of users.
    pub fn from_json(data: &str) -> Result<Self, StoreError> {
        let users: Vec<User> = serde_json::from_str(data)
            .map_err(|e| StoreError::Unavailable(format!("bad fixture: {}", e)))?;
        Ok(Self { users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for MemoryUserStore {
    fn search(&self, criteria: &HashMap<String, String>) -> Result<Vec<User>, StoreError> {
        for key in criteria.keys() {
            if !matches!(key.as_str(), "id" | "email") {
                return Err(StoreError::BadCriteria(key.clone()));
            }
        }

        Ok(self
            .users
            .iter()
            .filter(|user| {
                criteria
                    .iter()
                    .all(|(key, value)| user.attribute(key) == Some(value.as_str()))
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryUserStore {
        MemoryUserStore::new()
            .with_user(User::new("bob@example.com", "hunter2"))
            .with_user(User::new("alice@example.com", "s3cret"))
    }

    #[test]
    fn test_search_by_email() {
        let store = store();
        let mut criteria = HashMap::new();
        criteria.insert("email".to_string(), "alice@example.com".to_string());

        let users = store.search(&criteria).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "alice@example.com");
    }

    #[test]
    fn test_search_no_match() {
        let store = store();
        let mut criteria = HashMap::new();
        criteria.insert("email".to_string(), "nobody@example.com".to_string());

        assert!(store.search(&criteria).unwrap().is_empty());
    }

    #[test]
    fn test_search_rejects_unknown_criteria() {
        let store = store();
        let mut criteria = HashMap::new();
        criteria.insert("shoe_size".to_string(), "42".to_string());

        assert!(matches!(
            store.search(&criteria),
            Err(StoreError::BadCriteria(_))
        ));
    }

    #[test]
    fn test_from_json_fixture() {
        let data = r#"[
            {"id": "u-1", "email": "bob@example.com", "password_hash": "deadbeef"}
        ]"#;
        let store = MemoryUserStore::from_json(data).unwrap();
        assert_eq!(store.len(), 1);

        let mut criteria = HashMap::new();
        criteria.insert("id".to_string(), "u-1".to_string());
        assert_eq!(store.search(&criteria).unwrap()[0].email, "bob@example.com");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(MemoryUserStore::from_json("not json").is_err());
    }
}
