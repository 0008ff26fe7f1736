//! Basic authentication over a user store.
//!
//! Chains the decode stages and resolves the credential pair against
//! the store. Fail-closed: any stage failure surfaces to callers as
//! "no user", never as an error.

use std::collections::HashMap;
use std::sync::Arc;

use crate::store::{User, UserStore};

use super::credentials::{
    decode_base64_authorization_header, extract_base64_authorization_header,
    extract_user_credentials,
};
use super::error::AuthError;
use super::request::HeaderSource;

/// Header consulted for credentials.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Criteria key used to resolve the identifier.
const IDENTIFIER_FIELD: &str = "email";

/// Basic-Auth authenticator.
pub struct BasicAuth {
    store: Arc<dyn UserStore>,
}

impl BasicAuth {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Raw `Authorization` header from a request.
    pub fn authorization_header<'a>(&self, request: &'a dyn HeaderSource) -> Option<&'a str> {
        request.header(AUTHORIZATION_HEADER)
    }

    /// Resolve `(identifier, secret)` against the store.
    ///
    /// The store may return several candidates; the first match wins.
    pub fn user_object_from_credentials(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<User, AuthError> {
        let mut criteria = HashMap::new();
        criteria.insert(IDENTIFIER_FIELD.to_string(), identifier.to_string());

        let users = self.store.search(&criteria)?;
        let user = users.into_iter().next().ok_or(AuthError::UnknownUser)?;

        if !user.is_valid_password(secret) {
            return Err(AuthError::WrongSecret);
        }
        Ok(user)
    }

    /// Authenticated user for a request, or `None`.
    ///
    /// Every stage failure is logged with its cause and degrades to
    /// `None`; callers only ever see "no user".
    pub fn current_user(&self, request: &dyn HeaderSource) -> Option<User> {
        match self.resolve(request) {
            Ok(user) => {
                log::debug!("AUTH_OK user_id={}", user.id);
                Some(user)
            }
            Err(e) => {
                log::debug!("AUTH_DENIED reason={}", e);
                None
            }
        }
    }

    /// Run the full chain, short-circuiting on the first failed stage.
    fn resolve(&self, request: &dyn HeaderSource) -> Result<User, AuthError> {
        let header = self
            .authorization_header(request)
            .ok_or(AuthError::MissingHeader)?;
        let token = extract_base64_authorization_header(header)?;
        let decoded = decode_base64_authorization_header(token)?;
        let (identifier, secret) = extract_user_credentials(&decoded)?;
        self.user_object_from_credentials(&identifier, &secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::request::StaticRequest;
    use crate::store::{MemoryUserStore, StoreError};

    fn auth() -> BasicAuth {
        let store = MemoryUserStore::new()
            .with_user(User::new("user", "pass"))
            .with_user(User::new("bob@example.com", "hunter2"));
        BasicAuth::new(Arc::new(store))
    }

    #[test]
    fn test_current_user_happy_path() {
        // "Basic dXNlcjpwYXNz" decodes to "user:pass"
        let request = StaticRequest::new().with_header(AUTHORIZATION_HEADER, "Basic dXNlcjpwYXNz");
        let user = auth().current_user(&request).unwrap();
        assert_eq!(user.email, "user");
    }

    #[test]
    fn test_current_user_wrong_secret() {
        // "user:wrong"
        let request =
            StaticRequest::new().with_header(AUTHORIZATION_HEADER, "Basic dXNlcjp3cm9uZw==");
        assert!(auth().current_user(&request).is_none());
    }

    #[test]
    fn test_current_user_unknown_identifier() {
        // "ghost:pass"
        let request =
            StaticRequest::new().with_header(AUTHORIZATION_HEADER, "Basic Z2hvc3Q6cGFzcw==");
        assert!(auth().current_user(&request).is_none());
    }

    #[test]
    fn test_current_user_missing_header() {
        assert!(auth().current_user(&StaticRequest::new()).is_none());
    }

    #[test]
    fn test_current_user_malformed_token() {
        let request = StaticRequest::new().with_header(AUTHORIZATION_HEADER, "Basic !!!");
        assert!(auth().current_user(&request).is_none());
    }

    #[test]
    fn test_store_errors_fail_closed() {
        struct BrokenStore;
        impl UserStore for BrokenStore {
            fn search(
                &self,
                _criteria: &HashMap<String, String>,
            ) -> Result<Vec<User>, StoreError> {
                Err(StoreError::Unavailable("connection refused".to_string()))
            }
        }

        let auth = BasicAuth::new(Arc::new(BrokenStore));
        let request = StaticRequest::new().with_header(AUTHORIZATION_HEADER, "Basic dXNlcjpwYXNz");
        assert!(auth.current_user(&request).is_none());
    }

    #[test]
    fn test_resolution_takes_first_match() {
        // Two records under the same identifier; only the first one's
        // secret authenticates.
        let store = MemoryUserStore::new()
            .with_user(User::new("dup@example.com", "first"))
            .with_user(User::new("dup@example.com", "second"));
        let auth = BasicAuth::new(Arc::new(store));

        let ok = auth.user_object_from_credentials("dup@example.com", "first");
        assert!(ok.is_ok());

        let second = auth.user_object_from_credentials("dup@example.com", "second");
        assert!(matches!(second, Err(AuthError::WrongSecret)));
    }
}
