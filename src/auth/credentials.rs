//! Basic-Auth decode chain stages.
//!
//! Header -> base64 token -> UTF-8 text -> (identifier, secret).
//! Each stage fails with a distinct error; callers short-circuit on
//! the first failure.

use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;

use super::error::AuthError;

lazy_static! {
    /// `Basic <token>` form: exact scheme, single space.
    static ref BASIC_TOKEN_PATTERN: Regex = Regex::new(r"^Basic (?P<token>.+)$").unwrap();
}

/// Extract the base64 token from an `Authorization` header value.
///
/// The header is trimmed of surrounding whitespace first; the scheme
/// match itself is exact and case-sensitive.
pub fn extract_base64_authorization_header(header: &str) -> Result<&str, AuthError> {
    let header = header.trim();
    if header.is_empty() {
        return Err(AuthError::MissingHeader);
    }

    BASIC_TOKEN_PATTERN
        .captures(header)
        .and_then(|caps| caps.name("token"))
        .map(|token| token.as_str())
        .ok_or(AuthError::WrongScheme)
}

/// Decode a base64 token into UTF-8 text.
pub fn decode_base64_authorization_header(token: &str) -> Result<String, AuthError> {
    let bytes = general_purpose::STANDARD.decode(token)?;
    Ok(String::from_utf8(bytes)?)
}

/// Split decoded text into `(identifier, secret)` on the first `:`.
///
/// The secret may itself contain `:`; both parts must be non-empty.
pub fn extract_user_credentials(decoded: &str) -> Result<(String, String), AuthError> {
    let (identifier, secret) = decoded.split_once(':').ok_or(AuthError::MissingSeparator)?;

    if identifier.is_empty() {
        return Err(AuthError::EmptyIdentifier);
    }
    if secret.is_empty() {
        return Err(AuthError::EmptySecret);
    }

    Ok((identifier.to_string(), secret.to_string()))
}
