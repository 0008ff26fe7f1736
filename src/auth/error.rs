//! Credential-chain errors.
//!
//! Every stage of the Basic-Auth decode chain fails with a distinct
//! variant so the cause stays visible in logs and tests. The
//! `current_user` boundary collapses all of them to "no user".

use thiserror::Error;

use crate::store::StoreError;

/// Failure of one stage in the credential chain.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("missing authorization header")]
    MissingHeader,

    /// Header present but not `Basic <token>`.
    #[error("authorization scheme is not Basic")]
    WrongScheme,

    #[error("invalid base64 token: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("decoded token is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Decoded token has no `:` separator.
    #[error("credential separator missing")]
    MissingSeparator,

    #[error("empty identifier")]
    EmptyIdentifier,

    #[error("empty secret")]
    EmptySecret,

    #[error("no user matches the identifier")]
    UnknownUser,

    #[error("secret does not match")]
    WrongSecret,

    #[error("user store lookup failed: {0}")]
    Store(#[from] StoreError),
}
