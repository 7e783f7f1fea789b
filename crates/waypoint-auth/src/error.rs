//! Authentication error types.

use thiserror::Error;
use waypoint_core::error::CoreError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("token signing secret is not configured (set WAYPOINT_TOKEN_SECRET)")]
    MissingSecret,

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => CoreError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::MissingSecret => CoreError::Internal(err.to_string()),
            AuthError::Crypto(msg) => CoreError::Internal(msg),
        }
    }
}
