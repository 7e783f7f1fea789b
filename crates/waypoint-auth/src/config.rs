//! Authentication configuration.

use crate::error::AuthError;

/// Environment variable holding the token signing secret.
pub const TOKEN_SECRET_ENV: &str = "WAYPOINT_TOKEN_SECRET";

/// Fixed secret for tests and local development only.
const DEV_SECRET: &str = "waypoint-dev-secret";

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing. Process-wide, loaded once at
    /// startup.
    pub token_secret: String,
    /// Token lifetime in seconds (default: 604_800 = 7 days).
    pub token_lifetime_secs: u64,
    /// Token issuer (`iss` claim).
    pub token_issuer: String,
    /// Minimum password length for policy enforcement.
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: DEV_SECRET.into(),
            token_lifetime_secs: 604_800,
            token_issuer: "waypoint".into(),
            min_password_length: 6,
        }
    }
}

impl AuthConfig {
    /// Load configuration from the environment.
    ///
    /// A missing or empty secret is a startup error: deployments must
    /// never fall back to the development secret.
    pub fn from_env() -> Result<Self, AuthError> {
        let token_secret = std::env::var(TOKEN_SECRET_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(AuthError::MissingSecret)?;

        Ok(Self {
            token_secret,
            ..Self::default()
        })
    }

    /// Configuration with the fixed development secret. Test use only.
    pub fn for_tests() -> Self {
        Self::default()
    }
}
