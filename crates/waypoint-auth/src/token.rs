//! Signed, self-contained identity tokens (HS256 JWT).
//!
//! Tokens embed the subject id, the caller's role at issuance, and
//! issue/expiry instants. They are opaque everywhere else in the system;
//! only this module parses them.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use waypoint_core::models::user::Role;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Claims embedded in every identity token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — user ID (UUID string).
    pub sub: String,
    /// Role at issuance. Advisory only: the guard re-checks the store.
    pub role: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Issue a signed token for a user, expiring after the configured
/// lifetime (7 days by default).
pub fn issue_token(user_id: Uuid, role: Role, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.as_str().to_string(),
        iss: config.token_issuer.clone(),
        iat: now,
        exp: now + config.token_lifetime_secs as i64,
    };

    let key = EncodingKey::from_secret(config.token_secret.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("token encode: {e}")))
}

/// Decode and verify a token: signature, expiry, and issuer.
///
/// Malformed input and bad signatures yield `TokenInvalid`; a past
/// expiry yields `TokenExpired`. Never panics.
pub fn decode_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(config.token_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.token_issuer]);
    validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

    jsonwebtoken::decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid(e.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig::for_tests()
    }

    #[test]
    fn token_roundtrip() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let token = issue_token(user_id, Role::Mentor, &config).unwrap();
        let claims = decode_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, "mentor");
        assert_eq!(claims.iss, "waypoint");
        assert_eq!(claims.exp - claims.iat, 604_800);
    }

    #[test]
    fn tampered_token_is_invalid() {
        let config = test_config();
        let token = issue_token(Uuid::new_v4(), Role::Student, &config).unwrap();

        let tampered = format!("{token}x");
        assert!(matches!(
            decode_token(&tampered, &config),
            Err(AuthError::TokenInvalid(_))
        ));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let config = test_config();
        assert!(matches!(
            decode_token("not.a.token", &config),
            Err(AuthError::TokenInvalid(_))
        ));
        assert!(matches!(
            decode_token("", &config),
            Err(AuthError::TokenInvalid(_))
        ));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let config = test_config();
        let token = issue_token(Uuid::new_v4(), Role::Student, &config).unwrap();

        let other = AuthConfig {
            token_secret: "different-secret".into(),
            ..test_config()
        };
        assert!(decode_token(&token, &other).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config();

        // Sign claims whose expiry is an hour in the past.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: "student".into(),
            iss: config.token_issuer.clone(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let key = EncodingKey::from_secret(config.token_secret.as_bytes());
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key).unwrap();

        assert!(matches!(
            decode_token(&token, &config),
            Err(AuthError::TokenExpired)
        ));
    }
}
