//! Role-based authorization guard.
//!
//! The two checks here are the only authorization surface the router is
//! allowed to use: [`AuthorizationGuard::resolve_caller`] to establish
//! identity and [`AuthorizationGuard::require_role`] before every
//! privileged operation. The contract is fail closed — missing token,
//! unknown subject, or stale role all deny.

use uuid::Uuid;
use waypoint_core::error::{CoreError, CoreResult};
use waypoint_core::models::user::{Role, User};
use waypoint_core::repository::UserRepository;

use crate::config::AuthConfig;
use crate::token;

pub struct AuthorizationGuard<U: UserRepository> {
    users: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthorizationGuard<U> {
    pub fn new(users: U, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Resolve a bearer token to the caller's user id.
    ///
    /// The token must verify (signature, expiry, issuer) and its subject
    /// must still exist in the store — a validly signed token for a
    /// since-removed subject resolves to `None`.
    pub async fn resolve_caller(&self, raw_token: &str) -> Option<Uuid> {
        let claims = token::decode_token(raw_token, &self.config).ok()?;
        let id = Uuid::parse_str(&claims.sub).ok()?;
        self.users.get_by_id(id).await.map(|user| user.id)
    }

    /// Fetch the caller and check role membership.
    ///
    /// An unknown subject is an authentication failure (401-class); a
    /// known subject outside the allowed set is an authorization denial
    /// (403-class). The role is read from the store at call time, so a
    /// demotion takes effect immediately regardless of what older tokens
    /// claim.
    pub async fn require_role(&self, user_id: Uuid, allowed: &[Role]) -> CoreResult<User> {
        let user = self.users.get_by_id(user_id).await.ok_or_else(|| {
            CoreError::AuthenticationFailed {
                reason: "unknown subject".into(),
            }
        })?;

        if allowed.contains(&user.role) {
            Ok(user)
        } else {
            Err(CoreError::AuthorizationDenied {
                reason: format!("role '{}' is not permitted here", user.role.as_str()),
            })
        }
    }
}
