//! Authentication service — signup and login orchestration.

use waypoint_core::error::{CoreError, CoreResult};
use waypoint_core::models::user::{CreateUser, User};
use waypoint_core::repository::UserRepository;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Input for the signup flow.
#[derive(Debug)]
pub struct SignupInput {
    pub email: String,
    pub name: String,
    pub password: String,
    pub age: Option<u32>,
    pub education_level: Option<String>,
    pub city: Option<String>,
}

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Successful signup/login result.
#[derive(Debug)]
pub struct AuthOutput {
    /// Signed identity token.
    pub token: String,
    /// The authenticated user record.
    pub user: User,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/// Authentication service.
///
/// Generic over the user repository so that this layer has no dependency
/// on the store crate.
pub struct AuthService<U: UserRepository> {
    users: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: U, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Register a new account and issue its first token.
    ///
    /// A duplicate email (case-insensitive) yields `AlreadyExists` from
    /// the store; no second user is ever created.
    pub async fn signup(&self, input: SignupInput) -> CoreResult<AuthOutput> {
        let email = input.email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::Validation {
                message: "a valid email address is required".into(),
            });
        }
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "name must not be empty".into(),
            });
        }
        if input.password.len() < self.config.min_password_length {
            return Err(CoreError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }

        let password_hash = password::hash_password(&input.password)?;
        let user = self
            .users
            .create(CreateUser {
                email,
                name: input.name.trim().to_string(),
                password_hash,
                age: input.age,
                education_level: input.education_level,
                city: input.city,
            })
            .await?;

        let token = token::issue_token(user.id, user.role, &self.config)?;
        Ok(AuthOutput {
            token,
            user,
            expires_in: self.config.token_lifetime_secs,
        })
    }

    /// Authenticate with email + password and issue a fresh token.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller — both yield the one invalid-credentials outcome, so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, input: LoginInput) -> CoreResult<AuthOutput> {
        let Some(user) = self.users.get_by_email(input.email.trim()).await else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(&input.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        // Record the login as activity; the refreshed record is what the
        // caller sees.
        let user = self.users.touch_last_active(user.id).await.unwrap_or(user);

        let token = token::issue_token(user.id, user.role, &self.config)?;
        Ok(AuthOutput {
            token,
            user,
            expires_in: self.config.token_lifetime_secs,
        })
    }
}
