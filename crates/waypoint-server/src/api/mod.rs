//! API surface: per-resource routers plus the shared authentication
//! helpers.
//!
//! Bearer-token extraction happens here — the core only ever sees the
//! extracted token string. Missing/invalid tokens map to a 401-class
//! response, role denials to 403, distinctly.

pub mod assessments;
pub mod auth;
pub mod chat;
pub mod openings;
pub mod posts;
pub mod users;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderMap, header};
use uuid::Uuid;
use waypoint_core::models::user::{Role, User};
use waypoint_core::repository::UserRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// All roles — the check for "any authenticated caller".
pub(crate) const ANY_ROLE: &[Role] = &[Role::Student, Role::Mentor, Role::Admin];

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/openings", openings::router())
        .nest("/assessments", assessments::router())
        .nest("/chat", chat::router())
        .nest("/community", posts::router())
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolve the caller or fail with a 401-class error.
pub(crate) async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let token = bearer_token(headers).ok_or_else(ApiError::unauthenticated)?;
    state
        .guard
        .resolve_caller(token)
        .await
        .ok_or_else(ApiError::unauthenticated)
}

/// Resolve the caller and enforce role membership in one step.
pub(crate) async fn require_caller(
    state: &AppState,
    headers: &HeaderMap,
    allowed: &[Role],
) -> Result<User, ApiError> {
    let caller = authenticate(state, headers).await?;
    Ok(state.guard.require_role(caller, allowed).await?)
}

/// Resolve the caller if a valid token is present; anonymous otherwise.
pub(crate) async fn maybe_caller(state: &AppState, headers: &HeaderMap) -> Option<User> {
    let token = bearer_token(headers)?;
    let caller = state.guard.resolve_caller(token).await?;
    state.store.users().get_by_id(caller).await
}
