//! User profile, leaderboard, and admin user-management endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, patch};
use axum::{Json, Router};
use uuid::Uuid;
use waypoint_core::models::user::{Role, User};
use waypoint_core::repository::UserRepository;
use waypoint_core::views;

use crate::api::{ANY_ROLE, require_caller};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/me", get(me))
        .route("/leaderboard", get(leaderboard))
        .route("/{id}/role", patch(update_role))
        .route("/{id}/points", patch(set_points))
}

async fn me(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Json<User>> {
    let user = require_caller(&state, &headers, ANY_ROLE).await?;
    Ok(Json(user))
}

/// Recomputed from the current user snapshot on every call — always
/// reflects the latest point totals.
async fn leaderboard(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<views::LeaderboardEntry>> {
    let users = state.store.users().list().await;
    Json(views::leaderboard(users))
}

async fn update_role(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<schemas::UpdateRoleRequest>,
) -> ApiResult<Json<User>> {
    require_caller(&state, &headers, &[Role::Admin]).await?;

    let role = Role::parse(&body.role)
        .ok_or_else(|| ApiError::invalid_input("role must be student, mentor, or admin"))?;

    let updated = state
        .store
        .users()
        .update_role(id, role)
        .await
        .ok_or_else(|| ApiError::not_found("user"))?;
    Ok(Json(updated))
}

async fn set_points(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<schemas::SetPointsRequest>,
) -> ApiResult<Json<User>> {
    require_caller(&state, &headers, &[Role::Admin]).await?;

    let updated = state
        .store
        .users()
        .set_points(id, body.points)
        .await
        .ok_or_else(|| ApiError::not_found("user"))?;
    Ok(Json(updated))
}

pub mod schemas {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct UpdateRoleRequest {
        pub role: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct SetPointsRequest {
        pub points: u32,
    }
}
