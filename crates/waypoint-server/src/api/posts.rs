//! Community post endpoints.
//!
//! Posting, liking, and commenting are open to unauthenticated callers;
//! a valid bearer token attributes the action to the account instead of
//! the supplied display name.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;
use waypoint_core::models::post::{CommunityPost, CreateComment, CreatePost};
use waypoint_core::repository::PostRepository;
use waypoint_core::views::{self, PostFilter};

use crate::api::maybe_caller;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(list).post(create))
        .route("/categories", get(categories))
        .route("/posts/{id}", get(get_one))
        .route("/posts/{id}/like", post(like))
        .route("/posts/{id}/comments", post(comment))
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<schemas::ListQuery>,
) -> Json<Vec<CommunityPost>> {
    let posts = state.store.posts().list(query.category.as_deref()).await;

    let filter = PostFilter {
        category: None,
        search: query.search,
    };
    Json(views::filter_posts(posts, &filter))
}

async fn categories() -> Json<Vec<&'static str>> {
    Json(views::POST_CATEGORIES.to_vec())
}

async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CommunityPost>> {
    let post = state
        .store
        .posts()
        .get_by_id(id)
        .await
        .ok_or_else(|| ApiError::not_found("post"))?;
    Ok(Json(post))
}

async fn create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<schemas::CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<CommunityPost>)> {
    if body.title.trim().is_empty() || body.content.trim().is_empty() {
        return Err(ApiError::invalid_input("title and content are required"));
    }

    let (user_id, user_name) = attribution(&state, &headers, body.user_name).await;

    let post = state
        .store
        .posts()
        .create(CreatePost {
            user_id,
            user_name,
            title: body.title,
            content: body.content,
            category: body.category,
            tags: body.tags,
        })
        .await;

    Ok((StatusCode::CREATED, Json(post)))
}

async fn like(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CommunityPost>> {
    let post = state
        .store
        .posts()
        .like(id)
        .await
        .ok_or_else(|| ApiError::not_found("post"))?;
    Ok(Json(post))
}

async fn comment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<schemas::CreateCommentRequest>,
) -> ApiResult<Json<CommunityPost>> {
    if body.content.trim().is_empty() {
        return Err(ApiError::invalid_input("comment content must not be empty"));
    }

    let (user_id, user_name) = attribution(&state, &headers, body.user_name).await;

    let post = state
        .store
        .posts()
        .add_comment(
            id,
            CreateComment {
                user_id,
                user_name,
                content: body.content,
            },
        )
        .await
        .ok_or_else(|| ApiError::not_found("post"))?;
    Ok(Json(post))
}

/// Account identity when a valid token is presented, otherwise the
/// supplied display name (or "anon").
async fn attribution(
    state: &AppState,
    headers: &HeaderMap,
    fallback_name: Option<String>,
) -> (Option<Uuid>, String) {
    match maybe_caller(state, headers).await {
        Some(user) => (Some(user.id), user.name),
        None => (None, fallback_name.unwrap_or_else(|| "anon".into())),
    }
}

pub mod schemas {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ListQuery {
        pub category: Option<String>,
        pub search: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CreatePostRequest {
        pub title: String,
        pub content: String,
        #[serde(default)]
        pub category: String,
        #[serde(default)]
        pub tags: Vec<String>,
        /// Display name for anonymous authors.
        pub user_name: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CreateCommentRequest {
        pub content: String,
        /// Display name for anonymous commenters.
        pub user_name: Option<String>,
    }
}
