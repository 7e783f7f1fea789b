//! Job-opening listing and admin management endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;
use waypoint_core::models::opening::{CreateOpening, Opening, UpdateOpening};
use waypoint_core::models::user::Role;
use waypoint_core::repository::OpeningRepository;
use waypoint_core::views::{self, OpeningFilter};

use crate::api::{ANY_ROLE, require_caller};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/categories", get(categories))
        .route(
            "/{id}",
            get(get_one).patch(update).delete(delete_one),
        )
        .route("/{id}/apply", post(apply))
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<schemas::ListQuery>,
) -> Json<Vec<Opening>> {
    // The public listing hides inactive openings unless explicitly asked
    // for the full set.
    let openings = state
        .store
        .openings()
        .list(query.active_only.unwrap_or(true))
        .await;

    let filter = OpeningFilter {
        category: query.category,
        kind: query.kind,
        search: query.search,
    };
    Json(views::filter_openings(openings, &filter))
}

async fn categories() -> Json<Vec<&'static str>> {
    Json(views::OPENING_CATEGORIES.to_vec())
}

async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Opening>> {
    let opening = state
        .store
        .openings()
        .get_by_id(id)
        .await
        .ok_or_else(|| ApiError::not_found("opening"))?;
    Ok(Json(opening))
}

async fn create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<schemas::CreateOpeningRequest>,
) -> ApiResult<(StatusCode, Json<Opening>)> {
    let admin = require_caller(&state, &headers, &[Role::Admin]).await?;

    if body.title.trim().is_empty() || body.company.trim().is_empty() {
        return Err(ApiError::invalid_input("title and company are required"));
    }

    let opening = state
        .store
        .openings()
        .create(CreateOpening {
            title: body.title,
            company: body.company,
            location: body.location,
            kind: body.kind,
            salary: body.salary,
            experience: body.experience,
            skills: body.skills,
            description: body.description,
            apply_url: body.apply_url,
            category: body.category,
            is_urgent: body.is_urgent,
            posted_by: admin.id,
            deadline: body.deadline,
        })
        .await;

    Ok((StatusCode::CREATED, Json(opening)))
}

async fn update(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateOpening>,
) -> ApiResult<Json<Opening>> {
    require_caller(&state, &headers, &[Role::Admin]).await?;

    let updated = state
        .store
        .openings()
        .update(id, body)
        .await
        .ok_or_else(|| ApiError::not_found("opening"))?;
    Ok(Json(updated))
}

/// Idempotent: deleting an absent opening is still 204.
async fn delete_one(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    require_caller(&state, &headers, &[Role::Admin]).await?;
    state.store.openings().delete(id).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn apply(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Opening>> {
    require_caller(&state, &headers, ANY_ROLE).await?;

    let opening = state
        .store
        .openings()
        .record_application(id)
        .await
        .ok_or_else(|| ApiError::not_found("opening"))?;
    Ok(Json(opening))
}

pub mod schemas {
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ListQuery {
        pub active_only: Option<bool>,
        pub category: Option<String>,
        pub kind: Option<String>,
        pub search: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CreateOpeningRequest {
        pub title: String,
        pub company: String,
        #[serde(default)]
        pub location: String,
        #[serde(default)]
        pub kind: String,
        pub salary: Option<String>,
        #[serde(default)]
        pub experience: String,
        #[serde(default)]
        pub skills: Vec<String>,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub apply_url: String,
        #[serde(default)]
        pub category: String,
        #[serde(default)]
        pub is_urgent: bool,
        pub deadline: Option<NaiveDate>,
    }
}
