//! Assessment submission and retrieval endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use waypoint_core::models::assessment::{Assessment, CreateAssessment};
use waypoint_core::repository::AssessmentRepository;

use crate::api::{ANY_ROLE, require_caller};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(submit))
        .route("/latest", get(latest))
}

async fn submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<schemas::SubmitRequest>,
) -> ApiResult<(StatusCode, Json<Assessment>)> {
    let caller = require_caller(&state, &headers, ANY_ROLE).await?;

    if body.answers.is_empty() {
        return Err(ApiError::invalid_input("answers must not be empty"));
    }

    // The analyzer runs first; the store is only touched once it has
    // produced a result.
    let results = state.analyzer.analyze(&body.answers).await?;

    let assessment = state
        .store
        .assessments()
        .create(CreateAssessment {
            user_id: caller.id,
            answers: body.answers,
            results,
        })
        .await;

    Ok((StatusCode::CREATED, Json(assessment)))
}

async fn latest(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Assessment>> {
    let caller = require_caller(&state, &headers, ANY_ROLE).await?;

    let assessment = state
        .store
        .assessments()
        .latest_for_user(caller.id)
        .await
        .ok_or_else(|| ApiError::not_found("assessment"))?;
    Ok(Json(assessment))
}

pub mod schemas {
    use std::collections::BTreeMap;

    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SubmitRequest {
        /// Question id → selected option index.
        pub answers: BTreeMap<String, u32>,
    }
}
