//! Counselor chat endpoints.
//!
//! Session retrieval is idempotent-by-id: fetching an unknown id creates
//! an empty session bound to the caller; fetching a known id returns it
//! as-is, whoever the caller is.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use waypoint_core::models::chat::{ChatMessage, ChatSession};
use waypoint_core::repository::ChatSessionRepository;

use crate::api::{ANY_ROLE, require_caller};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_sessions))
        .route("/{session_id}", get(get_session))
        .route("/{session_id}/messages", post(send_message))
}

async fn list_sessions(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<ChatSession>>> {
    let caller = require_caller(&state, &headers, ANY_ROLE).await?;
    Ok(Json(state.store.chat_sessions().list_for_user(caller.id).await))
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(session_id): Path<String>,
) -> ApiResult<Json<ChatSession>> {
    let caller = require_caller(&state, &headers, ANY_ROLE).await?;

    let session = state
        .store
        .chat_sessions()
        .get_or_create(&session_id, caller.id)
        .await;
    Ok(Json(session))
}

async fn send_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(session_id): Path<String>,
    Json(body): Json<schemas::SendMessageRequest>,
) -> ApiResult<Json<ChatSession>> {
    let caller = require_caller(&state, &headers, ANY_ROLE).await?;

    if body.content.trim().is_empty() {
        return Err(ApiError::invalid_input("message content must not be empty"));
    }

    let session = state
        .store
        .chat_sessions()
        .get_or_create(&session_id, caller.id)
        .await;

    // Run the counselor over the would-be history first; the user turn
    // and the reply are persisted together only once it succeeds.
    let user_message = ChatMessage::user(body.content);
    let mut history = session.messages;
    history.push(user_message.clone());
    let reply = state.counselor.reply(&history).await?;

    let updated = state
        .store
        .chat_sessions()
        .append_messages(&session_id, vec![user_message, ChatMessage::assistant(reply)])
        .await
        .ok_or_else(|| ApiError::not_found("chat session"))?;
    Ok(Json(updated))
}

pub mod schemas {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SendMessageRequest {
        pub content: String,
    }
}
