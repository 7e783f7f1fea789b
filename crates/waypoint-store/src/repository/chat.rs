//! In-memory implementation of [`ChatSessionRepository`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use waypoint_core::models::chat::{ChatMessage, ChatSession};
use waypoint_core::repository::ChatSessionRepository;

#[derive(Clone, Default)]
pub struct MemoryChatSessionRepository {
    sessions: Arc<RwLock<Vec<ChatSession>>>,
}

impl MemoryChatSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChatSessionRepository for MemoryChatSessionRepository {
    async fn get_or_create(&self, id: &str, user_id: Uuid) -> ChatSession {
        // Check and insert under one write guard: concurrent first
        // messages for a new id converge on a single session, and the
        // second caller's user_id is ignored.
        let mut sessions = self.sessions.write().await;
        if let Some(existing) = sessions.iter().find(|s| s.id == id) {
            return existing.clone();
        }

        let session = ChatSession {
            id: id.to_string(),
            user_id,
            messages: Vec::new(),
            created_at: Utc::now(),
        };
        sessions.push(session.clone());
        session
    }

    async fn get(&self, id: &str) -> Option<ChatSession> {
        self.sessions
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    async fn append_messages(&self, id: &str, messages: Vec<ChatMessage>) -> Option<ChatSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.iter_mut().find(|s| s.id == id)?;
        session.messages.extend(messages);
        Some(session.clone())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Vec<ChatSession> {
        self.sessions
            .read()
            .await
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect()
    }
}
