//! Community post domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Absent for anonymous commenters.
    pub user_id: Option<Uuid>,
    pub user_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A user-authored forum post. Likes only increment and comments are
/// append-only; posts are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: Uuid,
    /// Absent for anonymous authors.
    pub user_id: Option<Uuid>,
    pub user_name: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    pub user_id: Option<Uuid>,
    pub user_name: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub user_id: Option<Uuid>,
    pub user_name: String,
    pub content: String,
}
