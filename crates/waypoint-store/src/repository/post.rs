//! In-memory implementation of [`PostRepository`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use waypoint_core::models::post::{Comment, CommunityPost, CreateComment, CreatePost};
use waypoint_core::repository::PostRepository;

#[derive(Clone, Default)]
pub struct MemoryPostRepository {
    posts: Arc<RwLock<Vec<CommunityPost>>>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for MemoryPostRepository {
    async fn create(&self, input: CreatePost) -> CommunityPost {
        let post = CommunityPost {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            user_name: input.user_name,
            title: input.title,
            content: input.content,
            category: input.category,
            tags: input.tags,
            likes: 0,
            comments: Vec::new(),
            created_at: Utc::now(),
        };
        self.posts.write().await.push(post.clone());
        post
    }

    async fn get_by_id(&self, id: Uuid) -> Option<CommunityPost> {
        self.posts.read().await.iter().find(|p| p.id == id).cloned()
    }

    async fn list(&self, category: Option<&str>) -> Vec<CommunityPost> {
        self.posts
            .read()
            .await
            .iter()
            .filter(|p| match category {
                Some(c) => p.category.eq_ignore_ascii_case(c),
                None => true,
            })
            .cloned()
            .collect()
    }

    async fn like(&self, id: Uuid) -> Option<CommunityPost> {
        // Read-modify-write under one write guard — concurrent likes all
        // land.
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|p| p.id == id)?;
        post.likes = post.likes.saturating_add(1);
        Some(post.clone())
    }

    async fn add_comment(&self, id: Uuid, comment: CreateComment) -> Option<CommunityPost> {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|p| p.id == id)?;
        post.comments.push(Comment {
            user_id: comment.user_id,
            user_name: comment.user_name,
            content: comment.content,
            timestamp: Utc::now(),
        });
        Some(post.clone())
    }
}
