//! In-memory implementation of [`UserRepository`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use waypoint_core::error::{CoreError, CoreResult};
use waypoint_core::models::user::{CreateUser, Role, User};
use waypoint_core::repository::UserRepository;

/// In-memory user collection. The backing `Vec` is kept in creation
/// order, which doubles as the leaderboard tie-break order.
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn update_where<F>(&self, id: Uuid, apply: F) -> Option<User>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id)?;
        apply(user);
        Some(user.clone())
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, input: CreateUser) -> CoreResult<User> {
        // Uniqueness check and insert under one write guard, so two
        // concurrent signups with the same email cannot both pass.
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&input.email))
        {
            return Err(CoreError::AlreadyExists {
                entity: "user".into(),
            });
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: input.email,
            name: input.name,
            password_hash: input.password_hash,
            role: Role::Student,
            points: 0,
            age: input.age,
            education_level: input.education_level,
            city: input.city,
            last_active: now,
            created_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    async fn get_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    async fn update_role(&self, id: Uuid, role: Role) -> Option<User> {
        self.update_where(id, |u| u.role = role).await
    }

    async fn award_points(&self, id: Uuid, points: u32) -> Option<User> {
        self.update_where(id, |u| u.points = u.points.saturating_add(points))
            .await
    }

    async fn set_points(&self, id: Uuid, points: u32) -> Option<User> {
        self.update_where(id, |u| u.points = points).await
    }

    async fn touch_last_active(&self, id: Uuid) -> Option<User> {
        self.update_where(id, |u| u.last_active = Utc::now()).await
    }

    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}
