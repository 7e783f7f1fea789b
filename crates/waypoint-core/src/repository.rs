//! Repository trait definitions for the entity store.
//!
//! All operations are async. Absence is reported as `Option`, never as an
//! error — callers translate `None` into a 404-class outcome at the
//! boundary. The one store-raised error is the email-uniqueness conflict
//! on user creation. Every mutating operation is atomic with respect to
//! all other mutations of the same collection; unfiltered listings are
//! observed in insertion order.

use uuid::Uuid;

use crate::error::CoreResult;
use crate::models::{
    assessment::{Assessment, CreateAssessment},
    chat::{ChatMessage, ChatSession},
    opening::{CreateOpening, Opening, UpdateOpening},
    post::{CommunityPost, CreateComment, CreatePost},
    user::{CreateUser, Role, User},
};

pub trait UserRepository: Send + Sync {
    /// Insert a new user. The uniqueness check (case-insensitive email)
    /// and the insert are a single atomic step; a collision yields
    /// `AlreadyExists` and never a second user.
    fn create(&self, input: CreateUser) -> impl Future<Output = CoreResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Option<User>> + Send;
    /// Case-insensitive email lookup.
    fn get_by_email(&self, email: &str) -> impl Future<Output = Option<User>> + Send;
    /// Replace the role. The caller has already validated admin authority.
    fn update_role(&self, id: Uuid, role: Role) -> impl Future<Output = Option<User>> + Send;
    /// Add points from a gamified action. Never lowers the total.
    fn award_points(&self, id: Uuid, points: u32) -> impl Future<Output = Option<User>> + Send;
    /// Admin override — the only path that may lower a points total.
    fn set_points(&self, id: Uuid, points: u32) -> impl Future<Output = Option<User>> + Send;
    fn touch_last_active(&self, id: Uuid) -> impl Future<Output = Option<User>> + Send;
    /// Snapshot of all users in insertion (= creation) order.
    fn list(&self) -> impl Future<Output = Vec<User>> + Send;
}

pub trait OpeningRepository: Send + Sync {
    fn create(&self, input: CreateOpening) -> impl Future<Output = Opening> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Option<Opening>> + Send;
    /// Snapshot in insertion order, optionally restricted to active
    /// openings (the public listing view).
    fn list(&self, active_only: bool) -> impl Future<Output = Vec<Opening>> + Send;
    /// Partial merge over the existing record.
    fn update(&self, id: Uuid, input: UpdateOpening)
    -> impl Future<Output = Option<Opening>> + Send;
    /// Idempotent — returns `false` when the id was already absent.
    fn delete(&self, id: Uuid) -> impl Future<Output = bool> + Send;
    /// Atomic applicants-counter increment, consumed by the apply flow.
    fn record_application(&self, id: Uuid) -> impl Future<Output = Option<Opening>> + Send;
}

pub trait AssessmentRepository: Send + Sync {
    fn create(&self, input: CreateAssessment) -> impl Future<Output = Assessment> + Send;
    /// The most recently created assessment for the user, if any.
    fn latest_for_user(&self, user_id: Uuid) -> impl Future<Output = Option<Assessment>> + Send;
    fn list_for_user(&self, user_id: Uuid) -> impl Future<Output = Vec<Assessment>> + Send;
}

pub trait ChatSessionRepository: Send + Sync {
    /// Atomic check-then-create: an existing session is returned as-is
    /// (the passed `user_id` is ignored — the first creator owns the
    /// session); otherwise a new empty session is created bound to
    /// `user_id`. Concurrent first calls for one id must converge on a
    /// single session.
    fn get_or_create(
        &self,
        id: &str,
        user_id: Uuid,
    ) -> impl Future<Output = ChatSession> + Send;
    fn get(&self, id: &str) -> impl Future<Output = Option<ChatSession>> + Send;
    /// Append a batch of messages in one atomic step, so a user turn and
    /// the counselor reply land together or not at all.
    fn append_messages(
        &self,
        id: &str,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Option<ChatSession>> + Send;
    fn list_for_user(&self, user_id: Uuid) -> impl Future<Output = Vec<ChatSession>> + Send;
}

pub trait PostRepository: Send + Sync {
    fn create(&self, input: CreatePost) -> impl Future<Output = CommunityPost> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Option<CommunityPost>> + Send;
    /// Snapshot in insertion order, optionally restricted to one category
    /// (exact, case-insensitive).
    fn list(&self, category: Option<&str>) -> impl Future<Output = Vec<CommunityPost>> + Send;
    /// Atomic like increment — concurrent likes must all be counted.
    fn like(&self, id: Uuid) -> impl Future<Output = Option<CommunityPost>> + Send;
    fn add_comment(
        &self,
        id: Uuid,
        comment: CreateComment,
    ) -> impl Future<Output = Option<CommunityPost>> + Send;
}
