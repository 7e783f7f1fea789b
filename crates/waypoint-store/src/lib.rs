//! Waypoint Store — the concurrency-safe in-memory entity store.
//!
//! This crate provides:
//! - One repository per collection, each guarding its data with its own
//!   lock so unrelated operations never serialize against each other
//! - The [`MemoryStore`] aggregate, constructed explicitly at process
//!   start and passed by reference to every component that needs it
//!
//! State lives for the process lifetime only; a restart loses all data
//! by design.

pub mod repository;

pub use repository::{
    MemoryAssessmentRepository, MemoryChatSessionRepository, MemoryOpeningRepository,
    MemoryPostRepository, MemoryUserRepository,
};

/// The process-wide entity store: one in-memory repository per
/// collection. Cloning is cheap (each repository is a shared handle) and
/// every clone observes the same state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: MemoryUserRepository,
    openings: MemoryOpeningRepository,
    assessments: MemoryAssessmentRepository,
    chat_sessions: MemoryChatSessionRepository,
    posts: MemoryPostRepository,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &MemoryUserRepository {
        &self.users
    }

    pub fn openings(&self) -> &MemoryOpeningRepository {
        &self.openings
    }

    pub fn assessments(&self) -> &MemoryAssessmentRepository {
        &self.assessments
    }

    pub fn chat_sessions(&self) -> &MemoryChatSessionRepository {
        &self.chat_sessions
    }

    pub fn posts(&self) -> &MemoryPostRepository {
        &self.posts
    }
}
