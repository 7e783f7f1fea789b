//! In-memory repository implementations.
//!
//! Each repository owns an `Arc<RwLock<_>>` over a `Vec` kept in
//! insertion order — the order unfiltered listings observe. Compound
//! check-then-write operations (uniqueness check + insert, get-or-create)
//! hold a single write guard for the whole critical section.

mod assessment;
mod chat;
mod opening;
mod post;
mod user;

pub use assessment::MemoryAssessmentRepository;
pub use chat::MemoryChatSessionRepository;
pub use opening::MemoryOpeningRepository;
pub use post::MemoryPostRepository;
pub use user::MemoryUserRepository;
