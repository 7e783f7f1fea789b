//! Domain models for Waypoint.
//!
//! These are the core types shared across all crates. The store owns
//! every collection; callers only ever receive cloned snapshots.

pub mod assessment;
pub mod chat;
pub mod opening;
pub mod post;
pub mod user;
