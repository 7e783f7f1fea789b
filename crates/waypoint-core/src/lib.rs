//! Waypoint Core — domain models, error taxonomy, repository traits,
//! and derived read views shared across all crates.

pub mod error;
pub mod models;
pub mod repository;
pub mod views;

pub use error::{CoreError, CoreResult};
