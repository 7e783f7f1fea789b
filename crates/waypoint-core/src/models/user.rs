//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authorization level attached to a user. Closed set — every mutation
/// boundary validates against this enum, never a raw string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Mentor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Mentor => "mentor",
            Role::Admin => "admin",
        }
    }

    /// Parse a role string as received at the API boundary.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "student" => Some(Role::Student),
            "mentor" => Some(Role::Mentor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique, matched case-insensitively.
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    /// Gamification total. Only lowered by an explicit admin override.
    pub points: u32,
    pub age: Option<u32>,
    pub education_level: Option<String>,
    pub city: Option<String>,
    pub last_active: DateTime<Utc>,
    /// Creation instant; also the leaderboard tie-break order.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    /// Already hashed — raw passwords never reach the store.
    pub password_hash: String,
    pub age: Option<u32>,
    pub education_level: Option<String>,
    pub city: Option<String>,
}
