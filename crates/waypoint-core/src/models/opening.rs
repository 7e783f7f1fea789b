//! Job/internship opening domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opening {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Employment kind (full-time, internship, ...). Open string.
    pub kind: String,
    pub salary: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub description: String,
    pub apply_url: String,
    /// Open category string — known values live in [`crate::views`].
    pub category: String,
    /// Gates visibility in the public listing.
    pub is_active: bool,
    pub is_urgent: bool,
    pub posted_by: Uuid,
    pub posted_at: DateTime<Utc>,
    pub deadline: Option<NaiveDate>,
    pub applicants: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOpening {
    pub title: String,
    pub company: String,
    pub location: String,
    pub kind: String,
    /// Defaults to "Not Disclosed" when absent.
    pub salary: Option<String>,
    pub experience: String,
    pub skills: Vec<String>,
    pub description: String,
    pub apply_url: String,
    pub category: String,
    pub is_urgent: bool,
    pub posted_by: Uuid,
    pub deadline: Option<NaiveDate>,
}

/// Partial update — `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOpening {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub kind: Option<String>,
    pub salary: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<Vec<String>>,
    pub description: Option<String>,
    pub apply_url: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub is_urgent: Option<bool>,
    /// `Some(Some(d))` = set, `Some(None)` = clear, `None` = no change.
    pub deadline: Option<Option<NaiveDate>>,
}
