//! Career assessment domain model.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One submitted assessment: the user's answers plus the opaque result
/// payload produced by the external analysis service. Immutable once
/// stored; a user may accumulate many, "latest" = greatest creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Question id → selected option index.
    pub answers: BTreeMap<String, u32>,
    /// Opaque structured payload from the analysis collaborator.
    pub results: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssessment {
    pub user_id: Uuid,
    pub answers: BTreeMap<String, u32>,
    pub results: serde_json::Value,
}
