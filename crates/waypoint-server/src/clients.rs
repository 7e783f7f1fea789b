//! External AI collaborators, reached through narrow trait interfaces.
//!
//! The core only ever persists their opaque outputs, and only after a
//! successful call — a collaborator failure leaves the store untouched.
//! Timeout/retry policy belongs to the collaborator implementations, not
//! to the core.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use waypoint_core::models::chat::{ChatMessage, MessageRole};

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("collaborator returned an unusable result: {0}")]
    BadResult(String),
}

/// Scores and analyzes a submitted set of assessment answers into an
/// opaque results payload.
#[async_trait]
pub trait AssessmentAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        answers: &BTreeMap<String, u32>,
    ) -> Result<serde_json::Value, CollaboratorError>;
}

/// Produces the counselor's reply to a conversation.
#[async_trait]
pub trait ChatCounselor: Send + Sync {
    async fn reply(&self, history: &[ChatMessage]) -> Result<String, CollaboratorError>;
}

/// Offline analyzer used when no hosted analysis service is configured:
/// summarizes the answer distribution into the results payload.
pub struct OfflineAnalyzer;

#[async_trait]
impl AssessmentAnalyzer for OfflineAnalyzer {
    async fn analyze(
        &self,
        answers: &BTreeMap<String, u32>,
    ) -> Result<serde_json::Value, CollaboratorError> {
        let mut distribution: BTreeMap<u32, u32> = BTreeMap::new();
        for selected in answers.values() {
            *distribution.entry(*selected).or_default() += 1;
        }
        let dominant = distribution
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(option, _)| *option);

        Ok(serde_json::json!({
            "answered": answers.len(),
            "distribution": distribution,
            "dominant_option": dominant,
        }))
    }
}

/// Offline counselor used when no hosted model is configured: replies
/// with a generic prompt that acknowledges the latest user message.
pub struct OfflineCounselor;

#[async_trait]
impl ChatCounselor for OfflineCounselor {
    async fn reply(&self, history: &[ChatMessage]) -> Result<String, CollaboratorError> {
        let last = history
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .ok_or_else(|| CollaboratorError::BadResult("no user message in history".into()))?;

        Ok(format!(
            "Thanks for sharing. To go deeper on \"{}\", could you tell me \
             more about your interests and constraints?",
            last.content
        ))
    }
}
