//! In-memory implementation of [`AssessmentRepository`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use waypoint_core::models::assessment::{Assessment, CreateAssessment};
use waypoint_core::repository::AssessmentRepository;

#[derive(Clone, Default)]
pub struct MemoryAssessmentRepository {
    assessments: Arc<RwLock<Vec<Assessment>>>,
}

impl MemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssessmentRepository for MemoryAssessmentRepository {
    async fn create(&self, input: CreateAssessment) -> Assessment {
        let assessment = Assessment {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            answers: input.answers,
            results: input.results,
            created_at: Utc::now(),
        };
        self.assessments.write().await.push(assessment.clone());
        assessment
    }

    async fn latest_for_user(&self, user_id: Uuid) -> Option<Assessment> {
        // The Vec is in creation order, so the last match is the latest.
        self.assessments
            .read()
            .await
            .iter()
            .rev()
            .find(|a| a.user_id == user_id)
            .cloned()
    }

    async fn list_for_user(&self, user_id: Uuid) -> Vec<Assessment> {
        self.assessments
            .read()
            .await
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }
}
