//! In-memory implementation of [`OpeningRepository`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use waypoint_core::models::opening::{CreateOpening, Opening, UpdateOpening};
use waypoint_core::repository::OpeningRepository;

#[derive(Clone, Default)]
pub struct MemoryOpeningRepository {
    openings: Arc<RwLock<Vec<Opening>>>,
}

impl MemoryOpeningRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OpeningRepository for MemoryOpeningRepository {
    async fn create(&self, input: CreateOpening) -> Opening {
        let opening = Opening {
            id: Uuid::new_v4(),
            title: input.title,
            company: input.company,
            location: input.location,
            kind: input.kind,
            salary: input.salary.unwrap_or_else(|| "Not Disclosed".into()),
            experience: input.experience,
            skills: input.skills,
            description: input.description,
            apply_url: input.apply_url,
            category: input.category,
            is_active: true,
            is_urgent: input.is_urgent,
            posted_by: input.posted_by,
            posted_at: Utc::now(),
            deadline: input.deadline,
            applicants: 0,
        };
        self.openings.write().await.push(opening.clone());
        opening
    }

    async fn get_by_id(&self, id: Uuid) -> Option<Opening> {
        self.openings
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    async fn list(&self, active_only: bool) -> Vec<Opening> {
        self.openings
            .read()
            .await
            .iter()
            .filter(|o| !active_only || o.is_active)
            .cloned()
            .collect()
    }

    async fn update(&self, id: Uuid, input: UpdateOpening) -> Option<Opening> {
        let mut openings = self.openings.write().await;
        let opening = openings.iter_mut().find(|o| o.id == id)?;

        if let Some(title) = input.title {
            opening.title = title;
        }
        if let Some(company) = input.company {
            opening.company = company;
        }
        if let Some(location) = input.location {
            opening.location = location;
        }
        if let Some(kind) = input.kind {
            opening.kind = kind;
        }
        if let Some(salary) = input.salary {
            opening.salary = salary;
        }
        if let Some(experience) = input.experience {
            opening.experience = experience;
        }
        if let Some(skills) = input.skills {
            opening.skills = skills;
        }
        if let Some(description) = input.description {
            opening.description = description;
        }
        if let Some(apply_url) = input.apply_url {
            opening.apply_url = apply_url;
        }
        if let Some(category) = input.category {
            opening.category = category;
        }
        if let Some(is_active) = input.is_active {
            opening.is_active = is_active;
        }
        if let Some(is_urgent) = input.is_urgent {
            opening.is_urgent = is_urgent;
        }
        if let Some(deadline) = input.deadline {
            // Some(Some(d)) = set, Some(None) = clear.
            opening.deadline = deadline;
        }

        Some(opening.clone())
    }

    async fn delete(&self, id: Uuid) -> bool {
        let mut openings = self.openings.write().await;
        let before = openings.len();
        openings.retain(|o| o.id != id);
        openings.len() != before
    }

    async fn record_application(&self, id: Uuid) -> Option<Opening> {
        let mut openings = self.openings.write().await;
        let opening = openings.iter_mut().find(|o| o.id == id)?;
        opening.applicants = opening.applicants.saturating_add(1);
        Some(opening.clone())
    }
}
