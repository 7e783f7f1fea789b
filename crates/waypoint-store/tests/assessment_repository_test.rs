//! Integration tests for the in-memory assessment repository.

use std::collections::BTreeMap;

use serde_json::json;
use uuid::Uuid;
use waypoint_core::models::assessment::CreateAssessment;
use waypoint_core::repository::AssessmentRepository;
use waypoint_store::MemoryAssessmentRepository;

fn submission(user_id: Uuid, first_answer: u32) -> CreateAssessment {
    let mut answers = BTreeMap::new();
    answers.insert("q1".to_string(), first_answer);
    answers.insert("q2".to_string(), 2);
    CreateAssessment {
        user_id,
        answers,
        results: json!({ "recommended": ["data-science"], "confidence": 0.8 }),
    }
}

#[tokio::test]
async fn latest_is_most_recently_created() {
    let repo = MemoryAssessmentRepository::new();
    let user = Uuid::new_v4();

    let first = repo.create(submission(user, 0)).await;
    let second = repo.create(submission(user, 1)).await;
    assert_ne!(first.id, second.id);

    let latest = repo.latest_for_user(user).await.unwrap();
    assert_eq!(latest.id, second.id);
    assert_eq!(latest.answers["q1"], 1);
}

#[tokio::test]
async fn latest_for_unknown_user_is_absent() {
    let repo = MemoryAssessmentRepository::new();
    assert!(repo.latest_for_user(Uuid::new_v4()).await.is_none());
}

#[tokio::test]
async fn list_is_scoped_to_user_in_creation_order() {
    let repo = MemoryAssessmentRepository::new();
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();

    let a = repo.create(submission(user, 0)).await;
    repo.create(submission(other, 0)).await;
    let b = repo.create(submission(user, 1)).await;

    let listed = repo.list_for_user(user).await;
    let ids: Vec<_> = listed.iter().map(|x| x.id).collect();
    assert_eq!(ids, [a.id, b.id]);
}

#[tokio::test]
async fn results_payload_is_stored_opaquely() {
    let repo = MemoryAssessmentRepository::new();
    let user = Uuid::new_v4();

    let created = repo.create(submission(user, 0)).await;
    assert_eq!(created.results["recommended"][0], "data-science");
}
