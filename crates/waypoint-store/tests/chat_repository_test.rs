//! Integration tests for the in-memory chat-session repository,
//! including the atomicity of get-or-create under concurrent first
//! contact.

use std::collections::HashSet;

use uuid::Uuid;
use waypoint_core::models::chat::ChatMessage;
use waypoint_core::repository::ChatSessionRepository;
use waypoint_store::MemoryChatSessionRepository;

#[tokio::test]
async fn get_or_create_is_idempotent_by_id() {
    let repo = MemoryChatSessionRepository::new();
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();

    let first = repo.get_or_create("session-1", owner).await;
    assert_eq!(first.user_id, owner);
    assert!(first.messages.is_empty());

    // A second caller with a different user id gets the same session,
    // still bound to the first creator.
    let second = repo.get_or_create("session-1", other).await;
    assert_eq!(second.id, first.id);
    assert_eq!(second.user_id, owner);
}

#[tokio::test]
async fn concurrent_first_contact_converges_on_one_session() {
    let repo = MemoryChatSessionRepository::new();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let repo = repo.clone();
        let caller = Uuid::new_v4();
        handles.push(tokio::spawn(
            async move { repo.get_or_create("race", caller).await },
        ));
    }

    let mut owners = HashSet::new();
    for handle in handles {
        owners.insert(handle.await.unwrap().user_id);
    }

    // Every caller observed the same owner — no divergent sessions.
    assert_eq!(owners.len(), 1);
    let session = repo.get("race").await.unwrap();
    assert!(owners.contains(&session.user_id));
}

#[tokio::test]
async fn append_lands_user_turn_and_reply_together() {
    let repo = MemoryChatSessionRepository::new();
    let owner = Uuid::new_v4();
    repo.get_or_create("s", owner).await;

    let updated = repo
        .append_messages(
            "s",
            vec![
                ChatMessage::user("What suits a biology major?"),
                ChatMessage::assistant("Consider bioinformatics."),
            ],
        )
        .await
        .unwrap();

    assert_eq!(updated.messages.len(), 2);
    assert_eq!(updated.messages[0].content, "What suits a biology major?");
    assert_eq!(updated.messages[1].content, "Consider bioinformatics.");

    // Appending to an unknown session is absence, not creation.
    assert!(
        repo.append_messages("missing", vec![ChatMessage::user("?")])
            .await
            .is_none()
    );
}

#[tokio::test]
async fn list_for_user_only_returns_owned_sessions() {
    let repo = MemoryChatSessionRepository::new();
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();

    repo.get_or_create("a", owner).await;
    repo.get_or_create("b", owner).await;
    repo.get_or_create("c", other).await;

    let owned = repo.list_for_user(owner).await;
    let ids: Vec<_> = owned.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}
