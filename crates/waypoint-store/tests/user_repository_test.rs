//! Integration tests for the in-memory user repository.

use waypoint_core::error::CoreError;
use waypoint_core::models::user::{CreateUser, Role};
use waypoint_core::repository::UserRepository;
use waypoint_store::MemoryUserRepository;

fn alice() -> CreateUser {
    CreateUser {
        email: "alice@example.com".into(),
        name: "Alice".into(),
        password_hash: "$argon2id$fake".into(),
        age: Some(21),
        education_level: Some("undergraduate".into()),
        city: Some("Pune".into()),
    }
}

#[tokio::test]
async fn create_and_get_user() {
    let repo = MemoryUserRepository::new();

    let user = repo.create(alice()).await.unwrap();
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.points, 0);

    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.name, "Alice");
}

#[tokio::test]
async fn duplicate_email_conflicts_case_insensitively() {
    let repo = MemoryUserRepository::new();
    repo.create(alice()).await.unwrap();

    let err = repo
        .create(CreateUser {
            email: "ALICE@Example.COM".into(),
            name: "Impostor".into(),
            password_hash: "$argon2id$other".into(),
            age: None,
            education_level: None,
            city: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::AlreadyExists { .. }));
    // No second user was created.
    assert_eq!(repo.list().await.len(), 1);
}

#[tokio::test]
async fn email_lookup_ignores_case() {
    let repo = MemoryUserRepository::new();
    let user = repo.create(alice()).await.unwrap();

    let found = repo.get_by_email("Alice@EXAMPLE.com").await.unwrap();
    assert_eq!(found.id, user.id);

    assert!(repo.get_by_email("nobody@example.com").await.is_none());
}

#[tokio::test]
async fn update_role_replaces_role() {
    let repo = MemoryUserRepository::new();
    let user = repo.create(alice()).await.unwrap();

    let updated = repo.update_role(user.id, Role::Mentor).await.unwrap();
    assert_eq!(updated.role, Role::Mentor);

    // Unknown id yields absence, not an error.
    assert!(
        repo.update_role(uuid::Uuid::new_v4(), Role::Admin)
            .await
            .is_none()
    );
}

#[tokio::test]
async fn points_award_and_admin_override() {
    let repo = MemoryUserRepository::new();
    let user = repo.create(alice()).await.unwrap();

    let after = repo.award_points(user.id, 30).await.unwrap();
    assert_eq!(after.points, 30);
    let after = repo.award_points(user.id, 12).await.unwrap();
    assert_eq!(after.points, 42);

    // Only the explicit override may lower the total.
    let after = repo.set_points(user.id, 5).await.unwrap();
    assert_eq!(after.points, 5);
}

#[tokio::test]
async fn list_preserves_creation_order() {
    let repo = MemoryUserRepository::new();
    for i in 0..3 {
        repo.create(CreateUser {
            email: format!("user{i}@example.com"),
            name: format!("User {i}"),
            password_hash: String::new(),
            age: None,
            education_level: None,
            city: None,
        })
        .await
        .unwrap();
    }

    let emails: Vec<_> = repo.list().await.into_iter().map(|u| u.email).collect();
    assert_eq!(
        emails,
        [
            "user0@example.com",
            "user1@example.com",
            "user2@example.com"
        ]
    );
}

#[tokio::test]
async fn concurrent_signups_with_same_email_create_one_user() {
    let repo = MemoryUserRepository::new();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move { repo.create(alice()).await }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.list().await.len(), 1);
}
