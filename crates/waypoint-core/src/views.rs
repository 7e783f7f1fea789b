//! Derived read views — computed from store snapshots on every read,
//! never cached.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::opening::Opening;
use crate::models::post::CommunityPost;
use crate::models::user::User;

/// Known opening categories, surfaced to clients as a catalog. The set is
/// open-ended: filtering accepts any string, this table is advisory.
pub const OPENING_CATEGORIES: &[&str] = &[
    "engineering",
    "data",
    "design",
    "product",
    "marketing",
    "operations",
    "internship",
];

/// Known community post categories. Advisory, like [`OPENING_CATEGORIES`].
pub const POST_CATEGORIES: &[&str] = &[
    "general",
    "career-advice",
    "interview-prep",
    "success-stories",
    "resources",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: u32,
    pub user_id: Uuid,
    pub name: String,
    pub points: u32,
    pub city: Option<String>,
}

/// Rank users by points descending. Ties keep the earlier-created user
/// first; the input is the store's insertion-order snapshot, so a stable
/// sort is all that is needed for a deterministic result.
pub fn leaderboard(mut users: Vec<User>) -> Vec<LeaderboardEntry> {
    users.sort_by(|a, b| b.points.cmp(&a.points));
    users
        .into_iter()
        .enumerate()
        .map(|(i, user)| LeaderboardEntry {
            rank: i as u32 + 1,
            user_id: user.id,
            name: user.name,
            points: user.points,
            city: user.city,
        })
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningFilter {
    /// Exact category match, case-insensitive.
    pub category: Option<String>,
    /// Exact employment-kind match, case-insensitive.
    pub kind: Option<String>,
    /// Case-insensitive substring over title, company, and skills.
    pub search: Option<String>,
}

pub fn filter_openings(openings: Vec<Opening>, filter: &OpeningFilter) -> Vec<Opening> {
    openings
        .into_iter()
        .filter(|o| {
            matches_exact(filter.category.as_deref(), &o.category)
                && matches_exact(filter.kind.as_deref(), &o.kind)
                && matches_search(filter.search.as_deref(), || {
                    let mut fields = vec![o.title.as_str(), o.company.as_str()];
                    fields.extend(o.skills.iter().map(String::as_str));
                    fields
                })
        })
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostFilter {
    /// Exact category match, case-insensitive.
    pub category: Option<String>,
    /// Case-insensitive substring over title, content, and tags.
    pub search: Option<String>,
}

pub fn filter_posts(posts: Vec<CommunityPost>, filter: &PostFilter) -> Vec<CommunityPost> {
    posts
        .into_iter()
        .filter(|p| {
            matches_exact(filter.category.as_deref(), &p.category)
                && matches_search(filter.search.as_deref(), || {
                    let mut fields = vec![p.title.as_str(), p.content.as_str()];
                    fields.extend(p.tags.iter().map(String::as_str));
                    fields
                })
        })
        .collect()
}

fn matches_exact(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        Some(w) => actual.eq_ignore_ascii_case(w),
        None => true,
    }
}

fn matches_search<'a, F>(needle: Option<&str>, fields: F) -> bool
where
    F: FnOnce() -> Vec<&'a str>,
{
    match needle {
        Some(n) => {
            let n = n.to_lowercase();
            fields().iter().any(|f| f.to_lowercase().contains(&n))
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;
    use chrono::Utc;

    fn user(name: &str, points: u32) -> User {
        User {
            id: Uuid::new_v4(),
            email: format!("{name}@example.com"),
            name: name.into(),
            password_hash: String::new(),
            role: Role::Student,
            points,
            age: None,
            education_level: None,
            city: None,
            last_active: Utc::now(),
            created_at: Utc::now(),
        }
    }

    fn opening(title: &str, company: &str, category: &str, skills: &[&str]) -> Opening {
        Opening {
            id: Uuid::new_v4(),
            title: title.into(),
            company: company.into(),
            location: "Remote".into(),
            kind: "full-time".into(),
            salary: "Not Disclosed".into(),
            experience: "0-2 years".into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            apply_url: String::new(),
            category: category.into(),
            is_active: true,
            is_urgent: false,
            posted_by: Uuid::new_v4(),
            posted_at: Utc::now(),
            deadline: None,
            applicants: 0,
        }
    }

    #[test]
    fn leaderboard_sorts_by_points_descending() {
        let users = vec![user("low", 10), user("high", 90), user("mid", 40)];
        let board = leaderboard(users);

        let names: Vec<_> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["high", "mid", "low"]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn leaderboard_ties_keep_creation_order() {
        let first = user("first", 50);
        let second = user("second", 50);
        let board = leaderboard(vec![first.clone(), second]);

        assert_eq!(board[0].user_id, first.id);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].rank, 2);
    }

    #[test]
    fn leaderboard_is_stable_across_calls() {
        let users = vec![user("a", 30), user("b", 30), user("c", 70)];
        let once = leaderboard(users.clone());
        let twice = leaderboard(users);

        let ids_once: Vec<_> = once.iter().map(|e| e.user_id).collect();
        let ids_twice: Vec<_> = twice.iter().map(|e| e.user_id).collect();
        assert_eq!(ids_once, ids_twice);
    }

    #[test]
    fn search_matches_skills_case_insensitively() {
        let openings = vec![
            opening("Backend Engineer", "Acme", "engineering", &["Rust", "Tokio"]),
            opening("Designer", "Beta", "design", &["Figma"]),
        ];

        let filter = OpeningFilter {
            search: Some("rust".into()),
            ..Default::default()
        };
        let found = filter_openings(openings, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Backend Engineer");
    }

    #[test]
    fn category_and_search_compose() {
        let openings = vec![
            opening("Data Analyst", "Acme", "data", &["SQL"]),
            opening("Data Engineer", "Beta", "engineering", &["SQL"]),
        ];

        let filter = OpeningFilter {
            category: Some("DATA".into()),
            search: Some("sql".into()),
            ..Default::default()
        };
        let found = filter_openings(openings, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].company, "Acme");
    }
}
