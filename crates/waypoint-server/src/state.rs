//! Application state — the explicitly constructed object graph.
//!
//! Everything is built once at process start and shared by reference;
//! there is no ambient singleton to import.

use std::sync::Arc;

use waypoint_auth::config::AuthConfig;
use waypoint_auth::guard::AuthorizationGuard;
use waypoint_auth::service::AuthService;
use waypoint_store::{MemoryStore, MemoryUserRepository};

use crate::clients::{AssessmentAnalyzer, ChatCounselor};

pub struct AppState {
    pub store: MemoryStore,
    pub auth: AuthService<MemoryUserRepository>,
    pub guard: AuthorizationGuard<MemoryUserRepository>,
    pub analyzer: Arc<dyn AssessmentAnalyzer>,
    pub counselor: Arc<dyn ChatCounselor>,
}

impl AppState {
    pub fn new(
        store: MemoryStore,
        config: AuthConfig,
        analyzer: Arc<dyn AssessmentAnalyzer>,
        counselor: Arc<dyn ChatCounselor>,
    ) -> Self {
        let auth = AuthService::new(store.users().clone(), config.clone());
        let guard = AuthorizationGuard::new(store.users().clone(), config);
        Self {
            store,
            auth,
            guard,
            analyzer,
            counselor,
        }
    }
}
