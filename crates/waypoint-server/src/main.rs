//! Waypoint Server — application entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use waypoint_auth::config::AuthConfig;
use waypoint_server::clients::{OfflineAnalyzer, OfflineCounselor};
use waypoint_server::state::AppState;
use waypoint_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("waypoint=info".parse()?))
        .json()
        .init();

    // Fails fast when the signing secret is not configured.
    let config = AuthConfig::from_env()?;

    let store = MemoryStore::new();
    let state = AppState::new(
        store,
        config,
        Arc::new(OfflineAnalyzer),
        Arc::new(OfflineCounselor),
    );

    let addr = std::env::var("WAYPOINT_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Waypoint server listening");

    axum::serve(listener, waypoint_server::app(Arc::new(state))).await?;

    Ok(())
}
