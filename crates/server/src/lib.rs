//! agent-catalog-server
//!
//! REST API over the agent catalog, with API-key gated routes and an
//! admin-only key issuance endpoint.

pub mod api;
pub mod auth;
pub mod config;
pub mod handlers;
pub mod routes;

pub use api::{ApiResponse, Envelope, ServerState};
pub use config::{ConfigError, ServerConfig};
pub use routes::create_router;

pub use agent_catalog_core;

use agent_catalog_core::{AgentStore, ApiKeyStore};
use tracing::{info, warn};

/// Load the catalog and key store described by `config`.
///
/// A missing or corrupt catalog yields an empty store; a corrupt key
/// document is an error.
pub async fn build_state(config: &ServerConfig) -> anyhow::Result<ServerState> {
    let mut agents = AgentStore::new(&config.agents_file);
    agents.load().await;

    let api_keys = ApiKeyStore::open(&config.api_keys_file).await?;

    if config.admin_key.is_none() {
        warn!("ADMIN_KEY not set; key issuance is disabled");
    }
    if !config.require_api_key {
        warn!("REQUIRE_API_KEY=false; catalog routes are served without a key");
    }

    Ok(ServerState::new(agents, api_keys, config))
}

/// Bind and serve until Ctrl-C or SIGTERM
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = build_state(&config).await?;
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_state_with_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::default()
            .with_agents_file(dir.path().join("missing.json"))
            .with_api_keys_file(dir.path().join("keys.json"));

        let state = build_state(&config).await.unwrap();
        assert!(state.agents.is_empty());
        assert!(state.api_keys.is_empty().await);
    }

    #[tokio::test]
    async fn test_build_state_rejects_corrupt_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let keys = dir.path().join("keys.json");
        std::fs::write(&keys, "not json").unwrap();

        let config = ServerConfig::default()
            .with_agents_file(dir.path().join("missing.json"))
            .with_api_keys_file(&keys);

        assert!(build_state(&config).await.is_err());
    }
}
