//! agent-catalog - HTTP server entry point

use agent_catalog_server::{serve, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "agent_catalog_server=info,agent_catalog_core=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    info!(
        port = config.port,
        agents_file = %config.agents_file.display(),
        api_keys_file = %config.api_keys_file.display(),
        "Starting agent catalog server"
    );

    serve(config).await
}
