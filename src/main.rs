//! Process bootstrap for the currency-exchange gateway.

use std::sync::Arc;

use cambio_gateway::backend::{
    HttpLedgerService, HttpLedgerServiceConfig, HttpUserService, HttpUserServiceConfig,
};
use cambio_gateway::config::{load_config, print_config};
use cambio_gateway::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // Debug mode lowers the default filter; RUST_LOG still wins.
    let default_level = if config.debug { "debug" } else { config.log.level.as_str() };
    let log_filter = format!(
        "{},cambio_gateway={},tower_http=debug",
        default_level, default_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("API Principal do Sistema de Câmbio");
    print_config(&config);

    let users = Arc::new(HttpUserService::new(HttpUserServiceConfig::new(
        &config.backends.users_url,
    )));
    let ledger = Arc::new(HttpLedgerService::new(HttpLedgerServiceConfig::new(
        &config.backends.ledger_url,
    )));

    let state = AppState::new(users, ledger);
    let server = HttpServer::new(
        ServerConfig::new(&config.server.host, config.server.port),
        state,
    );

    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
