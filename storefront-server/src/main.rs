use anyhow::Context;
use storefront_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging) and configuration
    let config = setup_environment();

    print_banner();
    tracing::info!(environment = %config.environment, "Storefront server starting...");

    // 2. Shared state (price table, order repository)
    let state = ServerState::initialize(&config).context("failed to initialize server state")?;

    // 3. HTTP server, runs until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
