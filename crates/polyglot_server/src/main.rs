use std::sync::Arc;

use polyglot_engine::AnthropicCapability;
use polyglot_logging::{level_from_env, polyglot_info, LevelFilter, LogDestination};
use polyglot_server::{create_routes, ServerConfig, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the variables may come from the environment.
    dotenv::dotenv().ok();
    polyglot_logging::initialize(
        LogDestination::Terminal,
        level_from_env("POLYGLOT_LOG", LevelFilter::Info),
    );

    let config = ServerConfig::from_env()?;
    polyglot_info!("Capability settings: {:?}", config.capability);
    let capability = AnthropicCapability::new(config.capability.clone())?;
    let app = create_routes(Arc::new(ServerState::new(Arc::new(capability))));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    polyglot_info!("Server running on http://{}", addr);
    polyglot_info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    polyglot_info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        polyglot_logging::polyglot_warn!("Could not listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}
