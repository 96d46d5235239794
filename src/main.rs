use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;

use code_translator::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("code_translator=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        environment = %config.environment,
        "Starting code translation server"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, server::router(config)).await?;
    Ok(())
}
