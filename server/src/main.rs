use anyhow::{Context, Result};
use clap::Parser;
use origin_server::{cli::Cli, config::ServerConfig, http};
use tracing::{Level, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .init();

    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let config = ServerConfig::from(Cli::parse());
    info!("Starting origin server with build path {}", config.build_path);

    // Everything that can fail on configuration happens before binding
    let mode = config
        .serve_mode()
        .with_context(|| format!("Invalid build path '{}'", config.build_path))?;
    let responder = http::Responder::from_mode(mode).context("Failed to set up storage")?;

    http::start_server(responder, &config.bind_address()).await?;

    Ok(())
}
