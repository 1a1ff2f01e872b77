//! VUTTR API Entry Point
//!
//! Loads configuration, initializes logging, opens the tool store and
//! serves the REST API over HTTP.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use vuttr_api::core::{ApiServer, Config, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = HttpTransport::new(config.http.clone());
    let server = ApiServer::from_config(config).await?;
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` wins when set; otherwise `level` (e.g. "debug" or
/// "vuttr_api=trace,tower_http=debug") is used, falling back to "info".
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
