//! Eventhub API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p eventhub-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use eventhub_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(Environment::from_env());
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Eventhub API Server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        tally_labels = %config.tally.labels,
        "Configuration loaded"
    );

    eventhub_api::run(config).await?;

    Ok(())
}
