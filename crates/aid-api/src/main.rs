//! API server entry point
//!
//! ```bash
//! cargo run -p aid-api
//! ```
//!
//! Configuration comes from the environment, with an optional `.env` file.

use aid_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting API server"
    );

    if let Err(e) = aid_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
