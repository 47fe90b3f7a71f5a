//! SuricataML Dashboard API Server
//!
//! Run with: cargo run --bin suricata-dash
//!
//! # Configuration
//!
//! Read from `config.toml` (see `suricata-dash-cli config`), overridden by
//! environment variables:
//! - `SURICATA_DASH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SURICATA_DASH_PORT`: Port to listen on (default: 8000)
//! - `SURICATA_DASH_ADVERTISED_IP`: Address returned by /host-ip
//! - `SURICATA_DASH_EVE_LOG`: Suricata EVE log path
//! - `SURICATA_DASH_RULES`: Rules file path
//! - `SURICATA_DASH_STATIC_DIR`: Built dashboard to serve (optional)
//! - `RUST_LOG`: Log filter (default: from config, info)

use suricata_dash::api::{serve, ApiConfig, AppState};
use suricata_dash::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    config.logging.init();

    tracing::info!("Starting SuricataML Dashboard API v{}", env!("CARGO_PKG_VERSION"));

    let api_config = ApiConfig::from(&config);

    tracing::info!("EVE log: {:?}", api_config.eve_log_path);
    tracing::info!("Rules file: {:?}", api_config.rules_path);
    if !api_config.eve_log_path.exists() {
        tracing::warn!("EVE log does not exist yet; /stats and /logs will return 404 until it does");
    }

    let state = AppState::new(api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("SuricataML Dashboard API stopped");
    Ok(())
}
