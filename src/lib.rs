//! # SuricataML Dashboard
//!
//! Backend and terminal client for the SuricataML dashboard, which shows
//! security statistics, Suricata log entries and generated rules.
//!
//! ## Modules
//!
//! - [`sources`]: Reading the EVE log and rules file, statistics aggregation
//! - [`api`]: REST API the dashboard views read, with Axum
//! - [`client`]: Endpoint resolution and typed fetches for native clients
//! - [`render`]: Terminal renderings of the three views
//! - [`model`]: JSON contract shared by the API and its clients
//! - [`config`]: TOML configuration with environment overrides
//!
//! The browser dashboard lives in the `dashboard-ui` crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use suricata_dash::{build_router, AppState, Config, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api_config = ApiConfig::from(&config);
//!
//!     let router = build_router(AppState::new(api_config.clone()));
//!     let listener = tokio::net::TcpListener::bind(api_config.addr()).await?;
//!     axum::serve(listener, router).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod model;
pub mod render;
pub mod sources;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use client::{
    select_provider, DashboardClient, Endpoint, EndpointProvider, EndpointStrategy, FetchError,
    FetchResult,
};

pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig, ServerConfig, SourcesConfig};

pub use model::{AnomalousSource, HostIp, LogRecord, RuleList, Statistics};

pub use sources::{SourceError, SourceResult};
