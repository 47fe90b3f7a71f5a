//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Address reported by `/host-ip`
    pub advertised_ip: String,
    /// Suricata EVE log
    pub eve_log_path: PathBuf,
    /// Generated rules file
    pub rules_path: PathBuf,
    /// Length of the anomalous sources ranking
    pub top_sources: usize,
    /// Built dashboard to serve for unmatched paths
    pub static_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ApiConfig {
    fn from(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            advertised_ip: config.server.advertised_ip.clone(),
            eve_log_path: PathBuf::from(&config.sources.eve_log_path),
            rules_path: PathBuf::from(&config.sources.rules_path),
            top_sources: config.sources.top_sources,
            static_dir: config.server.static_dir.as_ref().map(PathBuf::from),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Point the API at a specific pair of Suricata files
    pub fn with_sources(mut self, eve_log_path: impl Into<PathBuf>, rules_path: impl Into<PathBuf>) -> Self {
        self.eve_log_path = eve_log_path.into();
        self.rules_path = rules_path.into();
        self
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
