//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Address reported by `GET /host-ip`
    #[serde(default = "default_advertised_ip")]
    pub advertised_ip: String,

    /// Directory holding the built dashboard, served for unmatched paths
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_advertised_ip() -> String {
    "127.0.0.1".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            advertised_ip: default_advertised_ip(),
            static_dir: None,
        }
    }
}

/// Suricata file sources
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_eve_log_path")]
    pub eve_log_path: String,

    #[serde(default = "default_rules_path")]
    pub rules_path: String,

    /// Number of entries in `top_anomalous_ips`
    #[serde(default = "default_top_sources")]
    pub top_sources: usize,
}

fn default_eve_log_path() -> String {
    "/var/log/suricata/eve.json".to_string()
}

fn default_rules_path() -> String {
    "/var/lib/suricata/rules/sml.rules".to_string()
}

fn default_top_sources() -> usize {
    5
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            eve_log_path: default_eve_log_path(),
            rules_path: default_rules_path(),
            top_sources: default_top_sources(),
        }
    }
}

/// How dashboard clients reach the API
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Explicit backend origin, e.g. "http://10.0.0.5:8000"
    #[serde(default)]
    pub backend_url: Option<String>,

    /// One of "configured", "discovery", "fixed"
    #[serde(default)]
    pub strategy: Option<String>,

    /// Origin queried for `/host-ip` by the discovery strategy
    #[serde(default = "default_discovery_url")]
    pub discovery_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_discovery_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            strategy: None,
            discovery_url: default_discovery_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "suricata_dash={level},tower_http={level}",
                level = self.level
            ))
        });

        let registry = tracing_subscriber::registry().with(filter);
        let result = if self.format.eq_ignore_ascii_case("json") {
            registry.with(tracing_subscriber::fmt::layer().json()).try_init()
        } else {
            registry.with(tracing_subscriber::fmt::layer()).try_init()
        };

        if let Err(e) = result {
            eprintln!("Logging already initialized: {}", e);
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("suricata-dash").join("config.toml")),
            Some(PathBuf::from("/etc/suricata-dash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("SURICATA_DASH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("SURICATA_DASH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(ip) = var("SURICATA_DASH_ADVERTISED_IP") {
            self.server.advertised_ip = ip;
        }
        if let Some(dir) = var("SURICATA_DASH_STATIC_DIR") {
            self.server.static_dir = Some(dir);
        }

        // Source overrides
        if let Some(path) = var("SURICATA_DASH_EVE_LOG") {
            self.sources.eve_log_path = path;
        }
        if let Some(path) = var("SURICATA_DASH_RULES") {
            self.sources.rules_path = path;
        }

        // Dashboard overrides
        if let Some(url) = var("SURICATA_DASH_BACKEND_URL") {
            self.dashboard.backend_url = Some(url);
        }
        if let Some(strategy) = var("SURICATA_DASH_STRATEGY") {
            self.dashboard.strategy = Some(strategy);
        }

        // Logging overrides
        if let Some(level) = var("SURICATA_DASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SURICATA_DASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SuricataML Dashboard Configuration
#
# Environment variables override these settings:
# - SURICATA_DASH_HOST / SURICATA_DASH_PORT
# - SURICATA_DASH_ADVERTISED_IP
# - SURICATA_DASH_STATIC_DIR
# - SURICATA_DASH_EVE_LOG / SURICATA_DASH_RULES
# - SURICATA_DASH_BACKEND_URL / SURICATA_DASH_STRATEGY
# - SURICATA_DASH_LOG_LEVEL / SURICATA_DASH_LOG_FORMAT

[server]
# API server host
host = "0.0.0.0"

# API server port
port = 8000

# Address returned by GET /host-ip
advertised_ip = "127.0.0.1"

# Serve the built dashboard from this directory (optional)
# static_dir = "./dashboard-ui/dist"

[sources]
# Suricata EVE log (one JSON event per line)
eve_log_path = "/var/log/suricata/eve.json"

# Rules file, one rule per line, '#' starts a comment
rules_path = "/var/lib/suricata/rules/sml.rules"

# Number of sources listed in top_anomalous_ips
top_sources = 5

[dashboard]
# Backend origin used by the CLI (optional)
# backend_url = "http://localhost:8000"

# Endpoint strategy: configured, discovery or fixed (optional)
# strategy = "configured"

# Origin queried for /host-ip by the discovery strategy
discovery_url = "http://localhost:8000"

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.advertised_ip, "127.0.0.1");
        assert_eq!(config.sources.eve_log_path, "/var/log/suricata/eve.json");
        assert_eq!(config.sources.top_sources, 5);
        assert!(config.dashboard.backend_url.is_none());
        assert_eq!(config.dashboard.discovery_url, "http://localhost:8000");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.sources.rules_path, "/var/lib/suricata/rules/sml.rules");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.server.static_dir.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::parse(
            r#"
            [dashboard]
            backend_url = "http://10.0.0.5:8000"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.dashboard.backend_url.as_deref(),
            Some("http://10.0.0.5:8000")
        );
        assert_eq!(config.dashboard.request_timeout_secs, 30);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::parse("[server]\nport = \"not a number\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sources]\ntop_sources = 3\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.sources.top_sources, 3);

        let missing = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SURICATA_DASH_PORT", "9000"),
            ("SURICATA_DASH_EVE_LOG", "/tmp/eve.json"),
            ("SURICATA_DASH_STRATEGY", "discovery"),
            ("SURICATA_DASH_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.sources.eve_log_path, "/tmp/eve.json");
        assert_eq!(config.dashboard.strategy.as_deref(), Some("discovery"));
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "SURICATA_DASH_PORT").then(|| "abc".to_string()));
        assert_eq!(config.server.port, 8000);
    }
}
