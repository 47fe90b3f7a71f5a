//! Backend Endpoint
//!
//! The dashboard resolves one endpoint at startup and hands it to every
//! view. The strategy is chosen at build time:
//!
//! - `DASHBOARD_ENDPOINT_STRATEGY`: `configured`, `discovery` or `fixed`
//! - `DASHBOARD_BACKEND_URL`: origin for the configured strategy
//!
//! A URL saved in local storage overrides the build-time URL.

use serde::Deserialize;
use std::fmt;

use super::client::{get_json, FetchError};
use crate::console;

/// Origin of the API inside the compose network
pub const FIXED_ORIGIN: &str = "http://fastapi:8000";

/// Origin asked for `/host-ip` by the discovery strategy
pub const DISCOVERY_ORIGIN: &str = "http://localhost:8000";

/// Origin used when discovery fails for any reason
pub const DISCOVERY_FALLBACK: &str = "http://localhost:8000";

/// Port the API listens on
pub const BACKEND_PORT: u16 = 8000;

/// Local storage key for a user-provided backend URL
const STORAGE_KEY: &str = "suricata_dash_backend_url";

/// Base URL origin prefixed to every request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self(origin.trim_end_matches('/').to_string())
    }

    pub fn from_host_ip(ip: &str) -> Self {
        Self(format!("http://{}:{}", ip, BACKEND_PORT))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL of `path` on this endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `GET /host-ip`
#[derive(Debug, Deserialize)]
pub struct HostIp {
    pub ip: String,
}

/// How the backend endpoint is found
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndpointStrategy {
    /// Use the configured origin as-is; `None` leaves requests without a host
    Configured(Option<String>),
    /// Ask `{origin}/host-ip`
    Discovery(String),
    /// The in-cluster service origin
    Fixed,
}

impl EndpointStrategy {
    /// Strategy selected by the build environment and local storage
    pub fn from_environment() -> Self {
        let configured = get_stored_backend_url()
            .or_else(|| option_env!("DASHBOARD_BACKEND_URL").map(str::to_string));

        Self::select(option_env!("DASHBOARD_ENDPOINT_STRATEGY"), configured)
    }

    /// Pick a strategy by name. Without a name, a configured URL selects
    /// the configured strategy and anything else the fixed origin.
    pub fn select(name: Option<&str>, configured: Option<String>) -> Self {
        let name = name.map(|n| n.trim().to_ascii_lowercase());
        match name.as_deref() {
            Some("configured") => Self::Configured(configured),
            Some("discovery") => Self::Discovery(DISCOVERY_ORIGIN.to_string()),
            Some("fixed") => Self::Fixed,
            Some(other) => {
                console::warn(&format!("Unknown endpoint strategy '{}', using the default", other));
                Self::select(None, configured)
            }
            None if configured.is_some() => Self::Configured(configured),
            None => Self::Fixed,
        }
    }

    /// Resolve the endpoint. Never fails.
    pub async fn resolve(self) -> Endpoint {
        match self {
            Self::Configured(Some(origin)) => Endpoint::new(origin),
            Self::Configured(None) => {
                console::error("No backend URL configured");
                Endpoint::new(String::new())
            }
            Self::Fixed => Endpoint::new(FIXED_ORIGIN),
            Self::Discovery(origin) => {
                let lookup = get_json::<HostIp>(&Endpoint::new(origin).url("host-ip")).await;
                endpoint_from_discovery(lookup)
            }
        }
    }
}

/// Turn a discovery response into an endpoint, substituting the fallback
/// for any failure.
pub fn endpoint_from_discovery(lookup: Result<HostIp, FetchError>) -> Endpoint {
    match lookup {
        Ok(host) if !host.ip.trim().is_empty() => Endpoint::from_host_ip(&host.ip),
        Ok(_) => {
            console::warn("❌ Error obteniendo la IP del backend: empty ip");
            Endpoint::new(DISCOVERY_FALLBACK)
        }
        Err(e) => {
            console::warn(&format!("❌ Error obteniendo la IP del backend: {}", e));
            Endpoint::new(DISCOVERY_FALLBACK)
        }
    }
}

/// Backend URL saved in local storage, if any
pub fn get_stored_backend_url() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|url| !url.trim().is_empty())
}
