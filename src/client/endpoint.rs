//! Backend Endpoint Resolution
//!
//! Every view reaches the API through one [`Endpoint`], produced once at
//! startup by the selected [`EndpointProvider`]:
//!
//! - [`ConfiguredEndpoint`]: the origin from configuration, used as-is
//! - [`DiscoveryEndpoint`]: asks `/host-ip` on a discovery origin
//! - [`FixedEndpoint`]: the in-cluster service name

use async_trait::async_trait;
use serde::de::Error as _;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use super::fetch::FetchError;
use crate::config::DashboardConfig;
use crate::model::HostIp;

/// Port the API listens on, on every host
pub const BACKEND_PORT: u16 = 8000;

/// Origin used by the fixed strategy
pub const FIXED_ORIGIN: &str = "http://fastapi:8000";

/// Origin returned when discovery fails for any reason
pub const DISCOVERY_FALLBACK: &str = "http://localhost:8000";

/// Base URL origin (scheme, host, port) prefixed to every request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Wrap an origin. Only trailing slashes are removed; the shape is
    /// not validated, so a bad value surfaces as a failed request.
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self(origin.trim_end_matches('/').to_string())
    }

    /// Endpoint of the API running on `ip`
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

/// Resolution strategy names, as written in config and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointStrategy {
    Configured,
    Discovery,
    Fixed,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown endpoint strategy '{0}' (expected configured, discovery or fixed)")]
pub struct UnknownStrategy(pub String);

impl FromStr for EndpointStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "configured" => Ok(Self::Configured),
            "discovery" => Ok(Self::Discovery),
            "fixed" => Ok(Self::Fixed),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for EndpointStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configured => "configured",
            Self::Discovery => "discovery",
            Self::Fixed => "fixed",
        };
        f.write_str(name)
    }
}

/// Capability every view depends on to learn where the API lives.
///
/// Resolution never fails: strategies that can fail substitute a fallback.
#[async_trait]
pub trait EndpointProvider: Send + Sync {
    /// Strategy implemented by this provider
    fn strategy(&self) -> EndpointStrategy;

    /// Resolve the endpoint
    async fn resolve(&self) -> Endpoint;
}

/// Endpoint taken from configuration
#[derive(Debug, Clone)]
pub struct ConfiguredEndpoint {
    origin: Option<String>,
}

impl ConfiguredEndpoint {
    pub fn new(origin: Option<String>) -> Self {
        Self { origin }
    }
}

#[async_trait]
impl EndpointProvider for ConfiguredEndpoint {
    fn strategy(&self) -> EndpointStrategy {
        EndpointStrategy::Configured
    }

    async fn resolve(&self) -> Endpoint {
        match &self.origin {
            Some(origin) => Endpoint::new(origin.clone()),
            None => {
                tracing::warn!("No backend URL configured, requests will not reach the API");
                Endpoint::new(String::new())
            }
        }
    }
}

/// The in-cluster service origin
#[derive(Debug, Clone, Default)]
pub struct FixedEndpoint;

#[async_trait]
impl EndpointProvider for FixedEndpoint {
    fn strategy(&self) -> EndpointStrategy {
        EndpointStrategy::Fixed
    }

    async fn resolve(&self) -> Endpoint {
        Endpoint::new(FIXED_ORIGIN)
    }
}

/// Endpoint discovered through `GET {discovery}/host-ip`
pub struct DiscoveryEndpoint {
    client: reqwest::Client,
    discovery: Endpoint,
}

impl DiscoveryEndpoint {
    pub fn new(client: reqwest::Client, discovery: Endpoint) -> Self {
        Self { client, discovery }
    }

    /// Ask the discovery origin for the host address
    pub async fn lookup(&self) -> Result<String, FetchError> {
        let url = self.discovery.url("host-ip");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }

        let bytes = response.bytes().await?;
        let host: HostIp = serde_json::from_slice(&bytes)?;
        if host.ip.trim().is_empty() {
            return Err(FetchError::Decode(serde_json::Error::custom("empty ip")));
        }
        Ok(host.ip)
    }
}

#[async_trait]
impl EndpointProvider for DiscoveryEndpoint {
    fn strategy(&self) -> EndpointStrategy {
        EndpointStrategy::Discovery
    }

    async fn resolve(&self) -> Endpoint {
        match self.lookup().await {
            Ok(ip) => {
                let endpoint = Endpoint::from_host_ip(&ip);
                tracing::info!(endpoint = %endpoint, "Discovered backend endpoint");
                endpoint
            }
            Err(e) => {
                tracing::warn!(
                    discovery = %self.discovery,
                    error = %e,
                    "Backend discovery failed, using {}",
                    DISCOVERY_FALLBACK
                );
                Endpoint::new(DISCOVERY_FALLBACK)
            }
        }
    }
}

/// Pick the provider named by `strategy`, or by the config when `None`.
///
/// Without an explicit strategy a configured backend URL wins, otherwise
/// the fixed origin is used. Discovery is only used when asked for.
pub fn select_provider(
    config: &DashboardConfig,
    strategy: Option<EndpointStrategy>,
) -> Result<Box<dyn EndpointProvider>, UnknownStrategy> {
    let strategy = match strategy {
        Some(strategy) => strategy,
        None => match config.strategy.as_deref() {
            Some(name) => name.parse()?,
            None if config.backend_url.is_some() => EndpointStrategy::Configured,
            None => EndpointStrategy::Fixed,
        },
    };

    tracing::debug!(strategy = %strategy, "Selected endpoint strategy");

    let provider: Box<dyn EndpointProvider> = match strategy {
        EndpointStrategy::Configured => Box::new(ConfiguredEndpoint::new(config.backend_url.clone())),
        EndpointStrategy::Fixed => Box::new(FixedEndpoint),
        EndpointStrategy::Discovery => {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Failed to build discovery client, using defaults without timeout");
                    reqwest::Client::new()
                });
            Box::new(DiscoveryEndpoint::new(
                client,
                Endpoint::new(config.discovery_url.clone()),
            ))
        }
    };

    Ok(provider)
}
