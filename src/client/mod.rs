//! Dashboard Client
//!
//! Native counterpart of the browser dashboard: resolves the API endpoint
//! with one [`EndpointProvider`] and fetches the data behind each view.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use suricata_dash::client::{select_provider, DashboardClient};
//! use suricata_dash::config::DashboardConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = select_provider(&DashboardConfig::default(), None)?;
//! let client = DashboardClient::new(provider.resolve().await, Duration::from_secs(30))?;
//! let stats = client.stats().await?;
//! println!("{} events", stats.total_events);
//! # Ok(())
//! # }
//! ```

pub mod endpoint;
pub mod fetch;

pub use endpoint::{
    select_provider, ConfiguredEndpoint, DiscoveryEndpoint, Endpoint, EndpointProvider,
    EndpointStrategy, FixedEndpoint, UnknownStrategy, BACKEND_PORT, DISCOVERY_FALLBACK,
    FIXED_ORIGIN,
};
pub use fetch::{DashboardClient, FetchError, FetchResult};

#[cfg(test)]
pub(crate) mod test_support {
    use super::Endpoint;

    /// Serve `router` on an ephemeral local port
    pub async fn spawn_server(router: axum::Router) -> Endpoint {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Endpoint::new(format!("http://{}", addr))
    }
}
