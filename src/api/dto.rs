//! Data Transfer Objects
//!
//! Response types owned by the API itself. The dashboard contract
//! (statistics, rules, host ip) lives in [`crate::model`].

use serde::{Deserialize, Serialize};

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Query parameters of `GET /logs`
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    /// Return only the last `limit` records
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy", "degraded", "unhealthy"
    pub status: String,
    /// EVE log availability: "ok" or "missing"
    pub log_source: String,
    /// Rules file availability: "ok" or "missing"
    pub rules_source: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
