//! Dashboard Contract Types
//!
//! JSON shapes exchanged between the API and every dashboard client.
//! The server serializes them, the native client deserializes them.

use serde::{Deserialize, Serialize};

/// Aggregate statistics rendered by the statistics view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of events in the EVE log
    pub total_events: u64,
    /// Number of events classified as anomalies
    pub anomalies_detected: u64,
    /// `anomalies_detected / total_events * 100`, not validated by clients
    pub anomaly_percentage: f64,
    /// Sources with the most anomalies, most frequent first
    pub top_anomalous_ips: Vec<AnomalousSource>,
}

/// One entry of the top anomalous sources ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalousSource {
    #[serde(rename = "_id")]
    pub id: String,
    pub count: u64,
}

impl AnomalousSource {
    pub fn new(id: impl Into<String>, count: u64) -> Self {
        Self {
            id: id.into(),
            count,
        }
    }
}

/// A raw log record; its shape is owned by Suricata, not by the dashboard
pub type LogRecord = serde_json::Value;

/// Body of `GET /rules`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleList {
    #[serde(default)]
    pub rules: Vec<String>,
}

/// Body of `GET /host-ip`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostIp {
    pub ip: String,
}
