//! HTTP API Client
//!
//! Functions for reading the dashboard API. Every call resolves to a
//! `Result` whose error names the failure class.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use super::endpoint::Endpoint;

/// Why a fetch failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected response: {0}")]
    Decode(String),
}

// ============ Response Types ============

/// Body of `GET /stats`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Statistics {
    pub total_events: u64,
    pub anomalies_detected: u64,
    pub anomaly_percentage: f64,
    pub top_anomalous_ips: Vec<AnomalousSource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnomalousSource {
    #[serde(rename = "_id")]
    pub id: String,
    pub count: u64,
}

/// One Suricata EVE record, displayed as-is
pub type LogRecord = serde_json::Value;

#[derive(Debug, Deserialize)]
struct RuleList {
    #[serde(default)]
    rules: Vec<String>,
}

// ============ API Functions ============

/// GET `url` and decode the JSON body. Non-success statuses are failures
/// even when the body is valid JSON.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode(&body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// URL of `path` on `endpoint`. An unset endpoint would otherwise produce a
/// relative URL that the browser sends to the page's own origin.
fn request_url(endpoint: &Endpoint, path: &str) -> Result<String, FetchError> {
    if endpoint.as_str().trim().is_empty() {
        return Err(FetchError::Network("no backend URL configured".to_string()));
    }
    Ok(endpoint.url(path))
}

/// Fetch the anomaly summary
pub async fn fetch_stats(endpoint: &Endpoint) -> Result<Statistics, FetchError> {
    get_json(&request_url(endpoint, "stats")?).await
}

/// Fetch the raw EVE records
pub async fn fetch_logs(endpoint: &Endpoint) -> Result<Vec<LogRecord>, FetchError> {
    get_json(&request_url(endpoint, "logs")?).await
}

/// Fetch the rule list; a body without `rules` is an empty list
pub async fn fetch_rules(endpoint: &Endpoint) -> Result<Vec<String>, FetchError> {
    let list: RuleList = get_json(&request_url(endpoint, "rules")?).await?;
    Ok(list.rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_statistics() {
        let stats: Statistics = decode(
            r#"{"total_events":1000,"anomalies_detected":42,"anomaly_percentage":4.2,
                "top_anomalous_ips":[{"_id":"1.2.3.4","count":10}]}"#,
        )
        .unwrap();

        assert_eq!(stats.total_events, 1000);
        assert_eq!(stats.top_anomalous_ips[0].id, "1.2.3.4");
        assert_eq!(stats.top_anomalous_ips[0].count, 10);
    }

    #[test]
    fn test_decode_rules_default() {
        let list: RuleList = decode("{}").unwrap();
        assert!(list.rules.is_empty());

        let list: RuleList =
            decode(r#"{"rules":["alert tcp any any -> any any (msg:\"test\";)"]}"#).unwrap();
        assert_eq!(list.rules, vec![r#"alert tcp any any -> any any (msg:"test";)"#]);
    }

    #[test]
    fn test_decode_failure_is_classified() {
        let err = decode::<Statistics>(r#"{"total_events":"many"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = decode::<Vec<LogRecord>>("<html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_unset_endpoint_is_network_error() {
        let err = request_url(&Endpoint::new(String::new()), "stats").unwrap_err();
        assert_eq!(err, FetchError::Network("no backend URL configured".to_string()));

        assert_eq!(
            request_url(&Endpoint::new("http://api:8000"), "stats").unwrap(),
            "http://api:8000/stats"
        );
    }

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            url: "http://fastapi:8000/stats".to_string(),
            status: 502,
        };
        assert_eq!(err.to_string(), "http://fastapi:8000/stats answered with status 502");
    }
}
