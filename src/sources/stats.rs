//! Statistics Aggregation
//!
//! Outside training mode only `alert` events reach the anomaly pipeline,
//! so an alert is what the dashboard counts as an anomaly.

use std::collections::HashMap;

use crate::model::{AnomalousSource, LogRecord, Statistics};

/// Grouping key for alerts that carry no `src_ip`
pub const UNKNOWN_SOURCE: &str = "0.0.0.0";

/// Whether an EVE event counts as an anomaly
pub fn is_anomaly(event: &LogRecord) -> bool {
    event.get("event_type").and_then(|t| t.as_str()) == Some("alert")
}

/// Aggregate events into dashboard statistics.
///
/// `top` bounds the length of `top_anomalous_ips`. Ties in count are
/// ordered by source id so the ranking is stable between reads.
pub fn aggregate(events: &[LogRecord], top: usize) -> Statistics {
    let total_events = events.len() as u64;

    let mut per_source: HashMap<&str, u64> = HashMap::new();
    let mut anomalies_detected = 0u64;

    for event in events.iter().filter(|e| is_anomaly(e)) {
        anomalies_detected += 1;
        let source = event
            .get("src_ip")
            .and_then(|ip| ip.as_str())
            .unwrap_or(UNKNOWN_SOURCE);
        *per_source.entry(source).or_insert(0) += 1;
    }

    let anomaly_percentage = if total_events == 0 {
        0.0
    } else {
        anomalies_detected as f64 / total_events as f64 * 100.0
    };

    let mut ranking: Vec<AnomalousSource> = per_source
        .into_iter()
        .map(|(id, count)| AnomalousSource::new(id, count))
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
    ranking.truncate(top);

    Statistics {
        total_events,
        anomalies_detected,
        anomaly_percentage,
        top_anomalous_ips: ranking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alert(src: &str) -> LogRecord {
        json!({"event_type": "alert", "src_ip": src, "alert": {"signature": "test"}})
    }

    fn flow(src: &str) -> LogRecord {
        json!({"event_type": "flow", "src_ip": src})
    }

    #[test]
    fn test_empty_log() {
        let stats = aggregate(&[], 5);
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.anomalies_detected, 0);
        assert_eq!(stats.anomaly_percentage, 0.0);
        assert!(stats.top_anomalous_ips.is_empty());
    }

    #[test]
    fn test_counts_and_percentage() {
        let events = vec![
            alert("10.0.0.1"),
            flow("10.0.0.1"),
            flow("10.0.0.2"),
            flow("10.0.0.3"),
        ];
        let stats = aggregate(&events, 5);
        assert_eq!(stats.total_events, 4);
        assert_eq!(stats.anomalies_detected, 1);
        assert!((stats.anomaly_percentage - 25.0).abs() < f64::EPSILON);
        assert!(stats.anomalies_detected <= stats.total_events);
    }

    #[test]
    fn test_ranking_order_and_truncation() {
        let events = vec![
            alert("10.0.0.3"),
            alert("10.0.0.1"),
            alert("10.0.0.1"),
            alert("10.0.0.2"),
            alert("10.0.0.2"),
            alert("10.0.0.1"),
        ];
        let stats = aggregate(&events, 2);
        assert_eq!(
            stats.top_anomalous_ips,
            vec![
                AnomalousSource::new("10.0.0.1", 3),
                AnomalousSource::new("10.0.0.2", 2),
            ]
        );
    }

    #[test]
    fn test_ties_ordered_by_id() {
        let events = vec![alert("10.0.0.9"), alert("10.0.0.4")];
        let stats = aggregate(&events, 5);
        assert_eq!(stats.top_anomalous_ips[0].id, "10.0.0.4");
        assert_eq!(stats.top_anomalous_ips[1].id, "10.0.0.9");
    }

    #[test]
    fn test_alert_without_source() {
        let events = vec![json!({"event_type": "alert"})];
        let stats = aggregate(&events, 5);
        assert_eq!(stats.top_anomalous_ips, vec![AnomalousSource::new(UNKNOWN_SOURCE, 1)]);
    }
}
