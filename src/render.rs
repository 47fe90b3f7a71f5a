//! Terminal Views
//!
//! Plain-text renderings of the statistics, logs and rules views, with the
//! same labels the browser dashboard shows.

use crate::client::FetchResult;
use crate::model::{AnomalousSource, LogRecord, Statistics};

/// Shown until statistics arrive, and forever if the fetch failed
pub const STATS_LOADING: &str = "🔄 Cargando estadísticas...";

pub const STATS_TITLE: &str = "📊 Estadísticas del Sistema";
pub const TOP_SOURCES_TITLE: &str = "Top IPs con anomalías";
pub const LOGS_TITLE: &str = "📄 Logs de Suricata";
pub const RULES_TITLE: &str = "📜 Reglas Suricata";

/// Percentage with exactly two decimals, e.g. `4.20%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// One ranking line, e.g. `1.2.3.4 (10 eventos)`
pub fn source_line(source: &AnomalousSource) -> String {
    format!("{} ({} eventos)", source.id, source.count)
}

/// Log record as 2-space indented JSON
pub fn pretty_record(record: &LogRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string())
}

/// Statistics view. A failed fetch keeps the loading text.
pub fn render_statistics(result: &FetchResult<Statistics>) -> String {
    let stats = match result {
        Ok(stats) => stats,
        Err(_) => return STATS_LOADING.to_string(),
    };

    let mut lines = vec![
        STATS_TITLE.to_string(),
        format!("Total de eventos: {}", stats.total_events),
        format!("Anomalías detectadas: {}", stats.anomalies_detected),
        format!(
            "Porcentaje de anomalías: {}",
            format_percentage(stats.anomaly_percentage)
        ),
        String::new(),
        TOP_SOURCES_TITLE.to_string(),
    ];
    lines.extend(
        stats
            .top_anomalous_ips
            .iter()
            .map(|source| format!("  • {}", source_line(source))),
    );

    lines.join("\n")
}

/// Logs view: one pretty-printed block per record, blank line between
pub fn render_logs(records: &[LogRecord]) -> String {
    let mut out = String::from(LOGS_TITLE);
    for record in records {
        out.push_str("\n\n");
        out.push_str(&pretty_record(record));
    }
    out
}

/// Rules view: one bullet per rule
pub fn render_rules(rules: &[String]) -> String {
    let mut out = String::from(RULES_TITLE);
    for rule in rules {
        out.push_str("\n  • ");
        out.push_str(rule);
    }
    out
}
