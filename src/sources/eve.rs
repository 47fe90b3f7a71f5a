//! EVE Log Reader
//!
//! Suricata writes `eve.json` as newline-delimited JSON. A line may be
//! half-written while Suricata is appending, so unparseable lines are
//! skipped instead of failing the whole read.

use std::path::Path;

use super::error::{SourceError, SourceResult};
use crate::model::LogRecord;

/// Read every event of an EVE log, in file order
pub async fn read_events(path: &Path) -> SourceResult<Vec<LogRecord>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::from_io(path, e))?;

    let events = parse_events(&content);
    tracing::debug!(path = ?path, events = events.len(), "Read EVE log");
    Ok(events)
}

/// Parse newline-delimited JSON, skipping blank and malformed lines
pub fn parse_events(content: &str) -> Vec<LogRecord> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| match serde_json::from_str(line) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "Skipping malformed EVE line");
                None
            }
        })
        .collect()
}
