//! Dashboard Routes
//!
//! The three endpoints the dashboard views read.
//!
//! - GET /stats - Aggregate statistics over the EVE log
//! - GET /logs - Raw EVE records
//! - GET /rules - Active rules

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::LogsQuery;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::model::{LogRecord, RuleList, Statistics};
use crate::sources::{self, SourceError};

/// GET /stats
pub async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<Statistics>> {
    let events = sources::read_events(&state.config.eve_log_path).await?;
    let stats = sources::aggregate(&events, state.config.top_sources);

    tracing::debug!(
        total = stats.total_events,
        anomalies = stats.anomalies_detected,
        "Computed statistics"
    );

    Ok(Json(stats))
}

/// GET /logs
///
/// Every EVE record in file order, or the last `limit` records.
pub async fn get_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogsQuery>,
) -> ApiResult<Json<Vec<LogRecord>>> {
    let mut events = sources::read_events(&state.config.eve_log_path).await?;

    if let Some(limit) = query.limit {
        let skip = events.len().saturating_sub(limit);
        events.drain(..skip);
    }

    Ok(Json(events))
}

/// GET /rules
///
/// A missing rules file means no rules have been generated yet.
pub async fn get_rules(State(state): State<Arc<AppState>>) -> ApiResult<Json<RuleList>> {
    let rules = match sources::read_rules(&state.config.rules_path).await {
        Ok(rules) => rules,
        Err(SourceError::NotFound(path)) => {
            tracing::debug!(path = ?path, "Rules file not found, returning no rules");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(RuleList { rules }))
}
