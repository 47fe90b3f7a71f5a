//! Health Routes
//!
//! - GET / - Liveness message
//! - GET /health - Source availability and uptime

use axum::{extract::State, Json};
use std::path::Path;
use std::sync::Arc;

use crate::api::dto::{HealthResponse, RootResponse};
use crate::api::state::AppState;

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "API funcionando correctamente 🚀".to_string(),
    })
}

/// GET /health
///
/// The server is always up; a missing EVE log degrades it because the
/// statistics and logs views cannot load.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let log_ok = source_exists(&state.config.eve_log_path).await;
    let rules_ok = source_exists(&state.config.rules_path).await;

    let status = match (log_ok, rules_ok) {
        (true, true) => "healthy",
        (true, false) | (false, true) => "degraded",
        (false, false) => "unhealthy",
    };

    Json(HealthResponse {
        status: status.to_string(),
        log_source: availability(log_ok),
        rules_source: availability(rules_ok),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn source_exists(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}

fn availability(ok: bool) -> String {
    if ok { "ok" } else { "missing" }.to_string()
}
