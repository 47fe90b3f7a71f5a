//! Dashboard REST API
//!
//! HTTP API the dashboard views read from, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /stats` - Aggregate statistics over the EVE log
//! - `GET /logs` - Raw EVE records (`?limit=N` keeps the last N)
//! - `GET /rules` - Active rules
//!
//! ## Discovery
//! - `GET /host-ip` - Address dashboards should use for this server
//!
//! ## Health
//! - `GET /` - Liveness message
//! - `GET /health` - Source availability and uptime
//!
//! When a static directory is configured, any other path is served from it,
//! falling back to its `index.html` so client-side routes survive a reload.
//!
//! # Example
//!
//! ```rust,ignore
//! use suricata_dash::api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     serve(AppState::new(config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        // Dashboard routes
        .route("/stats", get(routes::dashboard::get_stats))
        .route("/logs", get(routes::dashboard::get_logs))
        .route("/rules", get(routes::dashboard::get_rules))
        // Discovery
        .route("/host-ip", get(routes::host::host_ip))
        // Health
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::full_health))
        .with_state(shared_state);

    if let Some(dir) = static_dir {
        tracing::info!("Serving dashboard from {:?}", dir);
        let index = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(TraceLayer::new_for_http())
        // The dashboard is served from a different origin than the API
        .layer(CorsLayer::permissive())
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::path::Path;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const EVE: &str = r#"{"event_type":"alert","src_ip":"10.0.0.7","alert":{"signature":"ET SCAN"}}
{"event_type":"flow","src_ip":"10.0.0.2"}
{"event_type":"alert","src_ip":"10.0.0.7","alert":{"signature":"ET SCAN"}}
{"event_type":"alert","src_ip":"10.0.0.3","alert":{"signature":"ET POLICY"}}
"#;

    fn create_test_app(dir: &Path) -> Router {
        let config = ApiConfig::new("127.0.0.1", 0)
            .with_sources(dir.join("eve.json"), dir.join("sml.rules"));
        build_router(AppState::new(config))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(create_test_app(dir.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "API funcionando correctamente 🚀");
    }

    #[tokio::test]
    async fn test_stats() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("eve.json"), EVE).unwrap();

        let (status, body) = get_json(create_test_app(dir.path()), "/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_events"], 4);
        assert_eq!(body["anomalies_detected"], 3);
        assert_eq!(body["anomaly_percentage"], 75.0);
        assert_eq!(
            body["top_anomalous_ips"],
            json!([{"_id": "10.0.0.7", "count": 2}, {"_id": "10.0.0.3", "count": 1}])
        );
    }

    #[tokio::test]
    async fn test_stats_missing_log() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(create_test_app(dir.path()), "/stats").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_logs() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("eve.json"), EVE).unwrap();

        let (status, body) = get_json(create_test_app(dir.path()), "/logs").await;

        assert_eq!(status, StatusCode::OK);
        let logs = body.as_array().unwrap();
        assert_eq!(logs.len(), 4);
        assert_eq!(logs[1]["event_type"], "flow");
    }

    #[tokio::test]
    async fn test_logs_limit_keeps_latest() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("eve.json"), EVE).unwrap();

        let (_, body) = get_json(create_test_app(dir.path()), "/logs?limit=1").await;

        let logs = body.as_array().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0]["src_ip"], "10.0.0.3");
    }

    #[tokio::test]
    async fn test_rules() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("sml.rules"),
            "# manual\nalert tcp any any -> any any (msg:\"test\";)\n",
        )
        .unwrap();

        let (status, body) = get_json(create_test_app(dir.path()), "/rules").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"rules": ["alert tcp any any -> any any (msg:\"test\";)"]}));
    }

    #[tokio::test]
    async fn test_rules_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(create_test_app(dir.path()), "/rules").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"rules": []}));
    }

    #[tokio::test]
    async fn test_host_ip() {
        let dir = tempdir().unwrap();
        let (status, body) = get_json(create_test_app(dir.path()), "/host-ip").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ip": "127.0.0.1"}));
    }

    #[tokio::test]
    async fn test_health_degraded_without_rules() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("eve.json"), EVE).unwrap();

        let (status, body) = get_json(create_test_app(dir.path()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["log_source"], "ok");
        assert_eq!(body["rules_source"], "missing");
    }

    #[tokio::test]
    async fn test_unknown_path_without_static_dir() {
        let dir = tempdir().unwrap();
        let response = create_test_app(dir.path())
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_dir_fallback() {
        let dir = tempdir().unwrap();
        let dist = dir.path().join("dist");
        std::fs::create_dir(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html>dashboard</html>").unwrap();

        let mut config = ApiConfig::new("127.0.0.1", 0)
            .with_sources(dir.path().join("eve.json"), dir.path().join("sml.rules"));
        config.static_dir = Some(dist);
        let app = build_router(AppState::new(config));

        let response = app
            .oneshot(Request::builder().uri("/some/page").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>dashboard</html>");
    }
}
