//! Host Routes
//!
//! - GET /host-ip - Address dashboards use to reach this server

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::model::HostIp;

/// GET /host-ip
pub async fn host_ip(State(state): State<Arc<AppState>>) -> Json<HostIp> {
    Json(HostIp {
        ip: state.config.advertised_ip.clone(),
    })
}
