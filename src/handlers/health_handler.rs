use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::config::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let stats = state.jobs.stats().await;

    Json(json!({
        "status": "ok",
        "app": state.config.app_name,
        "version": state.config.app_version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "worker": state.jobs.worker_state(),
        "pending": stats.pending,
        "processed": stats.processed,
        "tick_interval_secs": state.config.tick_interval_secs,
    }))
}
