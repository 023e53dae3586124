use axum::extract::State;
use axum::Json;

use super::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Ready once the journal has been loaded; reports the current level.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let summary = state.journal.summary().await;
    Json(serde_json::json!({
        "status": "ready",
        "level": summary.level,
        "trades": summary.trade_count,
    }))
}
