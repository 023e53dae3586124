use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::domain::UserState;
use crate::engine::ProgressSummary;

pub async fn get_state(State(state): State<AppState>) -> Json<ProgressSummary> {
    Json(state.journal.summary().await)
}

/// The full snapshot, in the same layout that is persisted.
pub async fn get_snapshot(State(state): State<AppState>) -> Json<UserState> {
    Json(state.journal.snapshot().await)
}
