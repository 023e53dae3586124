use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::domain::MIN_LEVEL;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdResponse {
    pub level: u32,
    pub experience_to_next_level: i64,
}

pub async fn get_threshold(
    Path(level): Path<u32>,
    State(state): State<AppState>,
) -> Result<Json<ThresholdResponse>, AppError> {
    if level < MIN_LEVEL {
        return Err(AppError::BadRequest(format!(
            "level must be >= {}",
            MIN_LEVEL
        )));
    }

    Ok(Json(ThresholdResponse {
        level,
        experience_to_next_level: state.journal.experience_threshold(level).await,
    }))
}
