use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::engine::{AmountInput, ProgressSummary};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct WithdrawalRequest {
    pub amount: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalResponse {
    pub previous_level: u32,
    pub summary: ProgressSummary,
}

pub async fn post_withdrawal(
    State(state): State<AppState>,
    payload: Result<Json<WithdrawalRequest>, JsonRejection>,
) -> Result<Json<WithdrawalResponse>, AppError> {
    let Json(body) = payload?;
    let amount = AmountInput::from_json(body.amount.as_ref(), "amount")?.parse("amount")?;

    let (change, summary) = state.journal.apply_withdrawal(amount).await?;

    Ok(Json(WithdrawalResponse {
        previous_level: change.from,
        summary,
    }))
}
