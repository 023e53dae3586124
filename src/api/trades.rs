use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::{Decimal, TradeOutcome, TradeRecord};
use crate::engine::{AmountInput, ProgressSummary};
use crate::error::AppError;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct TradeRequest {
    pub pnl: Option<serde_json::Value>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default, rename = "type")]
    pub trade_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub trade: TradeDto,
    pub summary: ProgressSummary,
}

#[derive(Debug, Serialize)]
pub struct TradesResponse {
    pub trades: Vec<TradeDto>,
}

#[derive(Debug, Serialize)]
pub struct TradeDto {
    pub date: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub trade_type: String,
    pub pnl: Decimal,
    /// Two-decimal rendering of `pnl`.
    pub pnl_display: String,
    pub exp: i64,
    pub outcome: TradeOutcome,
}

impl From<TradeRecord> for TradeDto {
    fn from(record: TradeRecord) -> Self {
        let outcome = record.outcome();
        Self {
            pnl_display: record.pnl.to_money_string(),
            date: record.date,
            symbol: record.symbol,
            trade_type: record.trade_type,
            pnl: record.pnl,
            exp: record.experience_gained,
            outcome,
        }
    }
}

pub async fn post_trade(
    State(state): State<AppState>,
    payload: Result<Json<TradeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TradeResponse>), AppError> {
    let Json(body) = payload?;
    let pnl = AmountInput::from_json(body.pnl.as_ref(), "pnl")?.parse("pnl")?;

    let (record, summary) = state
        .journal
        .apply_trade(pnl, &body.symbol, &body.trade_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TradeResponse {
            trade: record.into(),
            summary,
        }),
    ))
}

pub async fn get_trades(State(state): State<AppState>) -> Json<TradesResponse> {
    let trades = state
        .journal
        .history()
        .await
        .into_iter()
        .map(TradeDto::from)
        .collect();
    Json(TradesResponse { trades })
}

pub async fn get_trades_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let body = state.journal.history_csv().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"trades.csv\"",
            ),
        ],
        body,
    ))
}
