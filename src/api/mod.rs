pub mod health;
pub mod levels;
pub mod state;
pub mod trades;
pub mod withdrawals;

use crate::journal::Journal;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub journal: Arc<Journal>,
}

impl AppState {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self { journal }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/state", get(state::get_state))
        .route("/v1/snapshot", get(state::get_snapshot))
        .route("/v1/trades", get(trades::get_trades).post(trades::post_trade))
        .route("/v1/trades.csv", get(trades::get_trades_csv))
        .route("/v1/withdrawals", post(withdrawals::post_withdrawal))
        .route(
            "/v1/levels/:level/threshold",
            get(levels::get_threshold),
        )
        .layer(cors)
        .with_state(state)
}
