use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{Decimal, TradeRecord, UserState};
use crate::engine::{
    LevelChange, ProgressSummary, ProgressionEngine, ProgressionError, ProgressionRules,
};
use crate::export::{history_to_csv, ExportError};
use crate::store::{decode_snapshot, encode_snapshot, StateStore, StoreError};

/// Owns the progression engine for one session and persists after every change.
///
/// Mutations run under a single lock and are committed to memory only after
/// the snapshot has been saved, so memory never runs ahead of the store.
#[derive(Debug)]
pub struct Journal {
    engine: Mutex<ProgressionEngine>,
    store: Arc<dyn StateStore>,
    key: String,
}

impl Journal {
    /// Restore the snapshot under `key`, or start from `starting_balance`.
    pub async fn load_or_initialize(
        store: Arc<dyn StateStore>,
        key: impl Into<String>,
        rules: ProgressionRules,
        starting_balance: Decimal,
    ) -> Result<Self, JournalError> {
        let key = key.into();
        let state = match store.load(&key).await? {
            Some(bytes) => {
                let state = decode_snapshot(&bytes)?;
                info!(
                    "Loaded journal '{}': level {}, {} trades",
                    key,
                    state.level,
                    state.trade_count()
                );
                state
            }
            None => {
                info!("No saved journal under '{}', starting fresh", key);
                UserState::with_balance(starting_balance)
            }
        };

        Ok(Self {
            engine: Mutex::new(ProgressionEngine::new(state, rules)),
            store,
            key,
        })
    }

    /// Record a trade and return it with the summary of the committed state.
    pub async fn apply_trade(
        &self,
        pnl: Decimal,
        symbol: &str,
        trade_type: &str,
    ) -> Result<(TradeRecord, ProgressSummary), JournalError> {
        let mut engine = self.engine.lock().await;
        let mut working = engine.clone();
        let record = working.apply_trade(pnl, symbol, trade_type).map_err(|e| {
            warn!("Trade rejected: {}", e);
            e
        })?;

        self.persist(working.state()).await?;
        let summary = ProgressSummary::from_state(working.state(), working.rules());
        *engine = working;
        Ok((record, summary))
    }

    /// Withdraw and return the level movement with the summary of the committed state.
    pub async fn apply_withdrawal(
        &self,
        amount: Decimal,
    ) -> Result<(LevelChange, ProgressSummary), JournalError> {
        let mut engine = self.engine.lock().await;
        let mut working = engine.clone();
        let change = working.apply_withdrawal(amount).map_err(|e| {
            warn!("Withdrawal rejected: {}", e);
            e
        })?;

        self.persist(working.state()).await?;
        let summary = ProgressSummary::from_state(working.state(), working.rules());
        *engine = working;
        Ok((change, summary))
    }

    pub async fn summary(&self) -> ProgressSummary {
        let engine = self.engine.lock().await;
        ProgressSummary::from_state(engine.state(), engine.rules())
    }

    /// Trades, most recent first.
    pub async fn history(&self) -> Vec<TradeRecord> {
        self.engine.lock().await.state().history.clone()
    }

    pub async fn history_csv(&self) -> Result<Vec<u8>, JournalError> {
        let engine = self.engine.lock().await;
        Ok(history_to_csv(&engine.state().history)?)
    }

    pub async fn snapshot(&self) -> UserState {
        self.engine.lock().await.snapshot()
    }

    pub async fn experience_threshold(&self, level: u32) -> i64 {
        self.engine.lock().await.experience_threshold(level)
    }

    async fn persist(&self, state: &UserState) -> Result<(), JournalError> {
        let bytes = encode_snapshot(state)?;
        self.store.save(&self.key, &bytes).await.map_err(|e| {
            warn!("Failed to persist journal '{}': {}", self.key, e);
            e
        })?;
        debug!("Persisted journal '{}' ({} bytes)", self.key, bytes.len());
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum JournalError {
    #[error(transparent)]
    Progression(#[from] ProgressionError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
