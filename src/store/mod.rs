//! Key-value persistence for user state snapshots.
//!
//! This module provides:
//! - The `StateStore` byte-store abstraction
//! - A SQLite-backed store and an in-memory store
//! - The JSON snapshot codec

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::domain::UserState;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{init_db, SqliteStore};

/// Logical key the browser build used for its snapshot.
pub const DEFAULT_STATE_KEY: &str = "tradingRpgUser";

/// Byte store holding serialized snapshots under fixed keys.
#[async_trait]
pub trait StateStore: Send + Sync + fmt::Debug {
    /// Read the bytes stored under `key`, or None if absent.
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the bytes stored under `key`.
    async fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
    #[error("Snapshot encoding failed: {0}")]
    Encode(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Serialize a state snapshot to its persisted JSON form.
pub fn encode_snapshot(state: &UserState) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(state).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Parse and validate a persisted snapshot.
pub fn decode_snapshot(bytes: &[u8]) -> Result<UserState, StoreError> {
    let state: UserState =
        serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    state.validate().map_err(StoreError::Corrupt)?;
    Ok(state)
}
