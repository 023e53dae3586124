pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod export;
pub mod journal;
pub mod store;

pub use config::Config;
pub use domain::{Decimal, TradeOutcome, TradeRecord, UserState};
pub use engine::{ProgressSummary, ProgressionEngine, ProgressionError, ProgressionRules};
pub use error::AppError;
pub use journal::{Journal, JournalError};
pub use store::{MemoryStore, SqliteStore, StateStore, StoreError};
