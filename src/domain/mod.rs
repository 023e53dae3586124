//! Domain types for the trading journal.
//!
//! This module provides:
//! - Lossless money handling via the Decimal wrapper
//! - TradeRecord journal entries
//! - UserState, the single aggregate that is persisted as a snapshot

pub mod decimal;
pub mod trade;
pub mod user_state;

pub use decimal::Decimal;
pub use trade::{TradeOutcome, TradeRecord};
pub use user_state::{UserState, MIN_LEVEL};
