//! The single mutable aggregate: balance, level, experience and trade history.

use crate::domain::{Decimal, TradeRecord};
use serde::{Deserialize, Serialize};

/// Lowest reachable level.
pub const MIN_LEVEL: u32 = 1;

/// User progression state. Doubles as the persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub balance: Decimal,
    pub level: u32,
    /// Older browser snapshots stored this under `exp`.
    #[serde(alias = "exp")]
    pub experience: i64,
    /// Most-recent-first.
    pub history: Vec<TradeRecord>,
}

impl UserState {
    /// Fresh state at level 1 with no experience and an empty journal.
    pub fn with_balance(balance: Decimal) -> Self {
        Self {
            balance,
            level: MIN_LEVEL,
            experience: 0,
            history: Vec::new(),
        }
    }

    /// Check the at-rest invariants. Used when accepting a loaded snapshot.
    pub fn validate(&self) -> Result<(), String> {
        if self.level < MIN_LEVEL {
            return Err(format!("level must be >= {}, got {}", MIN_LEVEL, self.level));
        }
        if self.experience < 0 {
            return Err(format!(
                "experience must be >= 0 at rest, got {}",
                self.experience
            ));
        }
        Ok(())
    }

    pub fn trade_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for UserState {
    /// `balance=1000.00, level=1, experience=0, history=[]`.
    fn default() -> Self {
        Self::with_balance(Decimal::from_parts(100000, 2))
    }
}
