//! Journal entries recorded for each submitted trade.

use crate::domain::Decimal;
use serde::{Deserialize, Serialize};

/// A single journal entry. Immutable once created.
///
/// Field names on the wire match the persisted snapshot layout
/// (`date`, `symbol`, `type`, `pnl`, `exp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Calendar date of entry, day granularity.
    pub date: String,
    /// Free-form instrument label.
    pub symbol: String,
    /// Free-form direction label (long/short/...). Not validated.
    #[serde(rename = "type")]
    pub trade_type: String,
    /// Signed profit/loss for this entry.
    pub pnl: Decimal,
    /// Experience credited for this entry; zero for losing or flat trades.
    #[serde(rename = "exp")]
    pub experience_gained: i64,
}

impl TradeRecord {
    pub fn outcome(&self) -> TradeOutcome {
        if self.pnl.is_negative() {
            TradeOutcome::Loss
        } else {
            TradeOutcome::Profit
        }
    }
}

/// Display classification of a trade; flat trades count as profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeOutcome {
    Profit,
    Loss,
}

impl std::fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeOutcome::Profit => write!(f, "profit"),
            TradeOutcome::Loss => write!(f, "loss"),
        }
    }
}
