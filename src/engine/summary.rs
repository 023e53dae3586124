use serde::Serialize;

use crate::domain::{Decimal, UserState};

use super::ProgressionRules;

/// Read model for the stats panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub balance: Decimal,
    pub level: u32,
    pub experience: i64,
    pub experience_to_next_level: i64,
    /// Experience over threshold, in percent, clamped to [0, 100].
    pub progress_percent: f64,
    pub trade_count: usize,
}

impl ProgressSummary {
    pub fn from_state(state: &UserState, rules: &ProgressionRules) -> Self {
        let threshold = rules.threshold(state.level);
        Self {
            balance: state.balance,
            level: state.level,
            experience: state.experience,
            experience_to_next_level: threshold,
            progress_percent: progress_percent(state.experience, threshold),
            trade_count: state.trade_count(),
        }
    }
}

fn progress_percent(experience: i64, threshold: i64) -> f64 {
    if threshold <= 0 {
        return 0.0;
    }
    (experience as f64 / threshold as f64 * 100.0).clamp(0.0, 100.0)
}
