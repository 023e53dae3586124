use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::domain::{Decimal, TradeRecord, UserState, MIN_LEVEL};

use super::rules::ProgressionRules;

/// Day-granularity format used for journal dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A rejected user action. Raised before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
}

/// Level movement caused by one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub from: u32,
    pub to: u32,
}

impl LevelChange {
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

/// Owns the user state and applies trades and withdrawals to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionEngine {
    state: UserState,
    rules: ProgressionRules,
}

impl ProgressionEngine {
    pub fn new(state: UserState, rules: ProgressionRules) -> Self {
        Self { state, rules }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    pub fn rules(&self) -> &ProgressionRules {
        &self.rules
    }

    /// Full copy of the current state, suitable for persisting.
    pub fn snapshot(&self) -> UserState {
        self.state.clone()
    }

    /// Experience needed to go from `level` to `level + 1`.
    pub fn experience_threshold(&self, level: u32) -> i64 {
        self.rules.threshold(level)
    }

    /// Record a trade dated today (local calendar).
    pub fn apply_trade(
        &mut self,
        pnl: Decimal,
        symbol: &str,
        trade_type: &str,
    ) -> Result<TradeRecord, ProgressionError> {
        let today = chrono::Local::now().date_naive();
        self.apply_trade_on(today, pnl, symbol, trade_type)
    }

    /// Record a trade on the given date.
    ///
    /// Profits earn `floor(pnl * rate)` experience; losses and flat trades earn none.
    /// The balance always moves by `pnl`, and may go negative.
    ///
    /// # Errors
    /// `InvalidInput` when the amount is too large to account for.
    pub fn apply_trade_on(
        &mut self,
        date: NaiveDate,
        pnl: Decimal,
        symbol: &str,
        trade_type: &str,
    ) -> Result<TradeRecord, ProgressionError> {
        let gained_exp = if pnl.is_positive() {
            whole_experience(pnl, self.rules.exp_per_dollar_profit())?
        } else {
            0
        };
        let experience = self
            .state
            .experience
            .checked_add(gained_exp)
            .ok_or_else(out_of_range)?;
        let balance = self.state.balance.checked_add(pnl).ok_or_else(out_of_range)?;

        let record = TradeRecord {
            date: date.format(DATE_FORMAT).to_string(),
            symbol: symbol.trim().to_string(),
            trade_type: trade_type.trim().to_string(),
            pnl,
            experience_gained: gained_exp,
        };

        self.state.experience = experience;
        self.state.balance = balance;
        self.state.history.insert(0, record.clone());

        let change = self.level_up();
        if change.is_change() {
            info!(
                "Level up: {} -> {} ({} exp carried)",
                change.from, change.to, self.state.experience
            );
        }

        Ok(record)
    }

    /// Withdraw money from the balance, losing `floor(amount * rate)` experience.
    ///
    /// # Errors
    /// `InvalidInput` for non-positive amounts, `InsufficientFunds` when the
    /// amount exceeds the balance. State is untouched on error.
    pub fn apply_withdrawal(&mut self, amount: Decimal) -> Result<LevelChange, ProgressionError> {
        if !amount.is_positive() {
            return Err(ProgressionError::InvalidInput(format!(
                "withdrawal amount must be positive, got {}",
                amount
            )));
        }
        if amount > self.state.balance {
            return Err(ProgressionError::InsufficientFunds {
                requested: amount,
                available: self.state.balance,
            });
        }

        let lost_exp = whole_experience(amount, self.rules.exp_per_dollar_withdraw())?;
        let experience = self
            .state
            .experience
            .checked_sub(lost_exp)
            .ok_or_else(out_of_range)?;

        self.state.balance = self.state.balance - amount;
        self.state.experience = experience;

        let change = self.level_down();
        if self.state.level == MIN_LEVEL && self.state.experience < 0 {
            self.state.experience = 0;
        }

        info!(
            "Withdrawal of {}: lost {} exp, level {} -> {}",
            amount.to_money_string(),
            lost_exp,
            change.from,
            change.to
        );

        Ok(change)
    }

    /// Consume whole thresholds while experience covers the current one.
    fn level_up(&mut self) -> LevelChange {
        let from = self.state.level;
        let mut threshold = self.rules.threshold(self.state.level);
        while self.state.experience >= threshold && self.state.level < u32::MAX {
            self.state.experience -= threshold;
            self.state.level += 1;
            threshold = self.rules.threshold(self.state.level);
        }
        LevelChange {
            from,
            to: self.state.level,
        }
    }

    /// Drop levels while experience is negative, refunding the threshold of
    /// the level being dropped into (not the one being left).
    fn level_down(&mut self) -> LevelChange {
        let from = self.state.level;
        while self.state.experience < 0 && self.state.level > MIN_LEVEL {
            self.state.level -= 1;
            self.state.experience += self.rules.threshold(self.state.level);
        }
        LevelChange {
            from,
            to: self.state.level,
        }
    }
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new(UserState::default(), ProgressionRules::default())
    }
}

fn whole_experience(amount: Decimal, rate: Decimal) -> Result<i64, ProgressionError> {
    amount
        .checked_mul(rate)
        .and_then(|exp| exp.floor_to_i64())
        .ok_or_else(out_of_range)
}

fn out_of_range() -> ProgressionError {
    ProgressionError::InvalidInput("amount is out of range".to_string())
}
