use crate::domain::Decimal;

/// Experience needed to clear level 1.
pub const DEFAULT_EXP_PER_LEVEL_BASE: i64 = 1000;

/// Conversion constants between money and experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionRules {
    exp_per_level_base: i64,
    exp_per_dollar_profit: Decimal,
    exp_per_dollar_withdraw: Decimal,
}

impl ProgressionRules {
    /// # Errors
    /// Returns a message when the level base is not positive or a rate is negative.
    pub fn new(
        exp_per_level_base: i64,
        exp_per_dollar_profit: Decimal,
        exp_per_dollar_withdraw: Decimal,
    ) -> Result<Self, String> {
        if exp_per_level_base <= 0 {
            return Err(format!(
                "level base must be positive, got {}",
                exp_per_level_base
            ));
        }
        if exp_per_dollar_profit.is_negative() || exp_per_dollar_withdraw.is_negative() {
            return Err("experience rates must not be negative".to_string());
        }
        Ok(Self {
            exp_per_level_base,
            exp_per_dollar_profit,
            exp_per_dollar_withdraw,
        })
    }

    /// Experience required to advance from `level` to `level + 1`.
    pub fn threshold(&self, level: u32) -> i64 {
        i64::from(level).saturating_mul(self.exp_per_level_base)
    }

    pub fn exp_per_dollar_profit(&self) -> Decimal {
        self.exp_per_dollar_profit
    }

    pub fn exp_per_dollar_withdraw(&self) -> Decimal {
        self.exp_per_dollar_withdraw
    }
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            exp_per_level_base: DEFAULT_EXP_PER_LEVEL_BASE,
            exp_per_dollar_profit: Decimal::one(),
            exp_per_dollar_withdraw: Decimal::one(),
        }
    }
}
