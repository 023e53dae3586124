//! Pure progression logic: converting trade outcomes into experience and levels.

pub mod input;
pub mod progression;
pub mod rules;
pub mod summary;

pub use input::{parse_amount, AmountInput};
pub use progression::{LevelChange, ProgressionEngine, ProgressionError, DATE_FORMAT};
pub use rules::{ProgressionRules, DEFAULT_EXP_PER_LEVEL_BASE};
pub use summary::ProgressSummary;
