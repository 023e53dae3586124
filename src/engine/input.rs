//! Parsing of amounts handed over by the presentation layer.

use crate::domain::Decimal;

use super::ProgressionError;

/// An amount as submitted from a form: either raw text or a float.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Accept a JSON number or string; anything else (including absence) is invalid.
    ///
    /// Numbers keep their literal digits and are parsed as text, never through f64.
    pub fn from_json(
        value: Option<&serde_json::Value>,
        field: &str,
    ) -> Result<Self, ProgressionError> {
        match value {
            Some(serde_json::Value::Number(n)) => Ok(AmountInput::Text(n.to_string())),
            Some(serde_json::Value::String(s)) => Ok(AmountInput::Text(s.clone())),
            None | Some(serde_json::Value::Null) => {
                Err(ProgressionError::InvalidInput(format!("{} is required", field)))
            }
            Some(other) => Err(ProgressionError::InvalidInput(format!(
                "{} must be a number, got {}",
                field, other
            ))),
        }
    }

    /// Resolve to a finite decimal.
    ///
    /// # Errors
    /// `InvalidInput` when the value is empty, non-numeric, or not finite.
    pub fn parse(&self, field: &str) -> Result<Decimal, ProgressionError> {
        match self {
            AmountInput::Number(n) => Decimal::from_f64(*n).ok_or_else(|| {
                ProgressionError::InvalidInput(format!("{} must be a finite number", field))
            }),
            AmountInput::Text(s) => parse_amount(s, field),
        }
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

/// Parse user-entered text into a decimal amount.
///
/// # Errors
/// `InvalidInput` naming `field` when the text is not a number.
pub fn parse_amount(raw: &str, field: &str) -> Result<Decimal, ProgressionError> {
    if raw.trim().is_empty() {
        return Err(ProgressionError::InvalidInput(format!("{} is required", field)));
    }
    Decimal::from_str_canonical(raw).map_err(|_| {
        ProgressionError::InvalidInput(format!("{} is not a valid number: {:?}", field, raw))
    })
}
