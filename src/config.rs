use std::collections::HashMap;
use thiserror::Error;

use crate::domain::Decimal;
use crate::engine::{ProgressionRules, DEFAULT_EXP_PER_LEVEL_BASE};
use crate::store::DEFAULT_STATE_KEY;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub state_key: String,
    pub starting_balance: Decimal,
    pub rules: ProgressionRules,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| "tradequest.db".to_string());

        let state_key = env_map
            .get("STATE_KEY")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| DEFAULT_STATE_KEY.to_string());
        if state_key.is_empty() {
            return Err(ConfigError::InvalidValue(
                "STATE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let starting_balance = parse_decimal(&env_map, "STARTING_BALANCE", "1000.00")?;

        let exp_per_level_base = env_map
            .get("EXP_PER_LEVEL_BASE")
            .map(|s| s.trim().parse::<i64>())
            .transpose()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "EXP_PER_LEVEL_BASE".to_string(),
                    "must be a valid i64".to_string(),
                )
            })?
            .unwrap_or(DEFAULT_EXP_PER_LEVEL_BASE);
        let exp_per_dollar_profit = parse_decimal(&env_map, "EXP_PER_DOLLAR_PROFIT", "1")?;
        let exp_per_dollar_withdraw = parse_decimal(&env_map, "EXP_PER_DOLLAR_WITHDRAW", "1")?;

        let rules = ProgressionRules::new(
            exp_per_level_base,
            exp_per_dollar_profit,
            exp_per_dollar_withdraw,
        )
        .map_err(|msg| ConfigError::InvalidValue("progression rules".to_string(), msg))?;

        Ok(Config {
            port,
            database_path,
            state_key,
            starting_balance,
            rules,
        })
    }
}

fn parse_decimal(
    env_map: &HashMap<String, String>,
    name: &str,
    default: &str,
) -> Result<Decimal, ConfigError> {
    let raw = env_map.get(name).map(|s| s.as_str()).unwrap_or(default);
    Decimal::from_str_canonical(raw).map_err(|_| {
        ConfigError::InvalidValue(name.to_string(), format!("must be a decimal, got {}", raw))
    })
}
