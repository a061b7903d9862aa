//! Configuration loading from TOML.
//!
//! Every section is optional; missing keys fall back to the defaults the
//! calculator ships with (75-unit lots, 100/50 point ladder of 4 strikes).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::{SpreadEvaluatorConfig, StrikeLadderConfig};
use crate::error::SpreadError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evaluator: SpreadEvaluatorConfig,
    pub ladder: StrikeLadderConfig,
    pub limits: InputLimits,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

/// Bounds the input form enforces before anything is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Lowest short strike accepted.
    pub min_strike: Decimal,
    /// Highest short strike accepted.
    pub max_strike: Decimal,
    /// Smallest premium accepted on either leg.
    pub min_premium: Decimal,
    /// Smallest max-loss budget accepted.
    pub min_max_loss: Decimal,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_strike: Decimal::from(10_000),
            max_strike: Decimal::from(30_000),
            min_premium: Decimal::new(1, 1), // 0.1
            min_max_loss: Decimal::from(1_000),
        }
    }
}

impl InputLimits {
    pub fn check_strike(&self, strike: Decimal) -> Result<Decimal, SpreadError> {
        if strike < self.min_strike || strike > self.max_strike {
            return Err(SpreadError::OutOfRange {
                field: "sell strike",
                value: strike.to_string(),
                bounds: format!("{}..={}", self.min_strike, self.max_strike),
            });
        }
        Ok(strike)
    }

    pub fn check_premium(&self, field: &'static str, premium: Decimal) -> Result<Decimal, SpreadError> {
        if premium < self.min_premium {
            return Err(SpreadError::OutOfRange {
                field,
                value: premium.to_string(),
                bounds: format!(">= {}", self.min_premium),
            });
        }
        Ok(premium)
    }

    pub fn check_max_loss(&self, max_loss: Decimal) -> Result<Decimal, SpreadError> {
        if max_loss < self.min_max_loss {
            return Err(SpreadError::OutOfRange {
                field: "max loss",
                value: max_loss.to_string(),
                bounds: format!(">= {}", self.min_max_loss),
            });
        }
        Ok(max_loss)
    }
}
