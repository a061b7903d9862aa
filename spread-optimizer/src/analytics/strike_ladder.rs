//! Candidate strike generation.
//!
//! Builds the protective long strikes for a short leg:
//! - First strike sits `first_offset` points beyond the short strike
//! - Following strikes step `step` points further out
//! - Puts step down (bullish view), calls step up (bearish view)
//!
//! The order is positional; index 0 is what gets reported as the best strike.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::data::MarketView;
use crate::error::{Result, SpreadError};

/// Configuration for the candidate ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrikeLadderConfig {
    /// Distance from the short strike to the first candidate (in points).
    pub first_offset: u32,
    /// Distance between consecutive candidates (in points).
    pub step: u32,
    /// Number of candidates to generate.
    pub count: usize,
}

impl Default for StrikeLadderConfig {
    fn default() -> Self {
        Self {
            first_offset: 100,
            step: 50,
            count: 4,
        }
    }
}

/// Generates candidate long strikes for a short strike and market view.
#[derive(Debug, Clone, Copy)]
pub struct StrikeLadder {
    config: StrikeLadderConfig,
}

impl StrikeLadder {
    pub fn new(config: StrikeLadderConfig) -> Self {
        Self { config }
    }

    pub fn count(&self) -> usize {
        self.config.count
    }

    /// Candidate strikes ordered from nearest to farthest.
    pub fn strikes(&self, view: MarketView, short_strike: Decimal) -> Result<Vec<Decimal>> {
        let direction = view.direction();
        let first_offset = Decimal::from(self.config.first_offset);
        let step = Decimal::from(self.config.step);

        (0..self.config.count)
            .map(|i| {
                let distance = first_offset + step * Decimal::from(i);
                let strike = short_strike + direction * distance;
                if strike <= Decimal::ZERO {
                    return Err(SpreadError::invalid(format!(
                        "candidate strike {strike} for short strike {short_strike} is not positive"
                    )));
                }
                Ok(strike)
            })
            .collect()
    }
}

impl Default for StrikeLadder {
    fn default() -> Self {
        Self::new(StrikeLadderConfig::default())
    }
}
