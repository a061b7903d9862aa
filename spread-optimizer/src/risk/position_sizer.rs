//! Lot sizing module.
//!
//! Determines how many contract lots fit inside a loss budget:
//! - Per-lot risk is the per-unit max loss scaled by the lot multiplier
//! - Lots are floored, never rounded up past the budget
//! - Unbounded or zero per-lot risk sizes to zero lots

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lot sizing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSizerConfig {
    /// Units per contract lot (exchange contract size).
    pub lot_multiplier: u32,
}

impl Default for LotSizerConfig {
    fn default() -> Self {
        Self { lot_multiplier: 75 }
    }
}

/// Result of a lot sizing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotSizing {
    /// Number of lots affordable within the budget.
    pub lots: u32,
    /// Currency loss of a single lot, `None` when the position has no bounded loss.
    pub loss_per_lot: Option<Decimal>,
}

impl LotSizing {
    /// Check if the budget supports at least one lot.
    pub fn is_allowed(&self) -> bool {
        self.lots >= 1
    }
}

/// Sizes lots against a maximum loss budget.
#[derive(Debug, Clone, Copy)]
pub struct LotSizer {
    config: LotSizerConfig,
}

impl LotSizer {
    pub fn new(config: LotSizerConfig) -> Self {
        Self { config }
    }

    pub fn lot_multiplier(&self) -> Decimal {
        Decimal::from(self.config.lot_multiplier)
    }

    /// Size a position given its max loss per unit.
    ///
    /// # Arguments
    /// * `budget` - Maximum total loss the trader accepts
    /// * `max_loss_per_unit` - Spread width minus net credit
    pub fn size(&self, budget: Decimal, max_loss_per_unit: Decimal) -> LotSizing {
        if max_loss_per_unit <= Decimal::ZERO || self.config.lot_multiplier == 0 {
            return LotSizing {
                lots: 0,
                loss_per_lot: None,
            };
        }

        let Some(loss_per_lot) = max_loss_per_unit.checked_mul(self.lot_multiplier()) else {
            // A single lot already exceeds anything representable
            return LotSizing {
                lots: 0,
                loss_per_lot: None,
            };
        };

        let lots = if budget <= Decimal::ZERO {
            0
        } else {
            floor_to_lots(budget.checked_div(loss_per_lot))
        };

        LotSizing {
            lots,
            loss_per_lot: Some(loss_per_lot),
        }
    }
}

/// Floor a lot ratio, saturating when the division overflowed.
fn floor_to_lots(ratio: Option<Decimal>) -> u32 {
    match ratio {
        Some(r) => r.floor().to_u32().unwrap_or(u32::MAX),
        None => u32::MAX,
    }
}
