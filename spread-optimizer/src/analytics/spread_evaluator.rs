//! Vertical spread evaluation.
//!
//! For each long candidate hedging a short leg, computes:
//! - 1:1 risk-reward break-even premium for the long leg
//! - Lots affordable within a max loss budget
//! - Total loss and total profit for those lots
//! - Risk-reward ratio (net credit over max loss per unit)
//!
//! Evaluation is pure: candidates come back in input order, one row each.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::data::{LongCandidate, ShortLeg};
use crate::error::{Result, SpreadError};
use crate::risk::{LotSizer, LotSizerConfig};

/// Configuration for spread evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadEvaluatorConfig {
    /// Units per contract lot.
    pub lot_multiplier: u32,
}

impl Default for SpreadEvaluatorConfig {
    fn default() -> Self {
        Self {
            lot_multiplier: LotSizerConfig::default().lot_multiplier,
        }
    }
}

/// Risk-reward of a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskReward {
    /// Net credit per unit of max loss, rounded to 2 decimals.
    Ratio(Decimal),
    /// Max loss per unit is zero or negative, so the ratio has no bound.
    Unbounded,
}

impl RiskReward {
    pub fn ratio(&self) -> Option<Decimal> {
        match self {
            Self::Ratio(r) => Some(*r),
            Self::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl fmt::Display for RiskReward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(r) => write!(f, "{:.2}", r),
            Self::Unbounded => f.write_str("inf"),
        }
    }
}

impl Serialize for RiskReward {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Ratio(r) => Serialize::serialize(r, serializer),
            Self::Unbounded => serializer.serialize_str("inf"),
        }
    }
}

/// One evaluated long candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluatedCandidate {
    /// Long strike.
    pub strike: Decimal,
    /// Long premium at which the spread is 1:1 risk-reward (2 decimals).
    pub break_even_premium: Decimal,
    /// Long premium as entered (2 decimals).
    pub input_premium: Decimal,
    /// Lots affordable within the loss budget.
    pub lots: u32,
    /// Loss if the spread finishes at max loss, truncated to whole currency.
    pub total_loss: i64,
    /// Profit if the spread keeps the full net credit, truncated to whole currency.
    pub total_profit: i64,
    /// Risk-reward ratio.
    pub risk_reward: RiskReward,
    /// Short premium minus long premium, negative for a net debit.
    pub net_credit: Decimal,
}

impl EvaluatedCandidate {
    /// Whether the long leg costs more than the short leg pays.
    pub fn is_net_debit(&self) -> bool {
        self.net_credit < Decimal::ZERO
    }
}

/// Evaluates long candidates against a short leg.
#[derive(Debug, Clone, Copy)]
pub struct SpreadEvaluator {
    config: SpreadEvaluatorConfig,
    sizer: LotSizer,
}

impl SpreadEvaluator {
    pub fn new(config: SpreadEvaluatorConfig) -> Self {
        Self {
            config,
            sizer: LotSizer::new(LotSizerConfig {
                lot_multiplier: config.lot_multiplier,
            }),
        }
    }

    /// Evaluate every candidate, preserving input order.
    ///
    /// All inputs are validated before any row is computed, so the caller
    /// either gets one row per candidate or an error.
    pub fn evaluate(
        &self,
        short: &ShortLeg,
        candidates: &[LongCandidate],
        max_loss: Decimal,
    ) -> Result<Vec<EvaluatedCandidate>> {
        self.validate(short, candidates, max_loss)?;

        let rows: Vec<EvaluatedCandidate> = candidates
            .iter()
            .map(|candidate| self.evaluate_candidate(short, candidate, max_loss))
            .collect();

        info!(
            short_strike = %short.strike,
            short_premium = %short.premium,
            max_loss = %max_loss,
            candidates = rows.len(),
            sized = rows.iter().filter(|r| r.lots > 0).count(),
            "Evaluated spread candidates"
        );

        Ok(rows)
    }

    fn validate(&self, short: &ShortLeg, candidates: &[LongCandidate], max_loss: Decimal) -> Result<()> {
        if short.premium <= Decimal::ZERO {
            return Err(SpreadError::invalid(format!(
                "short premium must be positive, got {}",
                short.premium
            )));
        }

        if let Some(bad) = candidates.iter().find(|c| c.premium <= Decimal::ZERO) {
            return Err(SpreadError::invalid(format!(
                "premium for strike {} must be positive, got {}",
                bad.strike, bad.premium
            )));
        }

        if max_loss <= Decimal::ZERO {
            return Err(SpreadError::invalid(format!(
                "max loss must be positive, got {max_loss}"
            )));
        }

        if self.config.lot_multiplier == 0 {
            return Err(SpreadError::invalid("lot multiplier must be at least 1"));
        }

        Ok(())
    }

    fn evaluate_candidate(
        &self,
        short: &ShortLeg,
        candidate: &LongCandidate,
        max_loss: Decimal,
    ) -> EvaluatedCandidate {
        let spread_width = (short.strike - candidate.strike).abs();
        let net_credit = short.premium - candidate.premium;
        let max_loss_per_unit = spread_width - net_credit;
        let break_even_premium = short.premium - spread_width / Decimal::TWO;

        let sizing = self.sizer.size(max_loss, max_loss_per_unit);
        let risk_reward = if max_loss_per_unit > Decimal::ZERO {
            RiskReward::Ratio((net_credit / max_loss_per_unit).round_dp(2))
        } else {
            RiskReward::Unbounded
        };

        let lots = Decimal::from(sizing.lots);
        let multiplier = self.sizer.lot_multiplier();
        let total_loss = whole_currency(lots * max_loss_per_unit * multiplier);
        let total_profit = whole_currency(lots * net_credit * multiplier);

        if risk_reward.is_unbounded() {
            warn!(
                strike = %candidate.strike,
                premium = %candidate.premium,
                "Spread has no positive max loss, skipping lot sizing"
            );
        } else if !sizing.is_allowed() {
            debug!(
                strike = %candidate.strike,
                loss_per_lot = ?sizing.loss_per_lot,
                max_loss = %max_loss,
                "Budget does not cover a single lot"
            );
        }

        debug!(
            strike = %candidate.strike,
            spread_width = %spread_width,
            net_credit = %net_credit,
            max_loss_per_unit = %max_loss_per_unit,
            lots = sizing.lots,
            total_loss,
            total_profit,
            risk_reward = %risk_reward,
            "Evaluated candidate"
        );

        EvaluatedCandidate {
            strike: candidate.strike,
            break_even_premium: break_even_premium.round_dp(2),
            input_premium: candidate.premium.round_dp(2),
            lots: sizing.lots,
            total_loss,
            total_profit,
            risk_reward,
            net_credit,
        }
    }
}

impl Default for SpreadEvaluator {
    fn default() -> Self {
        Self::new(SpreadEvaluatorConfig::default())
    }
}

/// Evaluate candidates with an explicit lot multiplier.
pub fn evaluate(
    short: &ShortLeg,
    candidates: &[LongCandidate],
    max_loss: Decimal,
    lot_multiplier: u32,
) -> Result<Vec<EvaluatedCandidate>> {
    SpreadEvaluator::new(SpreadEvaluatorConfig { lot_multiplier }).evaluate(short, candidates, max_loss)
}

/// Truncate toward zero into whole currency units, saturating on overflow.
fn whole_currency(amount: Decimal) -> i64 {
    amount.trunc().to_i64().unwrap_or(if amount.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
