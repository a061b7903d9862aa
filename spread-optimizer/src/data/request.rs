//! Immutable evaluation request.
//!
//! Everything one calculation needs travels in a single value; there is no
//! session state between runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{LongCandidate, MarketView, ShortLeg};
use crate::analytics::{SpreadEvaluator, StrikeLadder};
use crate::error::{Result, SpreadError};
use crate::report::SpreadReport;

/// A short leg, its ordered hedge candidates and the loss budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadRequest {
    view: MarketView,
    short: ShortLeg,
    candidates: Vec<LongCandidate>,
    max_loss: Decimal,
}

impl SpreadRequest {
    pub fn new(
        view: MarketView,
        short: ShortLeg,
        candidates: Vec<LongCandidate>,
        max_loss: Decimal,
    ) -> Self {
        Self {
            view,
            short,
            candidates,
            max_loss,
        }
    }

    /// Pair ladder-generated strikes with the premiums quoted for them.
    ///
    /// `premiums[i]` is the premium for the i-th ladder strike, so the
    /// lengths must match.
    pub fn from_ladder(
        view: MarketView,
        short: ShortLeg,
        premiums: &[Decimal],
        max_loss: Decimal,
        ladder: &StrikeLadder,
    ) -> Result<Self> {
        let strikes = ladder.strikes(view, short.strike)?;
        if strikes.len() != premiums.len() {
            return Err(SpreadError::invalid(format!(
                "expected {} buy premiums (one per candidate strike), got {}",
                strikes.len(),
                premiums.len()
            )));
        }

        let candidates = strikes
            .into_iter()
            .zip(premiums.iter().copied())
            .map(|(strike, premium)| LongCandidate::new(strike, premium))
            .collect();

        Ok(Self::new(view, short, candidates, max_loss))
    }

    pub fn view(&self) -> MarketView {
        self.view
    }

    pub fn short(&self) -> &ShortLeg {
        &self.short
    }

    pub fn candidates(&self) -> &[LongCandidate] {
        &self.candidates
    }

    pub fn max_loss(&self) -> Decimal {
        self.max_loss
    }

    /// Run the evaluator over this request.
    pub fn evaluate(&self, evaluator: &SpreadEvaluator) -> Result<SpreadReport> {
        let rows = evaluator.evaluate(&self.short, &self.candidates, self.max_loss)?;
        Ok(SpreadReport::new(self.view, rows))
    }
}
