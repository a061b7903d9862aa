//! Spread analytics module.
//!
//! Provides:
//! - Candidate strike ladder generation
//! - Vertical spread evaluation (break-even, lot sizing, risk-reward)

pub mod spread_evaluator;
pub mod strike_ladder;

pub use spread_evaluator::{
    evaluate, EvaluatedCandidate, RiskReward, SpreadEvaluator, SpreadEvaluatorConfig,
};
pub use strike_ladder::{StrikeLadder, StrikeLadderConfig};
