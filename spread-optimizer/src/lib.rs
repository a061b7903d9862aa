pub mod analytics;
pub mod config;
pub mod data;
pub mod error;
pub mod form;
pub mod report;
pub mod risk;

// Re-export commonly used types
pub use analytics::{EvaluatedCandidate, RiskReward, SpreadEvaluator, StrikeLadder};
pub use config::{AppConfig, InputLimits};
pub use data::{LongCandidate, MarketView, OptionType, ShortLeg, SpreadRequest};
pub use error::SpreadError;
pub use report::SpreadReport;
pub use risk::{LotSizer, LotSizing};
