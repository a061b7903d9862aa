//! Evaluated spread report.
//!
//! Provides:
//! - `SpreadReport`, the ordered rows plus the positional best strike
//! - Plain-text table rendering
//! - JSON rendering

pub mod table;

use serde::Serialize;

use crate::analytics::EvaluatedCandidate;
use crate::data::{MarketView, OptionType};

pub use table::render_table;

/// Rows from one evaluation together with the view they were built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadReport {
    /// Market view of the request.
    pub view: MarketView,
    /// Option type on both legs.
    pub option_type: OptionType,
    /// Evaluated candidates in ladder order.
    pub rows: Vec<EvaluatedCandidate>,
}

impl SpreadReport {
    pub fn new(view: MarketView, rows: Vec<EvaluatedCandidate>) -> Self {
        Self {
            view,
            option_type: view.option_type(),
            rows,
        }
    }

    /// The suggested strike: the first candidate, nearest to the short leg.
    pub fn best(&self) -> Option<&EvaluatedCandidate> {
        self.rows.first()
    }

    /// One-line suggestion, e.g. `Best Strike to Buy: 23900 PUT`.
    pub fn best_line(&self) -> Option<String> {
        self.best()
            .map(|row| format!("Best Strike to Buy: {} {}", row.strike, self.option_type))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            #[serde(flatten)]
            report: &'a SpreadReport,
            best_strike: Option<rust_decimal::Decimal>,
        }

        serde_json::to_string_pretty(&JsonReport {
            report: self,
            best_strike: self.best().map(|r| r.strike),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{RiskReward, SpreadEvaluator};
    use crate::data::{LongCandidate, ShortLeg};
    use rust_decimal_macros::dec;

    fn report() -> SpreadReport {
        let rows = SpreadEvaluator::default()
            .evaluate(
                &ShortLeg::new(dec!(24000), dec!(150)),
                &[
                    LongCandidate::new(dec!(23900), dec!(100)),
                    LongCandidate::new(dec!(23950), dec!(80)),
                ],
                dec!(50000),
            )
            .unwrap();
        SpreadReport::new(MarketView::Bullish, rows)
    }

    #[test]
    fn test_best_is_first_row() {
        let report = report();
        assert_eq!(report.best().map(|r| r.strike), Some(dec!(23900)));
        assert_eq!(
            report.best_line().as_deref(),
            Some("Best Strike to Buy: 23900 PUT")
        );
    }

    #[test]
    fn test_best_of_empty_report() {
        let report = SpreadReport::new(MarketView::Bearish, Vec::new());
        assert!(report.best().is_none());
        assert!(report.best_line().is_none());
    }

    #[test]
    fn test_json_output() {
        let report = report();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["view"], "bullish");
        assert_eq!(value["option_type"], "put");
        assert_eq!(value["rows"].as_array().map(|r| r.len()), Some(2));
        assert_eq!(value["rows"][0]["lots"], 13);
        assert_eq!(value["rows"][0]["total_profit"], 48750);
        assert_eq!(value["rows"][1]["risk_reward"], "inf");
        assert_eq!(value["best_strike"], 23900.0);
        assert_eq!(report.rows[1].risk_reward, RiskReward::Unbounded);
    }
}
