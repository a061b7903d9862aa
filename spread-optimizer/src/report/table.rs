//! Plain-text table rendering for spread reports.

use super::SpreadReport;
use crate::analytics::EvaluatedCandidate;

const HEADERS: [&str; 7] = [
    "Buy Strike",
    "1:1 Prem",
    "Buy Prem",
    "Lots",
    "Loss",
    "Profit",
    "Risk-Reward",
];

/// Render the report as a markdown-style table followed by the best strike line.
pub fn render_table(report: &SpreadReport) -> String {
    let cells: Vec<[String; 7]> = report.rows.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(&HEADERS.map(String::from), &widths));
    out.push_str(&format!(
        "|{}|\n",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("|")
    ));
    for row in &cells {
        out.push_str(&format_line(row, &widths));
    }

    if let Some(line) = report.best_line() {
        out.push('\n');
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn row_cells(row: &EvaluatedCandidate) -> [String; 7] {
    [
        row.strike.to_string(),
        format!("{:.2}", row.break_even_premium),
        format!("{:.2}", row.input_premium),
        row.lots.to_string(),
        row.total_loss.to_string(),
        row.total_profit.to_string(),
        row.risk_reward.to_string(),
    ]
}

fn format_line(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let body = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!(" {:>width$} ", cell, width = *width))
        .collect::<Vec<_>>()
        .join("|");
    format!("|{}|\n", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::SpreadEvaluator;
    use crate::data::{LongCandidate, MarketView, ShortLeg};
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_table() {
        let rows = SpreadEvaluator::default()
            .evaluate(
                &ShortLeg::new(dec!(24000), dec!(150)),
                &[
                    LongCandidate::new(dec!(23900), dec!(100)),
                    LongCandidate::new(dec!(23850), dec!(170)),
                ],
                dec!(50000),
            )
            .unwrap();
        let table = render_table(&SpreadReport::new(MarketView::Bullish, rows));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines[0],
            "| Buy Strike | 1:1 Prem | Buy Prem | Lots |  Loss | Profit | Risk-Reward |"
        );
        assert!(lines[1].starts_with("|------------|"));
        assert_eq!(
            lines[2],
            "|      23900 |   100.00 |   100.00 |   13 | 48750 |  48750 |        1.00 |"
        );
        // credit -20, max loss 170 per unit -> 3 lots
        assert_eq!(
            lines[3],
            "|      23850 |    75.00 |   170.00 |    3 | 38250 |  -4500 |       -0.12 |"
        );
        assert_eq!(lines[5], "Best Strike to Buy: 23900 PUT");
    }

    #[test]
    fn test_render_empty_report() {
        let table = render_table(&SpreadReport::new(MarketView::Bearish, Vec::new()));
        assert_eq!(table.lines().count(), 2);
        assert!(!table.contains("Best Strike"));
    }
}
