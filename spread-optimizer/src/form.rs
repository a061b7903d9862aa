//! Input form: collects raw field values, range-checks them and turns them
//! into a `SpreadRequest`.
//!
//! Fields are asked in the same order the calculator has always used:
//! market view, sell strike, sell premium, one buy premium per ladder
//! strike, then the max loss budget.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;

use crate::analytics::StrikeLadder;
use crate::config::AppConfig;
use crate::data::{MarketView, ShortLeg, SpreadRequest};
use crate::error::SpreadError;

/// Raw values from one filled-in form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub view: MarketView,
    pub sell_strike: Decimal,
    pub sell_premium: Decimal,
    pub buy_premiums: Vec<Decimal>,
    pub max_loss: Decimal,
}

impl FormInput {
    /// Apply the form limits and pair premiums with ladder strikes.
    pub fn into_request(self, config: &AppConfig) -> std::result::Result<SpreadRequest, SpreadError> {
        let limits = &config.limits;
        let strike = limits.check_strike(self.sell_strike)?;
        let premium = limits.check_premium("sell premium", self.sell_premium)?;
        for p in &self.buy_premiums {
            limits.check_premium("buy premium", *p)?;
        }
        let max_loss = limits.check_max_loss(self.max_loss)?;

        SpreadRequest::from_ladder(
            self.view,
            ShortLeg::new(strike, premium),
            &self.buy_premiums,
            max_loss,
            &StrikeLadder::new(config.ladder),
        )
    }
}

/// Prompt for every field on `output`, reading answers line by line from `input`.
///
/// Unparseable or out-of-range answers are reported and asked again.
/// Running out of input before the form is complete is an error.
pub fn prompt_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &AppConfig,
) -> Result<FormInput> {
    let limits = &config.limits;

    let view: MarketView = ask(input, output, "Market View [Long/Short]", Ok)?;
    let option_type = view.option_type();

    let sell_strike = ask(input, output, &format!("Sell Strike ({option_type})"), |v| {
        limits.check_strike(v)
    })?;
    let sell_premium = ask(input, output, &format!("Sell Prem ({option_type})"), |v| {
        limits.check_premium("sell premium", v)
    })?;

    let ladder = StrikeLadder::new(config.ladder);
    let strikes = ladder.strikes(view, sell_strike)?;
    writeln!(output, "Enter Buy Premiums for Nearby {option_type} Strikes:")?;
    let mut buy_premiums = Vec::with_capacity(ladder.count());
    for strike in &strikes {
        let premium = ask(input, output, &format!("Buy Prem {strike} {option_type}"), |v| {
            limits.check_premium("buy premium", v)
        })?;
        buy_premiums.push(premium);
    }

    let max_loss = ask(input, output, "Max Loss", |v| limits.check_max_loss(v))?;

    Ok(FormInput {
        view,
        sell_strike,
        sell_premium,
        buy_premiums,
        max_loss,
    })
}

fn ask<T, R, W, F>(input: &mut R, output: &mut W, label: &str, check: F) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
    W: Write,
    F: Fn(T) -> std::result::Result<T, SpreadError>,
{
    loop {
        write!(output, "{label}: ")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .with_context(|| format!("Failed to read {label}"))?;
        if read == 0 {
            bail!("Input ended before {label} was entered");
        }

        match line.trim().parse::<T>() {
            Ok(value) => match check(value) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(output, "  {e}")?,
            },
            Err(e) => writeln!(output, "  Invalid value '{}': {e}", line.trim())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run(answers: &str) -> (Result<FormInput>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_form(&mut input, &mut output, &AppConfig::default());
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_full_form() {
        let (result, transcript) = run("Long\n24000\n150\n100\n85\n70\n60\n50000\n");
        let form = result.unwrap();

        assert_eq!(form.view, MarketView::Bullish);
        assert_eq!(form.sell_strike, dec!(24000));
        assert_eq!(form.buy_premiums, vec![dec!(100), dec!(85), dec!(70), dec!(60)]);
        assert_eq!(form.max_loss, dec!(50000));

        assert!(transcript.contains("Sell Strike (PUT): "));
        assert!(transcript.contains("Enter Buy Premiums for Nearby PUT Strikes:"));
        assert!(transcript.contains("Buy Prem 23900 PUT: "));
        assert!(transcript.contains("Buy Prem 23750 PUT: "));
    }

    #[test]
    fn test_prompt_reasks_invalid_answers() {
        let (result, transcript) = run("sideways\nShort\n5000\n24000\nabc\n150\n90\n80\n70\n60\n500\n2000\n");
        let form = result.unwrap();

        assert_eq!(form.view, MarketView::Bearish);
        assert_eq!(form.sell_strike, dec!(24000));
        assert_eq!(form.max_loss, dec!(2000));
        assert!(transcript.contains("unknown market view"));
        assert!(transcript.contains("sell strike out of range"));
        assert!(transcript.contains("Invalid value 'abc'"));
        assert!(transcript.contains("Buy Prem 24100 CALL: "));
    }

    #[test]
    fn test_prompt_truncated_input() {
        let (result, _) = run("Long\n24000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_into_request_applies_limits() {
        let form = FormInput {
            view: MarketView::Bullish,
            sell_strike: dec!(24000),
            sell_premium: dec!(150),
            buy_premiums: vec![dec!(100), dec!(0.05), dec!(70), dec!(60)],
            max_loss: dec!(50000),
        };
        let result = form.into_request(&AppConfig::default());
        assert!(matches!(
            result,
            Err(SpreadError::OutOfRange { field: "buy premium", .. })
        ));
    }

    #[test]
    fn test_into_request() {
        let form = FormInput {
            view: MarketView::Bearish,
            sell_strike: dec!(24000),
            sell_premium: dec!(150),
            buy_premiums: vec![dec!(100), dec!(90), dec!(80), dec!(70)],
            max_loss: dec!(50000),
        };
        let request = form.into_request(&AppConfig::default()).unwrap();
        assert_eq!(request.candidates()[0].strike, dec!(24100));
        assert_eq!(request.candidates()[3].strike, dec!(24250));
    }
}
