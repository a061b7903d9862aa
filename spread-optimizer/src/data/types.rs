//! Core data types for spread evaluation.
//!
//! A vertical spread here is one sold option (the short leg) hedged by one
//! bought option further out of the money (the long candidate). Strikes and
//! premiums are exact decimals so that 2-decimal premiums never pick up
//! binary rounding noise.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SpreadError;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "CALL",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directional view that decides which side gets sold and hedged.
///
/// A bullish trader sells puts and buys lower puts as protection; a bearish
/// trader sells calls and buys higher calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketView {
    Bullish,
    Bearish,
}

impl MarketView {
    /// The option type traded on both legs for this view.
    pub fn option_type(&self) -> OptionType {
        match self {
            Self::Bullish => OptionType::Put,
            Self::Bearish => OptionType::Call,
        }
    }

    /// Sign of the strike offset from the short leg towards protection.
    pub fn direction(&self) -> Decimal {
        match self {
            Self::Bullish => Decimal::NEGATIVE_ONE,
            Self::Bearish => Decimal::ONE,
        }
    }
}

impl FromStr for MarketView {
    type Err = SpreadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "bullish" | "bull" => Ok(Self::Bullish),
            "short" | "bearish" | "bear" => Ok(Self::Bearish),
            other => Err(SpreadError::invalid(format!(
                "unknown market view '{other}' (expected long or short)"
            ))),
        }
    }
}

impl fmt::Display for MarketView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullish => f.write_str("Long"),
            Self::Bearish => f.write_str("Short"),
        }
    }
}

/// The option sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLeg {
    /// Strike price
    pub strike: Decimal,

    /// Premium received per unit
    pub premium: Decimal,
}

impl ShortLeg {
    pub fn new(strike: Decimal, premium: Decimal) -> Self {
        Self { strike, premium }
    }
}

/// One option that could be bought to cap the short leg's risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongCandidate {
    /// Strike price
    pub strike: Decimal,

    /// Premium paid per unit
    pub premium: Decimal,
}

impl LongCandidate {
    pub fn new(strike: Decimal, premium: Decimal) -> Self {
        Self { strike, premium }
    }
}
