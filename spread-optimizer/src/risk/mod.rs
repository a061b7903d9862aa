//! Risk module.
//!
//! Provides:
//! - Lot sizing against a maximum loss budget

pub mod position_sizer;

pub use position_sizer::{LotSizer, LotSizerConfig, LotSizing};
