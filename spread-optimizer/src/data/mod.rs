pub mod request;
pub mod types;

pub use request::SpreadRequest;
pub use types::{LongCandidate, MarketView, OptionType, ShortLeg};
