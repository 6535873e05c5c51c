pub mod market;
pub mod price_series;
pub mod signal;
pub mod timeframe;
pub mod trade;

pub use market::{IndicatorSnapshot, Macd, MarketSummary, PriceSnapshot};
pub use price_series::PriceSeries;
pub use signal::*;
pub use timeframe::Timeframe;
pub use trade::*;
