pub mod coingecko;
pub mod paper;
pub mod synthetic;

pub use coingecko::CoinGeckoClient;
pub use paper::{PaperExecutor, PaperMonitor};
pub use synthetic::SyntheticPriceFeed;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{MarketSummary, MonitorRequest, PositionStatus, PriceSnapshot, TradeOutcome, TradeProposal};

/// Source of the market summary consumed by the decision pipeline.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn fetch_summary(&mut self, symbol: &str) -> Result<MarketSummary>;
}

/// Source of a price plus short history for the direct tool path.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_snapshot(&mut self, symbol: &str) -> Result<PriceSnapshot>;
}

/// Order placement backend. A rejected order is `Ok` with `success == false`;
/// `Err` is reserved for transport failures.
#[async_trait]
pub trait TradeExecutor: Send + Sync {
    async fn execute(&mut self, proposal: &TradeProposal) -> Result<TradeOutcome>;
}

#[async_trait]
pub trait PositionMonitor: Send + Sync {
    async fn monitor(&mut self, request: &MonitorRequest) -> Result<PositionStatus>;
}
