use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::config::{Config, FallbackMarket};
use crate::exchange::{MarketDataSource, PriceFeed, TradeExecutor};
use crate::models::{MarketSummary, PriceSeries, PriceSnapshot, TradeOutcome, TradeProposal};

/// Reference defaults with an empty API key. Never reads the environment.
pub fn default_test_config() -> Config {
    Config {
        crypto_api_key: String::new(),
        fallback: FallbackMarket::default(),
        ..Config::default()
    }
}

/// Market source that always returns the same summary.
pub struct FixedMarket {
    pub summary: MarketSummary,
}

impl FixedMarket {
    pub fn new(price: f64, change_24h: f64, change_7d: f64) -> Self {
        Self {
            summary: MarketSummary {
                current_price: price,
                price_change_24h: change_24h,
                price_change_7d: change_7d,
                market_cap: 1e9,
                volume_24h: 1e7,
            },
        }
    }
}

#[async_trait]
impl MarketDataSource for FixedMarket {
    async fn fetch_summary(&mut self, _symbol: &str) -> Result<MarketSummary> {
        Ok(self.summary)
    }
}

/// Market source that is always unreachable.
pub struct FailingMarket;

#[async_trait]
impl MarketDataSource for FailingMarket {
    async fn fetch_summary(&mut self, symbol: &str) -> Result<MarketSummary> {
        bail!("connection refused for {}", symbol)
    }
}

/// Executor that fills with a fixed order id.
#[derive(Default)]
pub struct StubExecutor {
    pub calls: usize,
}

#[async_trait]
impl TradeExecutor for StubExecutor {
    async fn execute(&mut self, _proposal: &TradeProposal) -> Result<TradeOutcome> {
        self.calls += 1;
        Ok(TradeOutcome::filled("order-test".to_string()))
    }
}

/// Executor that rejects every order with the given message.
pub struct RejectingExecutor {
    error: String,
}

impl RejectingExecutor {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[async_trait]
impl TradeExecutor for RejectingExecutor {
    async fn execute(&mut self, _proposal: &TradeProposal) -> Result<TradeOutcome> {
        Ok(TradeOutcome::rejected(self.error.clone()))
    }
}

/// Price feed returning a flat 26-sample history at `price`.
pub struct FixedFeed {
    price: f64,
}

impl FixedFeed {
    pub fn flat(price: f64) -> Self {
        Self { price }
    }
}

#[async_trait]
impl PriceFeed for FixedFeed {
    async fn fetch_snapshot(&mut self, symbol: &str) -> Result<PriceSnapshot> {
        Ok(PriceSnapshot {
            symbol: symbol.to_string(),
            price: self.price,
            timestamp: 0,
            series: PriceSeries::new(vec![self.price; 26]),
        })
    }
}
