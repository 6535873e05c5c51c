use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::exchange::PriceFeed;
use crate::models::{PriceSeries, PriceSnapshot};

const SERIES_LEN: usize = 26;
const MAX_PRICE: f64 = 1000.0;
const JITTER: f64 = 5.0;

/// Synthetic feed: a reference price drawn in [0, 1000)
/// and `SERIES_LEN` samples jittered by up to ±5 around it.
pub struct SyntheticPriceFeed {
    rng: StdRng,
}

impl SyntheticPriceFeed {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic feed for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, symbol: &str) -> PriceSnapshot {
        let price = self.rng.gen_range(0.0..MAX_PRICE);
        let samples: Vec<f64> = (0..SERIES_LEN)
            .map(|_| price + self.rng.gen_range(-JITTER..JITTER))
            .collect();

        PriceSnapshot {
            symbol: symbol.to_string(),
            price,
            timestamp: Utc::now().timestamp_millis(),
            series: PriceSeries::new(samples),
        }
    }
}

impl Default for SyntheticPriceFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceFeed for SyntheticPriceFeed {
    async fn fetch_snapshot(&mut self, symbol: &str) -> Result<PriceSnapshot> {
        Ok(self.generate(symbol))
    }
}
