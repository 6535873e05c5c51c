use serde::{Deserialize, Serialize};

/// Chronological closing prices, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Self {
        Self { prices }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }
}
