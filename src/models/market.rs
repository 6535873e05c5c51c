use serde::{Deserialize, Serialize};

use crate::models::PriceSeries;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Macd {
    pub macd_line: f64,
    pub signal_line: f64,
    pub histogram: f64,
}

impl Macd {
    /// Builds the triple with `histogram = macd_line - signal_line`.
    pub fn from_lines(macd_line: f64, signal_line: f64) -> Self {
        Self {
            macd_line,
            signal_line,
            histogram: macd_line - signal_line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub ema50: f64,
    pub ema200: f64,
    pub rsi: f64,
    pub macd: Macd,
}

/// Condensed market state as reported by the market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub current_price: f64,
    /// Percent, e.g. 2.5 for +2.5%.
    pub price_change_24h: f64,
    pub price_change_7d: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
}

/// Price plus the short history the direct tool path derives its indicators from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub symbol: String,
    pub price: f64,
    pub timestamp: i64,
    pub series: PriceSeries,
}
