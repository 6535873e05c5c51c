use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::{Config, FallbackMarket};
use crate::exchange::MarketDataSource;
use crate::models::MarketSummary;

const DEFAULT_COIN: &str = "bitcoin";

const COIN_IDS: &[(&str, &str)] = &[
    ("BTC/USD", "bitcoin"),
    ("BTC/USDT", "bitcoin"),
    ("ETH/USD", "ethereum"),
    ("ETH/USDT", "ethereum"),
    ("SOL/USD", "solana"),
    ("SOL/USDT", "solana"),
    ("ADA/USD", "cardano"),
    ("ADA/USDT", "cardano"),
    ("MATIC/USD", "matic-network"),
    ("MATIC/USDT", "matic-network"),
];

#[derive(Debug, Deserialize)]
struct CoinResponse {
    #[serde(default)]
    market_data: Option<RawMarketData>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMarketData {
    #[serde(default)]
    current_price: Option<UsdValue>,
    #[serde(default)]
    price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    market_cap: Option<UsdValue>,
    #[serde(default)]
    total_volume: Option<UsdValue>,
}

#[derive(Debug, Deserialize)]
struct UsdValue {
    #[serde(default)]
    usd: Option<f64>,
}

/// Maps a trading pair to its CoinGecko coin id. Unknown pairs map to bitcoin.
pub fn coin_id(symbol: &str) -> &'static str {
    let upper = symbol.trim().to_uppercase();
    COIN_IDS
        .iter()
        .find(|(pair, _)| *pair == upper)
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_COIN)
}

fn usd(value: &Option<UsdValue>) -> Option<f64> {
    value.as_ref().and_then(|v| v.usd)
}

impl RawMarketData {
    /// Zero or missing price, cap and volume fall back individually.
    fn into_summary(self, fallback: &FallbackMarket) -> MarketSummary {
        let non_zero = |v: Option<f64>| v.filter(|x| *x != 0.0);
        MarketSummary {
            current_price: non_zero(usd(&self.current_price)).unwrap_or(fallback.price),
            price_change_24h: self
                .price_change_percentage_24h
                .unwrap_or(fallback.price_change_24h),
            price_change_7d: self
                .price_change_percentage_7d
                .unwrap_or(fallback.price_change_7d),
            market_cap: non_zero(usd(&self.market_cap)).unwrap_or(fallback.market_cap),
            volume_24h: non_zero(usd(&self.total_volume)).unwrap_or(fallback.volume_24h),
        }
    }
}

/// Parses a `/coins/{id}` document into a summary.
pub fn parse_coin_document(body: &str, fallback: &FallbackMarket) -> Result<MarketSummary> {
    let doc: CoinResponse =
        serde_json::from_str(body).context("Failed to parse coin document")?;
    Ok(doc.market_data.unwrap_or_default().into_summary(fallback))
}

pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
    api_key: String,
    fallback: FallbackMarket,
}

impl CoinGeckoClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: cfg.market_data_url.trim_end_matches('/').to_string(),
            api_key: cfg.crypto_api_key.clone(),
            fallback: cfg.fallback,
        })
    }

    pub async fn fetch_summary(&self, symbol: &str) -> Result<MarketSummary> {
        let coin = coin_id(symbol);
        let url = format!("{}/coins/{}", self.base_url, coin);
        debug!("Fetching market data for {} ({})", symbol, coin);

        let resp = self
            .client
            .get(&url)
            .query(&[("x_cg_demo_api_key", self.api_key.as_str())])
            .send()
            .await
            .context("Failed to fetch market data")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("CoinGecko API error {}: {}", status, body);
        }

        let body = resp.text().await.context("Failed to read market data body")?;
        parse_coin_document(&body, &self.fallback)
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn fetch_summary(&mut self, symbol: &str) -> Result<MarketSummary> {
        CoinGeckoClient::fetch_summary(self, symbol).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pairs_map_case_insensitively() {
        assert_eq!(coin_id("eth/usdt"), "ethereum");
        assert_eq!(coin_id("MATIC/USD"), "matic-network");
        assert_eq!(coin_id("DOGE/USD"), "bitcoin");
    }

    #[test]
    fn parses_full_document() {
        let body = r#"{
            "id": "solana",
            "market_data": {
                "current_price": {"usd": 142.5, "eur": 130.0},
                "price_change_percentage_24h": -1.25,
                "price_change_percentage_7d": 4.5,
                "market_cap": {"usd": 65000000000.0},
                "total_volume": {"usd": 2100000000.0}
            }
        }"#;
        let s = parse_coin_document(body, &FallbackMarket::default()).unwrap();
        assert_eq!(s.current_price, 142.5);
        assert_eq!(s.price_change_24h, -1.25);
        assert_eq!(s.price_change_7d, 4.5);
        assert_eq!(s.market_cap, 65e9);
        assert_eq!(s.volume_24h, 2.1e9);
    }

    #[test]
    fn missing_fields_fall_back_individually() {
        let body = r#"{"market_data": {"current_price": {"usd": 0}, "price_change_percentage_7d": 2.0}}"#;
        let s = parse_coin_document(body, &FallbackMarket::default()).unwrap();
        assert_eq!(s.current_price, 50000.0);
        assert_eq!(s.price_change_24h, 0.0);
        assert_eq!(s.price_change_7d, 2.0);
        assert_eq!(s.market_cap, 1e9);
        assert_eq!(s.volume_24h, 1e7);
    }

    #[test]
    fn document_without_market_data_uses_fallback() {
        let s = parse_coin_document("{}", &FallbackMarket::default()).unwrap();
        assert_eq!(s, FallbackMarket::default().summary());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_coin_document("not json", &FallbackMarket::default()).is_err());
    }
}
