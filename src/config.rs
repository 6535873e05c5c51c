use serde::{Deserialize, Serialize};

use crate::core::risk::{DEFAULT_STOP_LOSS_PCT, DEFAULT_TAKE_PROFIT_PCT};
use crate::models::{MarketSummary, Timeframe};

/// Values used when the market-data provider cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackMarket {
    pub price: f64,
    pub price_change_24h: f64,
    pub price_change_7d: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
}

impl Default for FallbackMarket {
    fn default() -> Self {
        Self {
            price: 50000.0,
            price_change_24h: 0.0,
            price_change_7d: 0.0,
            market_cap: 1_000_000_000.0,
            volume_24h: 10_000_000.0,
        }
    }
}

impl FallbackMarket {
    pub fn summary(&self) -> MarketSummary {
        MarketSummary {
            current_price: self.price,
            price_change_24h: self.price_change_24h,
            price_change_7d: self.price_change_7d,
            market_cap: self.market_cap,
            volume_24h: self.volume_24h,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Workflow input
    pub symbol: String,
    pub timeframe: Option<Timeframe>,
    pub portfolio: Option<f64>,

    // Market data
    pub market_data_url: String,
    pub crypto_api_key: String,
    pub request_timeout_secs: u64,
    pub fallback: FallbackMarket,

    // Risk (as fraction, e.g., 0.05 = 5%)
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: "BTC/USD".to_string(),
            timeframe: None,
            portfolio: None,
            market_data_url: "https://api.coingecko.com/api/v3".to_string(),
            crypto_api_key: "CG-demo-api-key".to_string(),
            request_timeout_secs: 10,
            fallback: FallbackMarket::default(),
            stop_loss_pct: DEFAULT_STOP_LOSS_PCT,
            take_profit_pct: DEFAULT_TAKE_PROFIT_PCT,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str| -> Option<String> {
            std::env::var(key).ok().filter(|v| !v.trim().is_empty())
        };
        let num = |key: &str, default: f64| -> f64 {
            env(key).and_then(|v| v.parse().ok()).unwrap_or(default)
        };

        let defaults = Config::default();
        let fb = defaults.fallback;

        Config {
            symbol: env("SYMBOL").unwrap_or(defaults.symbol),
            timeframe: env("TIMEFRAME").and_then(|v| Timeframe::from_str_loose(&v)),
            portfolio: env("PORTFOLIO").and_then(|v| v.parse().ok()),
            market_data_url: env("MARKET_DATA_URL").unwrap_or(defaults.market_data_url),
            crypto_api_key: env("CRYPTO_API_KEY").unwrap_or(defaults.crypto_api_key),
            request_timeout_secs: env("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            fallback: FallbackMarket {
                price: num("FALLBACK_PRICE", fb.price),
                price_change_24h: num("FALLBACK_CHANGE_24H", fb.price_change_24h),
                price_change_7d: num("FALLBACK_CHANGE_7D", fb.price_change_7d),
                market_cap: num("FALLBACK_MARKET_CAP", fb.market_cap),
                volume_24h: num("FALLBACK_VOLUME_24H", fb.volume_24h),
            },
            stop_loss_pct: num("STOP_LOSS_PCT", defaults.stop_loss_pct),
            take_profit_pct: num("TAKE_PROFIT_PCT", defaults.take_profit_pct),
            log_level: env("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}
