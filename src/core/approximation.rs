//! Indicator estimates derived from a market summary alone.
//!
//! The summary has no price history, so EMA, RSI and MACD are approximated
//! from the 24h and 7d percent changes. These are coarse stand-ins for real
//! technical analysis and must stay formula-compatible with existing signals.

use crate::core::indicators::clamp_rsi;
use crate::models::{IndicatorSnapshot, Macd, MarketSummary};

const EMA50_WEIGHT: f64 = 0.3;
const EMA200_WEIGHT: f64 = 0.1;
const SIGNAL_LINE_RATIO: f64 = 0.8;

pub fn approximate_indicators(summary: &MarketSummary) -> IndicatorSnapshot {
    let price = summary.current_price;
    let change_7d = summary.price_change_7d / 100.0;

    let ema50 = price * (1.0 + change_7d * EMA50_WEIGHT);
    let ema200 = price * (1.0 + change_7d * EMA200_WEIGHT);

    let macd_line = (price - ema50) / price * 100.0;
    let signal_line = macd_line * SIGNAL_LINE_RATIO;

    IndicatorSnapshot {
        ema50,
        ema200,
        rsi: approximate_rsi(summary.price_change_24h),
        macd: Macd::from_lines(macd_line, signal_line),
    }
}

/// Stepwise RSI estimate from the 24h percent change.
pub fn approximate_rsi(price_change_24h: f64) -> f64 {
    let rsi = if price_change_24h > 5.0 {
        70.0
    } else if price_change_24h > 0.0 {
        55.0 + price_change_24h * 2.0
    } else if price_change_24h < -5.0 {
        30.0
    } else {
        45.0 + price_change_24h
    };
    clamp_rsi(rsi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(price: f64, d24: f64, d7: f64) -> MarketSummary {
        MarketSummary {
            current_price: price,
            price_change_24h: d24,
            price_change_7d: d7,
            market_cap: 1e9,
            volume_24h: 1e7,
        }
    }

    #[test]
    fn rsi_branches() {
        assert_eq!(approximate_rsi(6.0), 70.0);
        assert_eq!(approximate_rsi(5.0), 65.0);
        assert_eq!(approximate_rsi(2.0), 59.0);
        assert_eq!(approximate_rsi(0.0), 45.0);
        assert_eq!(approximate_rsi(-3.0), 42.0);
        assert_eq!(approximate_rsi(-5.0), 40.0);
        assert_eq!(approximate_rsi(-12.0), 30.0);
    }

    #[test]
    fn strong_week_lifts_emas_above_price() {
        let ind = approximate_indicators(&summary(50000.0, 6.0, 8.0));
        assert!((ind.ema50 - 51200.0).abs() < 1e-6);
        assert!((ind.ema200 - 50400.0).abs() < 1e-6);
        assert_eq!(ind.rsi, 70.0);
        assert!((ind.macd.macd_line + 2.4).abs() < 1e-9);
        assert!((ind.macd.signal_line + 1.92).abs() < 1e-9);
        assert!((ind.macd.histogram + 0.48).abs() < 1e-9);
    }

    #[test]
    fn histogram_is_line_minus_signal() {
        for d7 in [-20.0, -1.0, 0.0, 3.0, 15.0] {
            let m = approximate_indicators(&summary(1234.5, 1.0, d7)).macd;
            assert_eq!(m.histogram, m.macd_line - m.signal_line);
        }
    }

    #[test]
    fn flat_week_collapses_to_price() {
        let ind = approximate_indicators(&summary(100.0, 0.0, 0.0));
        assert_eq!(ind.ema50, 100.0);
        assert_eq!(ind.ema200, 100.0);
        assert_eq!(ind.macd.histogram, 0.0);
    }
}
