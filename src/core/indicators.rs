//! Trend-following indicators over a chronological price slice.
//!
//! Every function returns only the final value after consuming the whole
//! series, not a full indicator series. All functions are pure.

use crate::error::IndicatorError;
use crate::models::{IndicatorSnapshot, Macd};

pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const EMA_SHORT: usize = 50;
pub const EMA_LONG: usize = 200;

/// Exponential moving average seeded with the first sample.
pub fn compute_ema(prices: &[f64], period: usize) -> Result<f64, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod(period));
    }
    let (&seed, rest) = prices
        .split_first()
        .ok_or(IndicatorError::InsufficientData { needed: 1, got: 0 })?;

    let multiplier = 2.0 / (period as f64 + 1.0);
    let ema = rest
        .iter()
        .fold(seed, |ema, &price| (price - ema) * multiplier + ema);
    Ok(ema)
}

/// Relative strength index over the whole series.
///
/// Gains and losses are summed across every consecutive difference and
/// divided by `period` (not by the number of differences). With no losses
/// the relative strength is infinite and the result saturates at 100.
pub fn compute_rsi(prices: &[f64], period: usize) -> Result<f64, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod(period));
    }
    if prices.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            needed: 2,
            got: prices.len(),
        });
    }

    let (gains, losses) = prices
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0, 0.0), |(g, l), diff| {
            if diff >= 0.0 {
                (g + diff, l)
            } else {
                (g, l - diff)
            }
        });

    let average_gain = gains / period as f64;
    let average_loss = losses / period as f64;
    if average_loss == 0.0 {
        return Ok(100.0);
    }

    let relative_strength = average_gain / average_loss;
    Ok(clamp_rsi(100.0 - 100.0 / (1.0 + relative_strength)))
}

/// MACD(12, 26) with a 9-period signal line.
///
/// The signal line is the EMA of the single-element series `[macd_line]`,
/// which is `macd_line` itself, so the histogram is always zero. There is no
/// smoothing over MACD history.
pub fn compute_macd(prices: &[f64]) -> Result<Macd, IndicatorError> {
    if prices.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            needed: 2,
            got: prices.len(),
        });
    }
    let ema_fast = compute_ema(prices, MACD_FAST)?;
    let ema_slow = compute_ema(prices, MACD_SLOW)?;
    let macd_line = ema_fast - ema_slow;
    let signal_line = compute_ema(&[macd_line], MACD_SIGNAL)?;
    Ok(Macd::from_lines(macd_line, signal_line))
}

/// Full indicator set used by the direct classifier.
pub fn snapshot(prices: &[f64]) -> Result<IndicatorSnapshot, IndicatorError> {
    Ok(IndicatorSnapshot {
        ema50: compute_ema(prices, EMA_SHORT)?,
        ema200: compute_ema(prices, EMA_LONG)?,
        rsi: compute_rsi(prices, RSI_PERIOD)?,
        macd: compute_macd(prices)?,
    })
}

pub fn clamp_rsi(rsi: f64) -> f64 {
    rsi.clamp(0.0, 100.0)
}
