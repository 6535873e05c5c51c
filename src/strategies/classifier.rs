use serde::{Deserialize, Serialize};

use crate::models::{Action, Confidence, IndicatorSnapshot, Trend};

/// Minimum number of agreeing signals for a weighted-mode trade.
const MIN_SIGNALS: usize = 4;
/// Signals needed for high confidence in weighted mode.
const HIGH_CONFIDENCE_SIGNALS: usize = 5;

const RSI_MIDLINE: f64 = 50.0;
const RSI_OVERBOUGHT: f64 = 80.0;
const RSI_OVERSOLD: f64 = 20.0;

/// Everything a classifier may look at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierInput {
    pub price: f64,
    pub indicators: IndicatorSnapshot,
    /// 7d percent change, only known when indicators come from a market summary.
    pub price_change_7d: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalCounts {
    pub bullish: usize,
    pub bearish: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub trend: Trend,
    pub action: Action,
    /// Absent in direct-indicator mode.
    pub confidence: Option<Confidence>,
    /// Only populated in weighted-signal mode.
    pub counts: Option<SignalCounts>,
}

/// Strategy selector. Direct mode is used when indicators were computed from
/// a real price series, weighted mode when they were approximated from a
/// market summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalClassifier {
    DirectIndicator,
    WeightedSignal,
}

impl SignalClassifier {
    pub fn classify(&self, input: &ClassifierInput) -> Classification {
        match self {
            SignalClassifier::DirectIndicator => classify_direct(input),
            SignalClassifier::WeightedSignal => classify_weighted(input),
        }
    }
}

/// Uptrend only when price is above both EMAs, RSI is above the midline and
/// the MACD histogram is positive; downtrend when all four are reversed.
fn classify_direct(input: &ClassifierInput) -> Classification {
    let ind = &input.indicators;
    let above_ema50 = input.price > ind.ema50;
    let above_ema200 = input.price > ind.ema200;
    let strong_rsi = ind.rsi > RSI_MIDLINE;
    let positive_macd = ind.macd.histogram > 0.0;

    let trend = if above_ema50 && above_ema200 && strong_rsi && positive_macd {
        Trend::Uptrend
    } else if !above_ema50 && !above_ema200 && !strong_rsi && !positive_macd {
        Trend::Downtrend
    } else {
        Trend::Sideways
    };

    let action = match trend {
        Trend::Uptrend => Action::Buy,
        Trend::Downtrend => Action::Sell,
        Trend::Sideways => Action::Hold,
    };

    Classification {
        trend,
        action,
        confidence: None,
        counts: None,
    }
}

pub fn bullish_checks(input: &ClassifierInput) -> [bool; 6] {
    let ind = &input.indicators;
    let change_7d = input.price_change_7d.unwrap_or(0.0);
    [
        input.price > ind.ema50,
        input.price > ind.ema200,
        ind.ema50 > ind.ema200,
        ind.rsi > RSI_MIDLINE && ind.rsi < RSI_OVERBOUGHT,
        ind.macd.histogram > 0.0,
        change_7d > 0.0,
    ]
}

pub fn bearish_checks(input: &ClassifierInput) -> [bool; 6] {
    let ind = &input.indicators;
    let change_7d = input.price_change_7d.unwrap_or(0.0);
    [
        input.price < ind.ema50,
        input.price < ind.ema200,
        ind.ema50 < ind.ema200,
        ind.rsi < RSI_MIDLINE && ind.rsi > RSI_OVERSOLD,
        ind.macd.histogram < 0.0,
        change_7d < 0.0,
    ]
}

pub fn count_signals(input: &ClassifierInput) -> SignalCounts {
    SignalCounts {
        bullish: bullish_checks(input).iter().filter(|&&b| b).count(),
        bearish: bearish_checks(input).iter().filter(|&&b| b).count(),
    }
}

/// Bullish is evaluated first, so it wins if both sides reach the threshold.
fn classify_weighted(input: &ClassifierInput) -> Classification {
    let counts = count_signals(input);

    let (trend, action, confidence) = if counts.bullish >= MIN_SIGNALS {
        (Trend::Uptrend, Action::Buy, confidence_for(counts.bullish))
    } else if counts.bearish >= MIN_SIGNALS {
        (Trend::Downtrend, Action::Sell, confidence_for(counts.bearish))
    } else {
        (Trend::Sideways, Action::Hold, Confidence::Low)
    };

    Classification {
        trend,
        action,
        confidence: Some(confidence),
        counts: Some(counts),
    }
}

fn confidence_for(signals: usize) -> Confidence {
    if signals >= HIGH_CONFIDENCE_SIGNALS {
        Confidence::High
    } else {
        Confidence::Medium
    }
}
