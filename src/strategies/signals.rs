use crate::core::approximation::approximate_indicators;
use crate::core::risk::RiskSizer;
use crate::models::{Confidence, MarketSignal, MarketSummary, SignalAnalysis};
use crate::strategies::classifier::{ClassifierInput, SignalClassifier};

/// Turns a market summary into a weighted-mode `MarketSignal` with its
/// stop, target and position size.
pub fn signal_from_summary(
    symbol: &str,
    summary: &MarketSummary,
    risk: &RiskSizer,
) -> (MarketSignal, SignalAnalysis) {
    let indicators = approximate_indicators(summary);
    let price = summary.current_price;

    let input = ClassifierInput {
        price,
        indicators,
        price_change_7d: Some(summary.price_change_7d),
    };
    let classification = SignalClassifier::WeightedSignal.classify(&input);
    let confidence = classification.confidence.unwrap_or(Confidence::Low);
    let counts = classification.counts.unwrap_or_default();

    let levels = risk.levels(classification.action, price);

    let signal = MarketSignal {
        symbol: symbol.to_string(),
        trend: classification.trend,
        confidence,
        action: classification.action,
        price,
        stop_loss: levels.stop_loss,
        take_profit: levels.take_profit,
        position_size: RiskSizer::position_size(confidence),
    };

    let macd_signal = if indicators.macd.histogram > 0.0 {
        "bullish"
    } else {
        "bearish"
    };

    let analysis = SignalAnalysis {
        bullish_signals: counts.bullish,
        bearish_signals: counts.bearish,
        rsi: indicators.rsi,
        macd_signal: macd_signal.to_string(),
        price_change_24h: summary.price_change_24h,
        price_change_7d: summary.price_change_7d,
        recommendation: format!(
            "{} signal with {} confidence. Price: ${:.2}, RSI: {:.1}, Trend: {}",
            signal.action.to_string().to_uppercase(),
            confidence,
            price,
            indicators.rsi,
            signal.trend
        ),
    };

    (signal, analysis)
}
