use serde::{Deserialize, Serialize};

use crate::models::{
    Action, Confidence, FinalStatus, MonitorAction, PositionState, Timeframe, TradeSide, Trend,
};

/// Input of one workflow run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowInput {
    pub symbol: String,
    #[serde(default)]
    pub timeframe: Option<Timeframe>,
    /// Capital available for sizing, in quote currency.
    #[serde(default)]
    pub portfolio: Option<f64>,
}

impl WorkflowInput {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            timeframe: None,
            portfolio: None,
        }
    }
}

/// Output of the Analyze stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSignal {
    pub symbol: String,
    pub trend: Trend,
    pub confidence: Confidence,
    pub action: Action,
    pub price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    /// Fraction of available capital, in (0, 1].
    pub position_size: f64,
}

/// Diagnostic detail produced alongside a `MarketSignal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalAnalysis {
    pub bullish_signals: usize,
    pub bearish_signals: usize,
    pub rsi: f64,
    /// "bullish" when the MACD histogram is positive, else "bearish".
    pub macd_signal: String,
    pub price_change_24h: f64,
    pub price_change_7d: f64,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeProposal {
    pub symbol: String,
    pub action: TradeSide,
    pub price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub position_size: f64,
}

impl TradeProposal {
    /// Long: stop < price < target. Short: target < price < stop.
    pub fn levels_are_ordered(&self) -> bool {
        match self.action {
            TradeSide::Buy => self.stop_loss < self.price && self.price < self.take_profit,
            TradeSide::Sell => self.take_profit < self.price && self.price < self.stop_loss,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TradeOutcome {
    pub fn filled(order_id: String) -> Self {
        Self {
            success: true,
            order_id: Some(order_id),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            error: Some(error.into()),
        }
    }
}

/// What the monitoring collaborator is asked to watch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorRequest {
    pub symbol: String,
    pub order_id: String,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionStatus {
    pub status: PositionState,
    pub current_price: f64,
    #[serde(rename = "unrealizedPnL")]
    pub unrealized_pnl: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MonitorAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_stop_loss: Option<f64>,
}

/// State carried between the Decide, Execute and Monitor stages.
/// Stages only fill in later fields, never rewrite earlier ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingDecision {
    pub tradeable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_details: Option<TradeProposal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_result: Option<TradeOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_result: Option<PositionStatus>,
}

impl TradingDecision {
    pub fn no_trade() -> Self {
        Self::default()
    }

    pub fn trade(details: TradeProposal) -> Self {
        Self {
            tradeable: true,
            trade_details: Some(details),
            trade_result: None,
            monitor_result: None,
        }
    }

    pub fn execution_succeeded(&self) -> bool {
        self.trade_result.as_ref().is_some_and(|r| r.success)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    pub status: FinalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionStatus>,
}
