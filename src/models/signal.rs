use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Uptrend,
    Downtrend,
    Sideways,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Uptrend => write!(f, "uptrend"),
            Trend::Downtrend => write!(f, "downtrend"),
            Trend::Sideways => write!(f, "sideways"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "buy"),
            Action::Sell => write!(f, "sell"),
            Action::Hold => write!(f, "hold"),
        }
    }
}

impl Action {
    pub fn to_side(self) -> Option<TradeSide> {
        match self {
            Action::Buy => Some(TradeSide::Buy),
            Action::Sell => Some(TradeSide::Sell),
            Action::Hold => None,
        }
    }
}

/// The two actions that actually place an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "buy"),
            TradeSide::Sell => write!(f, "sell"),
        }
    }
}

impl TradeSide {
    pub fn as_position_type(self) -> PositionType {
        match self {
            TradeSide::Buy => PositionType::Long,
            TradeSide::Sell => PositionType::Short,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionType {
    None,
    Long,
    Short,
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionType::None => write!(f, "none"),
            PositionType::Long => write!(f, "long"),
            PositionType::Short => write!(f, "short"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionState {
    Open,
    Closed,
    PartiallyClosed,
}

impl fmt::Display for PositionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionState::Open => write!(f, "open"),
            PositionState::Closed => write!(f, "closed"),
            PositionState::PartiallyClosed => write!(f, "partially_closed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorAction {
    Hold,
    Close,
    AdjustStopLoss,
}

impl fmt::Display for MonitorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorAction::Hold => write!(f, "hold"),
            MonitorAction::Close => write!(f, "close"),
            MonitorAction::AdjustStopLoss => write!(f, "adjust_stop_loss"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalStatus {
    Success,
    NoTrade,
    Failed,
}

impl fmt::Display for FinalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalStatus::Success => write!(f, "success"),
            FinalStatus::NoTrade => write!(f, "no_trade"),
            FinalStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Direct tool request kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolAction {
    Analyze,
    Buy,
    Sell,
}

impl fmt::Display for ToolAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolAction::Analyze => write!(f, "analyze"),
            ToolAction::Buy => write!(f, "buy"),
            ToolAction::Sell => write!(f, "sell"),
        }
    }
}

impl ToolAction {
    pub fn to_side(self) -> Option<TradeSide> {
        match self {
            ToolAction::Analyze => None,
            ToolAction::Buy => Some(TradeSide::Buy),
            ToolAction::Sell => Some(TradeSide::Sell),
        }
    }

    pub fn from_str_loose(s: &str) -> Option<ToolAction> {
        match s.to_lowercase().as_str() {
            "analyze" => Some(ToolAction::Analyze),
            "buy" => Some(ToolAction::Buy),
            "sell" => Some(ToolAction::Sell),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_wire_format() {
        assert_eq!(serde_json::to_string(&Trend::Uptrend).unwrap(), "\"uptrend\"");
        assert_eq!(
            serde_json::to_string(&PositionState::PartiallyClosed).unwrap(),
            "\"partially_closed\""
        );
        assert_eq!(
            serde_json::to_string(&MonitorAction::AdjustStopLoss).unwrap(),
            "\"adjust_stop_loss\""
        );
        assert_eq!(serde_json::to_string(&FinalStatus::NoTrade).unwrap(), "\"no_trade\"");
    }

    #[test]
    fn hold_has_no_side() {
        assert_eq!(Action::Hold.to_side(), None);
        assert_eq!(Action::Buy.to_side(), Some(TradeSide::Buy));
        assert_eq!(TradeSide::Sell.as_position_type(), PositionType::Short);
    }

    #[test]
    fn tool_action_parses_loosely() {
        assert_eq!(ToolAction::from_str_loose("BUY"), Some(ToolAction::Buy));
        assert_eq!(ToolAction::from_str_loose("hodl"), None);
    }
}
