//! Direct analyze/buy/sell entry point. Unlike the decision pipeline it
//! computes real indicators from a price series and classifies them with the
//! direct-indicator strategy, recording a position only when asked to.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::indicators;
use crate::core::risk::RiskSizer;
use crate::exchange::PriceFeed;
use crate::models::{
    Action, IndicatorSnapshot, PositionType, PriceSnapshot, ToolAction, TradeSide, Trend,
};
use crate::strategies::classifier::{ClassifierInput, SignalClassifier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRequest {
    pub symbol: String,
    pub action: ToolAction,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub take_profit: Option<f64>,
}

impl ToolRequest {
    pub fn analyze(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            action: ToolAction::Analyze,
            amount: None,
            stop_loss: None,
            take_profit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPosition {
    #[serde(rename = "type")]
    pub kind: PositionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl ToolPosition {
    pub fn none() -> Self {
        Self {
            kind: PositionType::None,
            entry_price: None,
            stop_loss: None,
            take_profit: None,
            size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub symbol: String,
    pub trend: Trend,
    pub price: f64,
    pub indicators: IndicatorSnapshot,
    pub position: ToolPosition,
}

pub struct MarketTool {
    feed: Box<dyn PriceFeed>,
    risk: RiskSizer,
}

impl MarketTool {
    pub fn new(feed: Box<dyn PriceFeed>, risk: RiskSizer) -> Self {
        Self { feed, risk }
    }

    pub async fn run(&mut self, request: &ToolRequest) -> Result<ToolResponse> {
        let snapshot = self
            .feed
            .fetch_snapshot(&request.symbol)
            .await
            .with_context(|| format!("Failed to fetch prices for {}", request.symbol))?;
        let response = self.evaluate(request, &snapshot)?;

        info!(
            "{} {}: {} @ ${:.2} position={}",
            request.action, response.symbol, response.trend, response.price, response.position.kind
        );
        Ok(response)
    }

    /// Indicators, trend and optional position for an already fetched snapshot.
    pub fn evaluate(&self, request: &ToolRequest, snapshot: &PriceSnapshot) -> Result<ToolResponse> {
        let indicators = indicators::snapshot(snapshot.series.as_slice())
            .with_context(|| {
                format!(
                    "Not enough price history for {} ({} samples)",
                    snapshot.symbol,
                    snapshot.series.len()
                )
            })?;

        let classification = SignalClassifier::DirectIndicator.classify(&ClassifierInput {
            price: snapshot.price,
            indicators,
            price_change_7d: None,
        });

        let position = match request.action.to_side() {
            Some(side) => self.open_position(side, snapshot.price, request),
            None => ToolPosition::none(),
        };

        Ok(ToolResponse {
            symbol: snapshot.symbol.clone(),
            trend: classification.trend,
            price: snapshot.price,
            indicators,
            position,
        })
    }

    /// A missing or zero amount records nothing.
    fn open_position(&self, side: TradeSide, price: f64, request: &ToolRequest) -> ToolPosition {
        let size = match request.amount.filter(|a| *a != 0.0) {
            Some(a) => a,
            None => return ToolPosition::none(),
        };

        let action = match side {
            TradeSide::Buy => Action::Buy,
            TradeSide::Sell => Action::Sell,
        };
        let levels =
            self.risk
                .levels_with_overrides(action, price, request.stop_loss, request.take_profit);

        ToolPosition {
            kind: side.as_position_type(),
            entry_price: Some(price),
            stop_loss: Some(levels.stop_loss),
            take_profit: Some(levels.take_profit),
            size: Some(size),
        }
    }
}
