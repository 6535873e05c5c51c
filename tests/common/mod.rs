use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use trend_signal_bot::exchange::{MarketDataSource, PositionMonitor, TradeExecutor};
use trend_signal_bot::models::{
    MarketSummary, MonitorAction, MonitorRequest, PositionState, PositionStatus, TradeOutcome,
    TradeProposal,
};

pub fn summary(price: f64, change_24h: f64, change_7d: f64) -> MarketSummary {
    MarketSummary {
        current_price: price,
        price_change_24h: change_24h,
        price_change_7d: change_7d,
        market_cap: 1e9,
        volume_24h: 1e7,
    }
}

/// Market source returning canned summaries.
pub struct MockMarket {
    pub summary: Option<MarketSummary>,
}

#[async_trait]
impl MarketDataSource for MockMarket {
    async fn fetch_summary(&mut self, symbol: &str) -> Result<MarketSummary> {
        match self.summary {
            Some(s) => Ok(s),
            None => bail!("HTTP error! status: 503 for {}", symbol),
        }
    }
}

pub enum ExecBehaviour {
    Fill,
    Reject(&'static str),
    Unreachable,
}

/// Executor recording every proposal it receives.
pub struct MockExecutor {
    pub behaviour: ExecBehaviour,
    pub received: Arc<Mutex<Vec<TradeProposal>>>,
}

impl MockExecutor {
    pub fn new(behaviour: ExecBehaviour) -> (Self, Arc<Mutex<Vec<TradeProposal>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                behaviour,
                received: received.clone(),
            },
            received,
        )
    }
}

#[async_trait]
impl TradeExecutor for MockExecutor {
    async fn execute(&mut self, proposal: &TradeProposal) -> Result<TradeOutcome> {
        self.received.lock().unwrap().push(proposal.clone());
        match self.behaviour {
            ExecBehaviour::Fill => Ok(TradeOutcome::filled("order-42".to_string())),
            ExecBehaviour::Reject(msg) => Ok(TradeOutcome::rejected(msg)),
            ExecBehaviour::Unreachable => bail!("exchange timeout"),
        }
    }
}

/// Monitor recording every request and reporting a tightened stop.
pub struct MockMonitor {
    pub requests: Arc<Mutex<Vec<MonitorRequest>>>,
}

impl MockMonitor {
    pub fn new() -> (Self, Arc<Mutex<Vec<MonitorRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                requests: requests.clone(),
            },
            requests,
        )
    }
}

#[async_trait]
impl PositionMonitor for MockMonitor {
    async fn monitor(&mut self, request: &MonitorRequest) -> Result<PositionStatus> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(PositionStatus {
            status: PositionState::Open,
            current_price: request.entry_price,
            unrealized_pnl: 0.0,
            action: Some(MonitorAction::AdjustStopLoss),
            new_stop_loss: Some(request.entry_price),
        })
    }
}

/// Monitor whose backend is always down.
pub struct FailingMonitor;

#[async_trait]
impl PositionMonitor for FailingMonitor {
    async fn monitor(&mut self, request: &MonitorRequest) -> Result<PositionStatus> {
        bail!("position service unavailable for {}", request.order_id)
    }
}
