use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::exchange::{PositionMonitor, TradeExecutor};
use crate::models::{
    MonitorAction, MonitorRequest, PositionState, PositionStatus, TradeOutcome, TradeProposal,
};

/// Simulated move reported by the paper monitor (+1%).
const PAPER_DRIFT: f64 = 0.01;

/// Fills every order immediately. Order ids are `order-{millis}-{seq}`, the
/// sequence keeping ids unique within the same millisecond.
#[derive(Debug, Default)]
pub struct PaperExecutor {
    seq: u64,
}

impl PaperExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_order_id(&mut self) -> String {
        self.seq += 1;
        format!("order-{}-{}", Utc::now().timestamp_millis(), self.seq)
    }
}

#[async_trait]
impl TradeExecutor for PaperExecutor {
    async fn execute(&mut self, proposal: &TradeProposal) -> Result<TradeOutcome> {
        let order_id = self.next_order_id();
        info!(
            "PAPER {} {} @ ${:.2} size {:.0}% -> {}",
            proposal.action,
            proposal.symbol,
            proposal.price,
            proposal.position_size * 100.0,
            order_id
        );
        Ok(TradeOutcome::filled(order_id))
    }
}

/// Reports every position as open, 1% in profit, with a hold recommendation.
#[derive(Debug, Default)]
pub struct PaperMonitor;

impl PaperMonitor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PositionMonitor for PaperMonitor {
    async fn monitor(&mut self, request: &MonitorRequest) -> Result<PositionStatus> {
        Ok(PositionStatus {
            status: PositionState::Open,
            current_price: request.entry_price * (1.0 + PAPER_DRIFT),
            unrealized_pnl: request.entry_price * PAPER_DRIFT,
            action: Some(MonitorAction::Hold),
            new_stop_loss: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeSide;

    fn proposal() -> TradeProposal {
        TradeProposal {
            symbol: "BTC/USD".to_string(),
            action: TradeSide::Buy,
            price: 200.0,
            stop_loss: 190.0,
            take_profit: 220.0,
            position_size: 0.8,
        }
    }

    #[tokio::test]
    async fn executor_fills_with_order_id() {
        let mut exec = PaperExecutor::new();
        let outcome = exec.execute(&proposal()).await.unwrap();
        assert!(outcome.success);
        assert!(outcome.order_id.as_deref().unwrap().starts_with("order-"));
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn consecutive_fills_get_distinct_ids() {
        let mut exec = PaperExecutor::new();
        let a = exec.execute(&proposal()).await.unwrap().order_id.unwrap();
        let b = exec.execute(&proposal()).await.unwrap().order_id.unwrap();
        assert_ne!(a, b);
        assert!(a.ends_with("-1"));
        assert!(b.ends_with("-2"));
    }

    #[tokio::test]
    async fn monitor_reports_one_percent_drift() {
        let mut mon = PaperMonitor::new();
        let status = mon
            .monitor(&MonitorRequest {
                symbol: "BTC/USD".to_string(),
                order_id: "order-1".to_string(),
                entry_price: 200.0,
                stop_loss: 190.0,
                take_profit: 220.0,
            })
            .await
            .unwrap();
        assert_eq!(status.status, PositionState::Open);
        assert!((status.current_price - 202.0).abs() < 1e-9);
        assert!((status.unrealized_pnl - 2.0).abs() < 1e-9);
        assert_eq!(status.action, Some(MonitorAction::Hold));
        assert_eq!(status.new_stop_loss, None);
    }
}
