//! Five-stage decision workflow: Analyze, Decide, Execute, Monitor, Format.
//!
//! Every stage always runs. A stage with nothing to do returns its input
//! unchanged, so "no trade" and "execution failed" flow through to Format as
//! data instead of ending the run early.

use tracing::{debug, info, warn};

use crate::config::{Config, FallbackMarket};
use crate::core::risk::RiskSizer;
use crate::error::PipelineError;
use crate::exchange::{MarketDataSource, PositionMonitor, TradeExecutor};
use crate::models::{
    Confidence, FinalResult, FinalStatus, MarketSignal, MonitorRequest, TradeOutcome,
    TradeProposal, TradingDecision, WorkflowInput,
};
use crate::strategies::signals::signal_from_summary;

pub const NO_TRADE_REASON: &str = "No tradeable signal found";
pub const EXECUTION_FAILED_REASON: &str = "Trade execution failed";

pub struct DecisionPipeline {
    market: Box<dyn MarketDataSource>,
    executor: Box<dyn TradeExecutor>,
    monitor: Box<dyn PositionMonitor>,
    fallback: FallbackMarket,
    risk: RiskSizer,
}

impl DecisionPipeline {
    pub fn new(
        cfg: &Config,
        market: Box<dyn MarketDataSource>,
        executor: Box<dyn TradeExecutor>,
        monitor: Box<dyn PositionMonitor>,
    ) -> Self {
        Self {
            market,
            executor,
            monitor,
            fallback: cfg.fallback,
            risk: RiskSizer::new(cfg),
        }
    }

    /// Runs all five stages for one symbol.
    pub async fn run(&mut self, input: &WorkflowInput) -> Result<FinalResult, PipelineError> {
        if input.symbol.trim().is_empty() {
            return Err(PipelineError::MissingInput("symbol"));
        }

        let signal = self.analyze(input).await;
        let decision = decide(&signal);
        if let (Some(portfolio), Some(details)) = (input.portfolio, &decision.trade_details) {
            info!(
                "Allocating ${:.2} of ${:.2} portfolio ({:.0}%)",
                portfolio * details.position_size,
                portfolio,
                details.position_size * 100.0
            );
        }
        let decision = self.execute(decision).await;
        let decision = self.monitor(decision).await;
        let result = format_result(&decision);

        info!("Workflow finished for {}: {}", input.symbol, result.status);
        Ok(result)
    }

    /// Analyze: fetch the market summary (falling back to configured defaults)
    /// and classify it.
    pub async fn analyze(&mut self, input: &WorkflowInput) -> MarketSignal {
        match input.timeframe {
            Some(tf) => info!("Fetching market data for {} ({})...", input.symbol, tf),
            None => info!("Fetching market data for {}...", input.symbol),
        }

        let summary = match self.market.fetch_summary(&input.symbol).await {
            Ok(s) => s,
            Err(e) => {
                warn!("Market data unavailable for {}, using fallback: {:#}", input.symbol, e);
                self.fallback.summary()
            }
        };

        let (signal, analysis) = signal_from_summary(&input.symbol, &summary, &self.risk);
        info!(
            "Analysis complete for {}: bullish={} bearish={} rsi={:.1} macd={} 24h={:+.2}% 7d={:+.2}%",
            signal.symbol,
            analysis.bullish_signals,
            analysis.bearish_signals,
            analysis.rsi,
            analysis.macd_signal,
            analysis.price_change_24h,
            analysis.price_change_7d
        );
        info!("  {}", analysis.recommendation);
        signal
    }

    /// Execute: place the order when tradeable. Transport errors become a
    /// failed outcome rather than an error.
    pub async fn execute(&mut self, decision: TradingDecision) -> TradingDecision {
        let details = match (decision.tradeable, &decision.trade_details) {
            (true, Some(d)) => d.clone(),
            _ => return decision,
        };

        let outcome = match self.executor.execute(&details).await {
            Ok(o) => o,
            Err(e) => TradeOutcome::rejected(format!("{:#}", e)),
        };

        if outcome.success {
            info!(
                "Order placed: {} {} ({})",
                details.action,
                details.symbol,
                outcome.order_id.as_deref().unwrap_or("-")
            );
        } else {
            warn!(
                "Order rejected for {}: {}",
                details.symbol,
                outcome.error.as_deref().unwrap_or(EXECUTION_FAILED_REASON)
            );
        }

        TradingDecision {
            trade_result: Some(outcome),
            ..decision
        }
    }

    /// Monitor: only after a successful execution.
    pub async fn monitor(&mut self, decision: TradingDecision) -> TradingDecision {
        if !decision.tradeable || !decision.execution_succeeded() {
            return decision;
        }
        let request = match monitor_request(&decision) {
            Some(r) => r,
            None => {
                warn!("Execution reported success without an order id, skipping monitor");
                return decision;
            }
        };

        match self.monitor.monitor(&request).await {
            Ok(status) => {
                info!(
                    "Position {} {}: ${:.2} PnL ${:+.2}",
                    request.order_id, status.status, status.current_price, status.unrealized_pnl
                );
                TradingDecision {
                    monitor_result: Some(status),
                    ..decision
                }
            }
            Err(e) => {
                warn!("Monitoring failed for {}: {:#}", request.order_id, e);
                decision
            }
        }
    }
}

/// Decide: trade only on a non-hold action with better than low confidence.
pub fn decide(signal: &MarketSignal) -> TradingDecision {
    let side = match signal.action.to_side() {
        Some(side) if signal.confidence != Confidence::Low => side,
        _ => {
            debug!(
                "No trade for {}: action={} confidence={}",
                signal.symbol, signal.action, signal.confidence
            );
            return TradingDecision::no_trade();
        }
    };

    TradingDecision::trade(TradeProposal {
        symbol: signal.symbol.clone(),
        action: side,
        price: signal.price,
        stop_loss: signal.stop_loss,
        take_profit: signal.take_profit,
        position_size: signal.position_size,
    })
}

fn monitor_request(decision: &TradingDecision) -> Option<MonitorRequest> {
    let details = decision.trade_details.as_ref()?;
    let order_id = decision.trade_result.as_ref()?.order_id.clone()?;
    Some(MonitorRequest {
        symbol: details.symbol.clone(),
        order_id,
        entry_price: details.price,
        stop_loss: details.stop_loss,
        take_profit: details.take_profit,
    })
}

/// Format: terminal mapping to the user-facing result.
pub fn format_result(decision: &TradingDecision) -> FinalResult {
    if !decision.tradeable {
        return FinalResult {
            status: FinalStatus::NoTrade,
            reason: Some(NO_TRADE_REASON.to_string()),
            position: None,
        };
    }
    if !decision.execution_succeeded() {
        let reason = decision
            .trade_result
            .as_ref()
            .and_then(|r| r.error.clone())
            .unwrap_or_else(|| EXECUTION_FAILED_REASON.to_string());
        return FinalResult {
            status: FinalStatus::Failed,
            reason: Some(reason),
            position: None,
        };
    }
    FinalResult {
        status: FinalStatus::Success,
        reason: None,
        position: decision.monitor_result.clone(),
    }
}
