use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use trend_signal_bot::config::Config;
use trend_signal_bot::exchange::{CoinGeckoClient, PaperExecutor, PaperMonitor};
use trend_signal_bot::models::{Timeframe, WorkflowInput};
use trend_signal_bot::trading::DecisionPipeline;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // Usage: trend-signal-bot [SYMBOL] [TIMEFRAME] [PORTFOLIO]
    let args: Vec<String> = std::env::args().collect();
    let input = WorkflowInput {
        symbol: args.get(1).cloned().unwrap_or_else(|| cfg.symbol.clone()),
        timeframe: args
            .get(2)
            .and_then(|s| Timeframe::from_str_loose(s))
            .or(cfg.timeframe),
        portfolio: args.get(3).and_then(|s| s.parse().ok()).or(cfg.portfolio),
    };

    let market = Box::new(CoinGeckoClient::new(&cfg)?);
    let mut pipeline = DecisionPipeline::new(
        &cfg,
        market,
        Box::new(PaperExecutor::new()),
        Box::new(PaperMonitor::new()),
    );

    let result = pipeline.run(&input).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
