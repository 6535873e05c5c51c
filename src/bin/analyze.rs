use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use trend_signal_bot::config::Config;
use trend_signal_bot::core::risk::RiskSizer;
use trend_signal_bot::exchange::SyntheticPriceFeed;
use trend_signal_bot::models::ToolAction;
use trend_signal_bot::trading::{MarketTool, ToolRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // Usage: analyze [SYMBOL] [analyze|buy|sell] [AMOUNT] [STOP_LOSS] [TAKE_PROFIT]
    let args: Vec<String> = std::env::args().collect();

    let action = match args.get(2) {
        Some(s) => ToolAction::from_str_loose(s)
            .with_context(|| format!("Unknown action '{}': expected analyze, buy or sell", s))?,
        None => ToolAction::Analyze,
    };
    let number = |i: usize| args.get(i).and_then(|s| s.parse::<f64>().ok());

    let request = ToolRequest {
        symbol: args.get(1).cloned().unwrap_or_else(|| cfg.symbol.clone()),
        action,
        amount: number(3),
        stop_loss: number(4),
        take_profit: number(5),
    };

    let feed = match std::env::var("PRICE_SEED").ok().and_then(|s| s.parse().ok()) {
        Some(seed) => SyntheticPriceFeed::seeded(seed),
        None => SyntheticPriceFeed::new(),
    };
    let mut tool = MarketTool::new(Box::new(feed), RiskSizer::new(&cfg));

    let response = tool.run(&request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
