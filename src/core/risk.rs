use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::{Action, Confidence};

pub const DEFAULT_STOP_LOSS_PCT: f64 = 0.05;
pub const DEFAULT_TAKE_PROFIT_PCT: f64 = 0.10;

const SIZE_HIGH: f64 = 0.8;
const SIZE_MEDIUM: f64 = 0.6;
const SIZE_LOW: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskLevels {
    pub stop_loss: f64,
    pub take_profit: f64,
}

/// Fixed-percentage stop/target placement and confidence-based sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSizer {
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,
}

impl Default for RiskSizer {
    fn default() -> Self {
        Self {
            stop_loss_pct: DEFAULT_STOP_LOSS_PCT,
            take_profit_pct: DEFAULT_TAKE_PROFIT_PCT,
        }
    }
}

impl RiskSizer {
    pub fn new(cfg: &Config) -> Self {
        Self {
            stop_loss_pct: cfg.stop_loss_pct,
            take_profit_pct: cfg.take_profit_pct,
        }
    }

    /// Buy: stop below and target above. Any other action uses the
    /// short-side placement (stop above, target below).
    pub fn levels(&self, action: Action, price: f64) -> RiskLevels {
        match action {
            Action::Buy => RiskLevels {
                stop_loss: price * (1.0 - self.stop_loss_pct),
                take_profit: price * (1.0 + self.take_profit_pct),
            },
            Action::Sell | Action::Hold => RiskLevels {
                stop_loss: price * (1.0 + self.stop_loss_pct),
                take_profit: price * (1.0 - self.take_profit_pct),
            },
        }
    }

    /// Like `levels`, but explicit non-zero overrides win.
    pub fn levels_with_overrides(
        &self,
        action: Action,
        price: f64,
        stop_loss: Option<f64>,
        take_profit: Option<f64>,
    ) -> RiskLevels {
        let defaults = self.levels(action, price);
        RiskLevels {
            stop_loss: stop_loss.filter(|v| *v != 0.0).unwrap_or(defaults.stop_loss),
            take_profit: take_profit.filter(|v| *v != 0.0).unwrap_or(defaults.take_profit),
        }
    }

    pub fn position_size(confidence: Confidence) -> f64 {
        match confidence {
            Confidence::High => SIZE_HIGH,
            Confidence::Medium => SIZE_MEDIUM,
            Confidence::Low => SIZE_LOW,
        }
    }
}
