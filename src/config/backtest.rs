//! Backtest configuration

use serde::{Deserialize, Serialize};

/// Moving-average crossover backtest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Starting cash, in currency units
    pub initial_capital: f64,
    /// Fast moving-average window
    pub fast_window: usize,
    /// Slow moving-average window
    pub slow_window: usize,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            initial_capital: 100_000.0,
            fast_window: 5,
            slow_window: 20,
        }
    }
}
