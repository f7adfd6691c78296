//! Signal rule configuration

use serde::{Deserialize, Serialize};

/// Threshold configuration for the rule-based signal generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Lookback window for volume averages and candidate candles
    pub lookback: usize,
    /// Close must exceed open by this ratio to count as a breakout candle
    pub bullish_body_ratio: f64,
    /// Candidate volume must exceed the average volume by this ratio
    pub volume_surge_ratio: f64,
    /// Current volume must stay below the key candle's volume by this ratio
    pub volume_shrink_ratio: f64,
    /// Upper Fibonacci retracement level (fraction of the high-low range)
    pub fib_upper: f64,
    /// Middle Fibonacci retracement level
    pub fib_mid: f64,
    /// Lower Fibonacci retracement level
    pub fib_lower: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            lookback: 20,
            bullish_body_ratio: 1.03, // close > open * 1.03
            volume_surge_ratio: 1.5,
            volume_shrink_ratio: 0.6,
            fib_upper: 0.786,
            fib_mid: 0.618,
            fib_lower: 0.236,
        }
    }
}
