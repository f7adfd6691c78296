//! Fibonacci retracement position

use crate::config::SignalConfig;
use serde::Serialize;

/// Where the latest close sits within the period's high-low range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FibZone {
    /// At or above the 78.6% retracement
    Distribution,
    /// Above the 61.8% retracement
    Elevated,
    /// Below the 23.6% retracement
    Accumulation,
    /// Between the 23.6% and 61.8% retracements
    Neutral,
    /// Not enough bars to establish a range
    InsufficientData,
}

impl FibZone {
    /// Classify `close` against the retracement levels of `[low, high]`
    pub fn classify(close: f64, period_high: f64, period_low: f64, config: &SignalConfig) -> Self {
        let diff = period_high - period_low;
        let upper = period_low + diff * config.fib_upper;
        let mid = period_low + diff * config.fib_mid;
        let lower = period_low + diff * config.fib_lower;

        if close >= upper {
            FibZone::Distribution
        } else if close > mid {
            FibZone::Elevated
        } else if close < lower {
            FibZone::Accumulation
        } else {
            FibZone::Neutral
        }
    }

    /// Short zone label
    pub fn label(&self) -> &'static str {
        match self {
            FibZone::Distribution => "distribution/danger zone",
            FibZone::Elevated => "elevated",
            FibZone::Accumulation => "accumulation zone",
            FibZone::Neutral => "neutral/oscillating",
            FibZone::InsufficientData => "insufficient data",
        }
    }

    /// Fixed advisory string for the zone
    pub fn advisory(&self) -> &'static str {
        match self {
            FibZone::Distribution => {
                "Price sits in the distribution/danger zone; treat rallies as exit liquidity"
            }
            FibZone::Elevated => "Price is elevated within the range; tighten risk on new entries",
            FibZone::Accumulation => {
                "Price sits in the accumulation zone; staged entries are favored"
            }
            FibZone::Neutral => "Price is oscillating mid-range; no positional edge either way",
            FibZone::InsufficientData => "Insufficient data to locate the close within a range",
        }
    }
}
