//! Wash-sale / accumulation pattern detection
//!
//! Looks for a high-volume breakout candle in the recent window followed by
//! low-volume consolidation that holds above the candle's low.

use crate::config::SignalConfig;
use crate::indicators::IndicatorSeries;
use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of the wash-sale pattern check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WashSaleSignal {
    /// Pattern present; carries the key candle that anchored it
    Detected {
        /// Date of the key breakout candle
        key_date: NaiveDate,
        /// Low of the key candle, the level being defended
        key_low: f64,
        /// Volume of the key candle
        key_volume: f64,
    },
    /// No qualifying pattern in the window
    NotDetected,
    /// Fewer bars than the lookback window plus the current bar
    InsufficientData,
}

impl WashSaleSignal {
    /// Check if the pattern fired
    pub fn is_detected(&self) -> bool {
        matches!(self, WashSaleSignal::Detected { .. })
    }

    /// Fixed advisory string
    pub fn advisory(&self) -> &'static str {
        match self {
            WashSaleSignal::Detected { .. } => {
                "Accumulation pattern: breakout candle defended on shrinking volume"
            }
            WashSaleSignal::NotDetected => "No accumulation pattern in the recent window",
            WashSaleSignal::InsufficientData => "Insufficient data for pattern detection",
        }
    }
}

/// Run the detector over the most recent bars of `series`
///
/// Candidates are drawn from the `lookback` bars preceding the current one
/// (the current bar itself never qualifies); the most recent qualifying
/// candle wins.
pub fn detect(series: &IndicatorSeries, config: &SignalConfig) -> WashSaleSignal {
    let n = series.len();
    if config.lookback == 0 || n < config.lookback + 1 {
        return WashSaleSignal::InsufficientData;
    }

    let bars = series.bars();
    let current = &bars[n - 1].bar;

    // trailing volume average ending at the current bar
    let avg_volume = bars[n - config.lookback..]
        .iter()
        .map(|b| b.bar.volume)
        .sum::<f64>()
        / config.lookback as f64;

    let key = bars[n - config.lookback..n - 1]
        .iter()
        .filter(|b| {
            b.bar.close > b.bar.open * config.bullish_body_ratio
                && b.bar.volume > avg_volume * config.volume_surge_ratio
        })
        .last();

    match key {
        Some(key)
            if current.close >= key.bar.low
                && current.volume < key.bar.volume * config.volume_shrink_ratio =>
        {
            WashSaleSignal::Detected {
                key_date: key.bar.date,
                key_low: key.bar.low,
                key_volume: key.bar.volume,
            }
        }
        _ => WashSaleSignal::NotDetected,
    }
}
