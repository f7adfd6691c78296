//! Point-in-time signal report
//!
//! Joins the five independent sub-signals into one report, recomputed fresh
//! on every request and never persisted.

use crate::config::SignalConfig;
use crate::indicators::IndicatorSeries;
use crate::signals::fibonacci::FibZone;
use crate::signals::wash_sale::{self, WashSaleSignal};
use serde::Serialize;
use tracing::debug;

/// Position of the latest close against the Bollinger channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BollingerState {
    /// Close above the upper band
    Overheated,
    /// Close at or below the upper band
    WithinChannel,
    /// Bands still warming up
    InsufficientData,
}

impl BollingerState {
    /// Fixed advisory string
    pub fn advisory(&self) -> &'static str {
        match self {
            BollingerState::Overheated => "Overheated above the upper band; avoid chasing",
            BollingerState::WithinChannel => "Within the channel; range-trade or wait",
            BollingerState::InsufficientData => "Insufficient data for the Bollinger channel",
        }
    }
}

/// OBV relative to its own moving average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObvTrend {
    /// OBV above its 20-day average
    Inflow,
    /// OBV at or below its 20-day average
    Outflow,
    /// OBV average still warming up
    InsufficientData,
}

impl ObvTrend {
    /// Fixed advisory string
    pub fn advisory(&self) -> &'static str {
        match self {
            ObvTrend::Inflow => "Volume inflow; bullish bias",
            ObvTrend::Outflow => "Volume outflow; cautious bias",
            ObvTrend::InsufficientData => "Insufficient data for the OBV trend",
        }
    }
}

/// Momentum read from the last two MACD histogram values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MacdMomentum {
    /// Positive and growing histogram
    Strengthening,
    /// Positive but shrinking histogram
    Weakening,
    /// Flat, negative, or contested histogram
    Contested,
    /// Histogram still warming up
    InsufficientData,
}

impl MacdMomentum {
    /// Fixed advisory string
    pub fn advisory(&self) -> &'static str {
        match self {
            MacdMomentum::Strengthening => "Momentum strengthening; act aggressively",
            MacdMomentum::Weakening => "Momentum weakening or diverging; set stops",
            MacdMomentum::Contested => "Momentum contested or bearish-controlled; stay defensive",
            MacdMomentum::InsufficientData => "Insufficient data for MACD momentum",
        }
    }
}

/// The five independent sub-signals for the latest bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalReport {
    /// Wash-sale / accumulation pattern
    pub wash_sale: WashSaleSignal,
    /// Fibonacci retracement zone
    pub fib_zone: FibZone,
    /// Bollinger extremity
    pub bollinger: BollingerState,
    /// OBV trend
    pub obv_trend: ObvTrend,
    /// MACD momentum
    pub macd_momentum: MacdMomentum,
}

impl SignalReport {
    /// Multi-line advisory text, one line per sub-signal
    pub fn summary(&self) -> String {
        format!(
            "Pattern:   {}\nPosition:  {} ({})\nBollinger: {}\nOBV:       {}\nMACD:      {}",
            self.wash_sale.advisory(),
            self.fib_zone.label(),
            self.fib_zone.advisory(),
            self.bollinger.advisory(),
            self.obv_trend.advisory(),
            self.macd_momentum.advisory(),
        )
    }
}

/// Generate a report, deriving the period high/low from the series itself
pub fn generate_report(series: &IndicatorSeries, config: &SignalConfig) -> SignalReport {
    match series.period_high().zip(series.period_low()) {
        Some((high, low)) => generate_report_with_range(series, high, low, config),
        None => SignalReport {
            wash_sale: WashSaleSignal::InsufficientData,
            fib_zone: FibZone::InsufficientData,
            bollinger: BollingerState::InsufficientData,
            obv_trend: ObvTrend::InsufficientData,
            macd_momentum: MacdMomentum::InsufficientData,
        },
    }
}

/// Generate a report against an explicit period high/low
pub fn generate_report_with_range(
    series: &IndicatorSeries,
    period_high: f64,
    period_low: f64,
    config: &SignalConfig,
) -> SignalReport {
    let wash_sale = wash_sale::detect(series, config);

    let last = series.last();
    let fib_zone = match last {
        Some(bar) => FibZone::classify(bar.close(), period_high, period_low, config),
        None => FibZone::InsufficientData,
    };

    let bollinger = match last {
        Some(bar) => match bar.bb_upper {
            Some(upper) if bar.close() > upper => BollingerState::Overheated,
            Some(_) => BollingerState::WithinChannel,
            None => BollingerState::InsufficientData,
        },
        None => BollingerState::InsufficientData,
    };

    let obv_trend = match last {
        Some(bar) => match bar.obv_ma20 {
            Some(obv_ma) if bar.obv > obv_ma => ObvTrend::Inflow,
            Some(_) => ObvTrend::Outflow,
            None => ObvTrend::InsufficientData,
        },
        None => ObvTrend::InsufficientData,
    };

    let n = series.len();
    let hist_pair = if n >= 2 {
        series
            .get(n - 1)
            .and_then(|b| b.macd_hist)
            .zip(series.get(n - 2).and_then(|b| b.macd_hist))
    } else {
        None
    };
    let macd_momentum = match hist_pair {
        Some((hist, prev)) => {
            if hist > 0.0 && hist > prev {
                MacdMomentum::Strengthening
            } else if hist > 0.0 && hist < prev {
                MacdMomentum::Weakening
            } else {
                MacdMomentum::Contested
            }
        }
        None => MacdMomentum::InsufficientData,
    };

    debug!(
        "signal report: wash={:?} fib={:?} bb={:?} obv={:?} macd={:?}",
        wash_sale.is_detected(),
        fib_zone,
        bollinger,
        obv_trend,
        macd_momentum
    );

    SignalReport {
        wash_sale,
        fib_zone,
        bollinger,
        obv_trend,
        macd_momentum,
    }
}
