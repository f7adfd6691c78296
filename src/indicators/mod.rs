//! Technical indicators module
//!
//! Pure trailing-window computations over a daily bar series. Every derived
//! field is recomputed deterministically from the bars up to its index; the
//! EMA-family recursions run from the first bar, and each `Option` field
//! exposes a value only once its warm-up window has filled.

pub mod rolling;
pub mod ema;
pub mod macd;
pub mod obv;
pub mod risk;

pub use macd::MacdOutput;

use crate::data::PriceBar;
use chrono::NaiveDate;
use serde::Serialize;

/// Fast simple moving-average window
pub const FAST_MA_WINDOW: usize = 5;
/// Slow simple moving-average window, shared by std20 and the Bollinger bands
pub const SLOW_MA_WINDOW: usize = 20;
/// Bollinger band width in standard deviations
pub const BOLLINGER_WIDTH: f64 = 2.0;
/// Fast EMA span
pub const EMA_FAST_SPAN: usize = 12;
/// Slow EMA span
pub const EMA_SLOW_SPAN: usize = 26;
/// Span of the MACD signal line (DEA)
pub const MACD_SIGNAL_SPAN: usize = 9;
/// OBV moving-average window
pub const OBV_MA_WINDOW: usize = 20;

/// A price bar extended with its derived indicator fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorBar {
    /// The raw OHLCV bar
    #[serde(flatten)]
    pub bar: PriceBar,
    /// 5-day simple moving average
    pub ma5: Option<f64>,
    /// 20-day simple moving average
    pub ma20: Option<f64>,
    /// 20-day sample standard deviation of the close
    pub std20: Option<f64>,
    /// Upper Bollinger band (ma20 + 2 * std20)
    pub bb_upper: Option<f64>,
    /// Lower Bollinger band (ma20 - 2 * std20)
    pub bb_lower: Option<f64>,
    /// 12-day EMA of the close
    pub ema_fast: Option<f64>,
    /// 26-day EMA of the close
    pub ema_slow: Option<f64>,
    /// MACD line (DIF)
    pub macd_dif: Option<f64>,
    /// MACD signal line (DEA)
    pub macd_dea: Option<f64>,
    /// MACD histogram (DIF - DEA)
    pub macd_hist: Option<f64>,
    /// On-balance volume, 0.0-seeded
    pub obv: f64,
    /// 20-day simple moving average of the OBV
    pub obv_ma20: Option<f64>,
    /// Day-over-day return
    pub daily_return: Option<f64>,
}

impl IndicatorBar {
    /// Trading date
    pub fn date(&self) -> NaiveDate {
        self.bar.date
    }

    /// Closing price
    pub fn close(&self) -> f64 {
        self.bar.close
    }
}

/// A price series with all derived indicator fields attached
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorSeries {
    bars: Vec<IndicatorBar>,
}

impl IndicatorSeries {
    /// Number of bars
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar at index
    pub fn get(&self, index: usize) -> Option<&IndicatorBar> {
        self.bars.get(index)
    }

    /// Most recent bar
    pub fn last(&self) -> Option<&IndicatorBar> {
        self.bars.last()
    }

    /// All bars
    pub fn bars(&self) -> &[IndicatorBar] {
        &self.bars
    }

    /// Close prices as a vector
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.bar.close).collect()
    }

    /// Highest high over the whole series
    pub fn period_high(&self) -> Option<f64> {
        self.bars
            .iter()
            .map(|b| b.bar.high)
            .fold(None, |acc, h| Some(acc.map_or(h, |a: f64| a.max(h))))
    }

    /// Lowest low over the whole series
    pub fn period_low(&self) -> Option<f64> {
        self.bars
            .iter()
            .map(|b| b.bar.low)
            .fold(None, |acc, l| Some(acc.map_or(l, |a: f64| a.min(l))))
    }

    /// Keep only the most recent `n` bars
    ///
    /// Indicator fields are unchanged: they remain functions of the full
    /// history they were computed over, like a dashboard that trims its
    /// display window after enriching a longer fetch.
    pub fn tail(&self, n: usize) -> IndicatorSeries {
        let skip = self.bars.len().saturating_sub(n);
        IndicatorSeries {
            bars: self.bars[skip..].to_vec(),
        }
    }

    /// 95% one-day VaR over the defined daily returns of this series
    pub fn var_95(&self) -> Option<f64> {
        let returns: Vec<Option<f64>> = self.bars.iter().map(|b| b.daily_return).collect();
        risk::var_95(&returns)
    }
}

/// Compute every indicator field over a raw price series
///
/// Empty input yields an empty series; short input leaves the affected
/// fields `None`. Never fails.
pub fn enrich(series: &crate::data::PriceSeries) -> IndicatorSeries {
    if series.is_empty() {
        return IndicatorSeries::default();
    }

    let closes = series.closes();
    let volumes = series.volumes();

    let ma5 = rolling::rolling_mean(&closes, FAST_MA_WINDOW);
    let ma20 = rolling::rolling_mean(&closes, SLOW_MA_WINDOW);
    let std20 = rolling::rolling_std(&closes, SLOW_MA_WINDOW);
    let ema_fast = ema::ewm_mean(&closes, EMA_FAST_SPAN);
    let ema_slow = ema::ewm_mean(&closes, EMA_SLOW_SPAN);
    let macd_out = macd::macd(&closes, EMA_FAST_SPAN, EMA_SLOW_SPAN, MACD_SIGNAL_SPAN);
    let obv_raw = obv::obv(&closes, &volumes);
    let obv_ma = rolling::rolling_mean(&obv_raw, OBV_MA_WINDOW);
    let returns = risk::daily_returns(&closes);

    let dea_warm_up = EMA_SLOW_SPAN + MACD_SIGNAL_SPAN;
    let bars = series
        .bars()
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let bb = ma20[i].zip(std20[i]);
            IndicatorBar {
                bar: bar.clone(),
                ma5: ma5[i],
                ma20: ma20[i],
                std20: std20[i],
                bb_upper: bb.map(|(m, s)| m + BOLLINGER_WIDTH * s),
                bb_lower: bb.map(|(m, s)| m - BOLLINGER_WIDTH * s),
                ema_fast: (i + 1 >= EMA_FAST_SPAN).then(|| ema_fast[i]),
                ema_slow: (i + 1 >= EMA_SLOW_SPAN).then(|| ema_slow[i]),
                macd_dif: (i + 1 >= EMA_SLOW_SPAN).then(|| macd_out.dif[i]),
                macd_dea: (i + 1 >= dea_warm_up).then(|| macd_out.dea[i]),
                macd_hist: (i + 1 >= dea_warm_up).then(|| macd_out.histogram[i]),
                obv: obv_raw[i],
                obv_ma20: obv_ma[i],
                daily_return: returns[i],
            }
        })
        .collect();

    IndicatorSeries { bars }
}
