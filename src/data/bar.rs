//! Daily OHLCV price bar structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Volume
    pub volume: f64,
}

impl PriceBar {
    /// Create a new price bar
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check if the bar closed above its open
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if the bar closed below its open
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Total range (high - low)
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

/// Ordered collection of daily bars, ascending by date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Create a new empty series
    pub fn new() -> Self {
        Self { bars: Vec::new() }
    }

    /// Create from a vector of bars
    pub fn from_vec(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    /// Append a bar
    pub fn push(&mut self, bar: PriceBar) {
        self.bars.push(bar);
    }

    /// Number of bars
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar at index
    pub fn get(&self, index: usize) -> Option<&PriceBar> {
        self.bars.get(index)
    }

    /// Most recent bar
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// All bars
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Close prices as a vector
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Open prices as a vector
    pub fn opens(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    /// High prices as a vector
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Low prices as a vector
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Volumes as a vector
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Highest high over the whole series
    pub fn period_high(&self) -> Option<f64> {
        self.bars.iter().map(|b| b.high).fold(None, |acc, h| {
            Some(match acc {
                Some(a) => a.max(h),
                None => h,
            })
        })
    }

    /// Lowest low over the whole series
    pub fn period_low(&self) -> Option<f64> {
        self.bars.iter().map(|b| b.low).fold(None, |acc, l| {
            Some(match acc {
                Some(a) => a.min(l),
                None => l,
            })
        })
    }

    /// Sort by date (oldest first)
    pub fn sort_by_date(&mut self) {
        self.bars.sort_by_key(|b| b.date);
    }
}

impl From<Vec<PriceBar>> for PriceSeries {
    fn from(bars: Vec<PriceBar>) -> Self {
        Self::from_vec(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_bar_shape() {
        let bar = PriceBar::new(date(2), 100.0, 110.0, 95.0, 105.0, 1000.0);
        assert!(bar.is_bullish());
        assert!(!bar.is_bearish());
        assert_eq!(bar.range(), 15.0);
    }

    #[test]
    fn test_period_extremes_and_sort() {
        let mut series = PriceSeries::from_vec(vec![
            PriceBar::new(date(3), 10.0, 12.0, 9.0, 11.0, 100.0),
            PriceBar::new(date(1), 10.0, 15.0, 8.0, 10.0, 100.0),
            PriceBar::new(date(2), 10.0, 11.0, 9.5, 10.5, 100.0),
        ]);
        series.sort_by_date();
        assert_eq!(series.get(0).unwrap().date, date(1));
        assert_eq!(series.period_high(), Some(15.0));
        assert_eq!(series.period_low(), Some(8.0));
        assert!(PriceSeries::new().period_high().is_none());
    }
}
