//! Collaborator traits for the external data sources
//!
//! The computation core consumes price history, live quotes, fundamentals and
//! the persisted holdings list through these traits; the surrounding I/O code
//! owns the actual network and storage clients. Errors are typed so callers
//! can tell "no data" from a transient upstream failure, even though the
//! default presentation collapses both into an empty view.

use crate::data::bar::{PriceBar, PriceSeries};
use crate::fundamentals::FundamentalsSnapshot;
use crate::portfolio::Holding;
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by the external collaborators
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network / auth / upstream service failure
    #[error("upstream request failed: {0}")]
    Upstream(String),
    /// The symbol is not known to the source
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
    /// The holdings store could not be reached
    #[error("holdings store unavailable: {0}")]
    Store(String),
}

/// Daily price history source
pub trait PriceHistorySource {
    /// Fetch daily bars for `symbol` within `[start, end]`, ascending by date
    fn fetch_daily(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, SourceError>;
}

/// Latest-price source for a batch of symbols
pub trait LiveQuoteSource {
    /// Fetch last prices; symbols the source cannot resolve are simply absent
    fn fetch(&self, symbols: &[String]) -> Result<HashMap<String, f64>, SourceError>;
}

/// Fundamental statement source
pub trait FundamentalsSource {
    /// Fetch summary info plus the two statement tables for `symbol`
    fn fetch(&self, symbol: &str) -> Result<FundamentalsSnapshot, SourceError>;
}

/// Persisted holdings list
pub trait HoldingsStore {
    /// Load the holdings, in stored order
    fn load(&self) -> Result<Vec<Holding>, SourceError>;

    /// Replace the stored holdings
    fn save(&mut self, holdings: &[Holding]) -> Result<(), SourceError>;
}

/// In-memory price history, for tests and offline wiring
#[derive(Debug, Default)]
pub struct StaticHistory {
    series: HashMap<String, PriceSeries>,
}

impl StaticHistory {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
        }
    }

    /// Register a symbol's full history
    pub fn insert(&mut self, symbol: impl Into<String>, series: PriceSeries) {
        self.series.insert(symbol.into(), series);
    }
}

impl PriceHistorySource for StaticHistory {
    fn fetch_daily(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, SourceError> {
        let series = self
            .series
            .get(symbol)
            .ok_or_else(|| SourceError::UnknownSymbol(symbol.to_string()))?;

        let bars: Vec<PriceBar> = series
            .bars()
            .iter()
            .filter(|b| b.date >= start && b.date <= end)
            .cloned()
            .collect();
        Ok(PriceSeries::from_vec(bars))
    }
}

/// In-memory quote map, for tests and offline wiring
#[derive(Debug, Default)]
pub struct StaticQuotes {
    prices: HashMap<String, f64>,
}

impl StaticQuotes {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    /// Register a last price
    pub fn insert(&mut self, symbol: impl Into<String>, price: f64) {
        self.prices.insert(symbol.into(), price);
    }
}

impl LiveQuoteSource for StaticQuotes {
    fn fetch(&self, symbols: &[String]) -> Result<HashMap<String, f64>, SourceError> {
        Ok(symbols
            .iter()
            .filter_map(|s| self.prices.get(s).map(|p| (s.clone(), *p)))
            .collect())
    }
}

/// In-memory fundamentals source, for tests and offline wiring
#[derive(Debug, Default)]
pub struct StaticFundamentals {
    snapshots: HashMap<String, FundamentalsSnapshot>,
}

impl StaticFundamentals {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
        }
    }

    /// Register a snapshot
    pub fn insert(&mut self, symbol: impl Into<String>, snapshot: FundamentalsSnapshot) {
        self.snapshots.insert(symbol.into(), snapshot);
    }
}

impl FundamentalsSource for StaticFundamentals {
    fn fetch(&self, symbol: &str) -> Result<FundamentalsSnapshot, SourceError> {
        self.snapshots
            .get(symbol)
            .cloned()
            .ok_or_else(|| SourceError::UnknownSymbol(symbol.to_string()))
    }
}

/// In-memory holdings store, for tests and offline wiring
#[derive(Debug, Default)]
pub struct MemoryHoldings {
    rows: Vec<Holding>,
}

impl MemoryHoldings {
    /// Create an empty store
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a store seeded with rows
    pub fn with_rows(rows: Vec<Holding>) -> Self {
        Self { rows }
    }
}

impl HoldingsStore for MemoryHoldings {
    fn load(&self) -> Result<Vec<Holding>, SourceError> {
        Ok(self.rows.clone())
    }

    fn save(&mut self, holdings: &[Holding]) -> Result<(), SourceError> {
        self.rows = holdings.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_static_history_range_filter() {
        let mut source = StaticHistory::new();
        let bars = (1..=10)
            .map(|d| PriceBar::new(date(d), 10.0, 11.0, 9.0, 10.0, 100.0))
            .collect();
        source.insert("2330.TW", PriceSeries::from_vec(bars));

        let got = source.fetch_daily("2330.TW", date(3), date(7)).unwrap();
        assert_eq!(got.len(), 5);
        assert_eq!(got.get(0).unwrap().date, date(3));

        assert!(matches!(
            source.fetch_daily("0000.TW", date(1), date(2)),
            Err(SourceError::UnknownSymbol(_))
        ));
    }

    #[test]
    fn test_memory_holdings_round_trip() {
        let mut store = MemoryHoldings::new();
        let rows = vec![Holding::new("2330.TW", 500.0, 1000)];
        store.save(&rows).unwrap();
        assert_eq!(store.load().unwrap(), rows);
    }
}
