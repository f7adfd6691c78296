//! StockLens: an equity-analysis toolkit for daily OHLCV data
//!
//! This crate is the computational core behind a ticker dashboard:
//!
//! - **Data Management**: price-bar series, collaborator traits for the
//!   external price/quote/fundamentals/holdings sources, TTL caching
//! - **Technical Indicators**: MA, Bollinger Bands, MACD, OBV, returns, VaR
//! - **Signal Generation**: fixed threshold rules classifying market state
//! - **Backtesting**: moving-average crossover replay with equity curve
//! - **Portfolio Valuation**: holdings marked against live quotes
//!
//! # Example
//!
//! ```no_run
//! use stocklens::prelude::*;
//!
//! fn main() {
//!     let mut loader = HistoryLoader::new(StaticHistory::new(), &CacheConfig::default());
//!     let view = loader.load("2330.TW", 180);
//!     let report = generate_report(&view.series, &SignalConfig::default());
//!     let result = BacktestEngine::default().run(&view.series);
//!     println!("{}", BacktestReport::new(result).format());
//!     println!("{}", report.summary());
//! }
//! ```

pub mod config;
pub mod data;
pub mod indicators;
pub mod signals;
pub mod backtest;
pub mod portfolio;
pub mod fundamentals;

// Re-export commonly used types
pub mod prelude {
    pub use crate::config::*;
    pub use crate::data::*;
    pub use crate::indicators::*;
    pub use crate::signals::*;
    pub use crate::backtest::*;
    pub use crate::portfolio::*;
    pub use crate::fundamentals::*;

    pub use anyhow::{Context, Result};
}

/// Result type alias
pub type Result<T> = anyhow::Result<T>;

/// Initialize tracing with an env-filter, falling back to `info`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
}
