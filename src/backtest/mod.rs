//! Backtesting module
//!
//! Replays a moving-average crossover strategy over an enriched series with
//! an all-in/all-out position, producing an equity curve and trade log.

pub mod engine;
pub mod report;

pub use engine::*;
pub use report::*;
