//! Configuration module

pub mod signal;
pub mod backtest;
pub mod cache;

pub use signal::*;
pub use backtest::*;
pub use cache::*;
