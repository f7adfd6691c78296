//! Persisted holding rows

use serde::{Deserialize, Serialize};

/// One row of the externally persisted holdings list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, e.g. "2330.TW"
    pub symbol: String,
    /// Average purchase price
    pub avg_cost: f64,
    /// Whole shares held
    pub shares: u64,
}

impl Holding {
    /// Create a new holding
    pub fn new(symbol: impl Into<String>, avg_cost: f64, shares: u64) -> Self {
        Self {
            symbol: symbol.into(),
            avg_cost,
            shares,
        }
    }
}
