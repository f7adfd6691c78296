//! Portfolio valuation against live quotes

use crate::portfolio::holding::Holding;
use serde::Serialize;
use std::collections::HashMap;

/// A holding joined with its live price and derived P&L fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuedHolding {
    /// Ticker symbol
    pub symbol: String,
    /// Average purchase price
    pub avg_cost: f64,
    /// Whole shares held
    pub shares: u64,
    /// Last price; 0.0 when the quote lookup failed
    pub live_price: f64,
    /// live_price * shares
    pub market_value: f64,
    /// avg_cost * shares
    pub cost_basis: f64,
    /// market_value - cost_basis
    pub profit_loss: f64,
    /// profit_loss / cost_basis, in percent; 0 on a zero basis
    pub return_pct: f64,
}

impl ValuedHolding {
    /// Value one holding at `live_price`
    pub fn new(holding: &Holding, live_price: f64) -> Self {
        let market_value = live_price * holding.shares as f64;
        let cost_basis = holding.avg_cost * holding.shares as f64;
        let profit_loss = market_value - cost_basis;
        let return_pct = if cost_basis == 0.0 {
            0.0
        } else {
            profit_loss / cost_basis * 100.0
        };

        Self {
            symbol: holding.symbol.clone(),
            avg_cost: holding.avg_cost,
            shares: holding.shares,
            live_price,
            market_value,
            cost_basis,
            profit_loss,
            return_pct,
        }
    }
}

/// Valued holdings plus portfolio-level aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioValuation {
    /// Per-holding rows, in input order
    pub positions: Vec<ValuedHolding>,
    /// Sum of market values
    pub total_market_value: f64,
    /// Sum of profits and losses
    pub total_profit_loss: f64,
}

/// Value every holding against a quote map
///
/// Pure map-then-reduce; holdings are read, never mutated, and symbols
/// missing from `quotes` are valued at zero.
pub fn value_portfolio(holdings: &[Holding], quotes: &HashMap<String, f64>) -> PortfolioValuation {
    let positions: Vec<ValuedHolding> = holdings
        .iter()
        .map(|h| ValuedHolding::new(h, quotes.get(&h.symbol).copied().unwrap_or(0.0)))
        .collect();

    let total_market_value = positions.iter().map(|p| p.market_value).sum();
    let total_profit_loss = positions.iter().map(|p| p.profit_loss).sum();

    PortfolioValuation {
        positions,
        total_market_value,
        total_profit_loss,
    }
}
