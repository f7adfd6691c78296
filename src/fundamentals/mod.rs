//! Typed fundamentals schema
//!
//! The upstream statement source is loosely keyed; this module pins the
//! line items the dashboard reads and the fallback precedence per metric:
//! statement value, else summary-info value, else derived estimate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Income-statement line item: total revenue
pub const TOTAL_REVENUE: &str = "Total Revenue";
/// Income-statement line item: net income
pub const NET_INCOME: &str = "Net Income";
/// Balance-sheet line item: stockholders equity
pub const STOCKHOLDERS_EQUITY: &str = "Stockholders Equity";

/// Summary key/value info reported alongside the statements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryInfo {
    /// Trailing price-to-earnings ratio
    pub trailing_pe: Option<f64>,
    /// Total revenue, most recent period
    pub total_revenue: Option<f64>,
    /// Net profit margin, as a fraction
    pub profit_margins: Option<f64>,
    /// Total stockholder equity
    pub total_stockholder_equity: Option<f64>,
}

/// One statement table: line-item name to most recent value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    rows: HashMap<String, f64>,
}

impl StatementTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a line item
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.rows.insert(name.into(), value);
    }

    /// Read a line item
    pub fn get(&self, name: &str) -> Option<f64> {
        self.rows.get(name).copied()
    }

    /// Check if the table carries no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Everything the fundamentals source returns for one symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    /// Summary key/value info
    pub summary: SummaryInfo,
    /// Income statement, most recent column
    pub income_statement: StatementTable,
    /// Balance sheet, most recent column
    pub balance_sheet: StatementTable,
}

/// The headline metrics the dashboard displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    /// Trailing P/E, straight from the summary
    pub pe: Option<f64>,
    /// Total revenue
    pub revenue: Option<f64>,
    /// Net income
    pub net_income: Option<f64>,
    /// Stockholder equity
    pub equity: Option<f64>,
    /// Return on equity, net income over equity
    pub roe: Option<f64>,
}

impl KeyMetrics {
    /// Derive the metrics with per-field fallback precedence
    pub fn derive(snapshot: &FundamentalsSnapshot) -> Self {
        let pe = snapshot.summary.trailing_pe;

        let revenue = snapshot
            .income_statement
            .get(TOTAL_REVENUE)
            .or(snapshot.summary.total_revenue);

        // net income: statement, else revenue scaled by the summary margin
        let net_income = snapshot.income_statement.get(NET_INCOME).or_else(|| {
            revenue
                .zip(snapshot.summary.profit_margins)
                .map(|(rev, margin)| rev * margin)
        });

        let equity = snapshot
            .balance_sheet
            .get(STOCKHOLDERS_EQUITY)
            .or(snapshot.summary.total_stockholder_equity);

        let roe = net_income
            .zip(equity)
            .and_then(|(net, eq)| if eq == 0.0 { None } else { Some(net / eq) });

        Self {
            pe,
            revenue,
            net_income,
            equity,
            roe,
        }
    }
}
