//! Backtest report generation

use crate::backtest::engine::{BacktestResult, TradeSide};

/// Plain-text summary of one backtest run
#[derive(Debug)]
pub struct BacktestReport {
    result: BacktestResult,
}

impl BacktestReport {
    /// Create a report from a result
    pub fn new(result: BacktestResult) -> Self {
        Self { result }
    }

    /// Format the report as a string
    pub fn format(&self) -> String {
        let buys = self
            .result
            .trades
            .iter()
            .filter(|t| t.side == TradeSide::Buy)
            .count();
        let sells = self.result.num_trades() - buys;

        format!(
            r#"
Backtest Results
================
Initial Capital: ${:.2}
Final Equity: ${:.2}
Total Return: {:.2}%
Bars Replayed: {}
Trades: {} ({} buys / {} sells)
"#,
            self.result.initial_capital,
            self.result.final_equity,
            self.result.total_return_pct,
            self.result.equity_curve.len(),
            self.result.num_trades(),
            buys,
            sells,
        )
    }

    /// Get the underlying result
    pub fn result(&self) -> &BacktestResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mentions_totals() {
        let result = BacktestResult {
            initial_capital: 100_000.0,
            final_equity: 112_500.0,
            total_return_pct: 12.5,
            equity_curve: Vec::new(),
            trades: Vec::new(),
        };
        let text = BacktestReport::new(result).format();
        assert!(text.contains("$100000.00"));
        assert!(text.contains("12.50%"));
        assert!(text.contains("0 buys / 0 sells"));
    }
}
