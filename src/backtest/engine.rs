//! Moving-average crossover backtest engine

use crate::config::BacktestConfig;
use crate::indicators::{rolling, IndicatorSeries};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    /// Open the all-in position
    Buy,
    /// Close the position
    Sell,
}

/// One executed trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Execution date
    pub date: NaiveDate,
    /// Direction
    pub side: TradeSide,
    /// Fill price (the bar's close)
    pub price: f64,
    /// Whole shares traded
    pub shares: u64,
}

/// Marked-to-market equity at one bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Bar date
    pub date: NaiveDate,
    /// Cash plus position value at the close
    pub equity: f64,
}

/// Outcome of one backtest run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestResult {
    /// Starting cash
    pub initial_capital: f64,
    /// Equity at the final bar, unrealized position included
    pub final_equity: f64,
    /// Total return over the run, in percent
    pub total_return_pct: f64,
    /// Per-bar equity, one point per bar
    pub equity_curve: Vec<EquityPoint>,
    /// Executed trades, in order
    pub trades: Vec<Trade>,
}

impl BacktestResult {
    /// Number of executed trades
    pub fn num_trades(&self) -> usize {
        self.trades.len()
    }
}

/// Crossover backtest engine
///
/// Two states: Flat (no shares) and Long (all-in). A fast-over-slow upward
/// cross buys as many whole shares as cash allows; a downward cross sells
/// everything. Open positions at the end of the series are not force-closed;
/// the final equity marks them to market. No commissions, slippage, or
/// shorting.
#[derive(Debug, Clone, Default)]
pub struct BacktestEngine {
    config: BacktestConfig,
}

impl BacktestEngine {
    /// Create an engine with the given configuration
    pub fn new(config: BacktestConfig) -> Self {
        Self { config }
    }

    /// Replay the strategy over `series`
    ///
    /// Stateless between runs: the same series always produces the same
    /// result.
    pub fn run(&self, series: &IndicatorSeries) -> BacktestResult {
        let closes = series.closes();
        let fast = rolling::rolling_mean(&closes, self.config.fast_window);
        let slow = rolling::rolling_mean(&closes, self.config.slow_window);

        let mut cash = self.config.initial_capital;
        let mut shares: u64 = 0;
        let mut trades = Vec::new();
        let mut equity_curve = Vec::with_capacity(closes.len());

        for (i, bar) in series.bars().iter().enumerate() {
            let price = closes[i];

            // warm-up bars carry no defined averages and never trigger
            if i > 0 {
                if let (Some(f), Some(s), Some(prev_f), Some(prev_s)) =
                    (fast[i], slow[i], fast[i - 1], slow[i - 1])
                {
                    let crossed_up = f > s && prev_f <= prev_s;
                    let crossed_down = f < s && prev_f >= prev_s;

                    if crossed_up && shares == 0 {
                        let quantity = (cash / price).floor() as u64;
                        if quantity > 0 {
                            cash -= quantity as f64 * price;
                            shares = quantity;
                            debug!(
                                "buy {} shares at {:.2} on {}",
                                quantity,
                                price,
                                bar.date()
                            );
                            trades.push(Trade {
                                date: bar.date(),
                                side: TradeSide::Buy,
                                price,
                                shares: quantity,
                            });
                        }
                    } else if crossed_down && shares > 0 {
                        cash += shares as f64 * price;
                        debug!("sell {} shares at {:.2} on {}", shares, price, bar.date());
                        trades.push(Trade {
                            date: bar.date(),
                            side: TradeSide::Sell,
                            price,
                            shares,
                        });
                        shares = 0;
                    }
                }
            }

            // unconditional per-bar mark-to-market
            equity_curve.push(EquityPoint {
                date: bar.date(),
                equity: cash + shares as f64 * price,
            });
        }

        let final_equity = equity_curve
            .last()
            .map(|p| p.equity)
            .unwrap_or(self.config.initial_capital);
        let total_return_pct = if self.config.initial_capital == 0.0 {
            0.0
        } else {
            (final_equity - self.config.initial_capital) / self.config.initial_capital * 100.0
        };

        BacktestResult {
            initial_capital: self.config.initial_capital,
            final_equity,
            total_return_pct,
            equity_curve,
            trades,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PriceBar, PriceSeries};
    use crate::indicators::enrich;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> IndicatorSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                PriceBar::new(
                    start + chrono::Duration::days(i as i64),
                    c,
                    c + 0.5,
                    c - 0.5,
                    c,
                    100.0,
                )
            })
            .collect();
        enrich(&PriceSeries::from_vec(bars))
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_hand_computed_crossover() {
        // fast(2)/slow(5) over the reference sequence: the fast mean crosses
        // above the slow one at index 5 (10.5 vs 10.2) and back below at
        // index 8 (8.5 vs 10.0)
        let closes = [10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 12.0, 9.0, 8.0, 10.0];
        let engine = BacktestEngine::new(BacktestConfig {
            initial_capital: 1_000.0,
            fast_window: 2,
            slow_window: 5,
        });
        let result = engine.run(&series(&closes));

        assert_eq!(result.trades.len(), 2);
        assert_eq!(
            result.trades[0],
            Trade {
                date: date(6),
                side: TradeSide::Buy,
                price: 11.0,
                shares: 90,
            }
        );
        assert_eq!(
            result.trades[1],
            Trade {
                date: date(9),
                side: TradeSide::Sell,
                price: 8.0,
                shares: 90,
            }
        );

        // cash after the buy is 10; after the sell, 10 + 90 * 8 = 730
        assert_eq!(result.equity_curve.len(), 10);
        assert!((result.equity_curve[6].equity - (10.0 + 90.0 * 12.0)).abs() < 1e-9);
        assert!((result.final_equity - 730.0).abs() < 1e-9);
        assert!((result.total_return_pct - (-27.0)).abs() < 1e-9);
    }

    #[test]
    fn test_default_window_crossover() {
        // 20 flat bars then a jump: ma5 crosses above ma20 at index 20
        let mut closes = vec![10.0; 20];
        closes.extend([11.0, 12.0, 13.0]);
        let engine = BacktestEngine::new(BacktestConfig::default());
        let result = engine.run(&series(&closes));

        assert_eq!(result.trades.len(), 1);
        let first = &result.trades[0];
        assert_eq!(first.side, TradeSide::Buy);
        assert_eq!(first.date, date(21));
        assert_eq!(first.shares, 9_090); // floor(100_000 / 11)

        // open position is marked to market, never force-closed
        let expected = (100_000.0 - 9_090.0 * 11.0) + 9_090.0 * 13.0;
        assert!((result.final_equity - expected).abs() < 1e-9);
    }

    #[test]
    fn test_warm_up_never_triggers() {
        let closes: Vec<f64> = (0..15).map(|i| 10.0 + i as f64).collect();
        let result = BacktestEngine::default().run(&series(&closes));
        assert!(result.trades.is_empty());
        assert_eq!(result.equity_curve.len(), 15);
        assert!((result.total_return_pct).abs() < 1e-12);
    }

    #[test]
    fn test_cash_never_negative() {
        let closes = [10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 12.0, 9.0, 8.0, 10.0, 11.0, 12.0];
        let engine = BacktestEngine::new(BacktestConfig {
            initial_capital: 1_000.0,
            fast_window: 2,
            slow_window: 5,
        });
        let result = engine.run(&series(&closes));

        // replay the trade log: cash must stay non-negative at every step
        let mut cash = result.initial_capital;
        for trade in &result.trades {
            match trade.side {
                TradeSide::Buy => cash -= trade.shares as f64 * trade.price,
                TradeSide::Sell => cash += trade.shares as f64 * trade.price,
            }
            assert!(cash >= 0.0);
        }
    }

    #[test]
    fn test_idempotent_runs() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 10.0)
            .collect();
        let enriched = series(&closes);
        let engine = BacktestEngine::default();
        assert_eq!(engine.run(&enriched), engine.run(&enriched));
    }

    #[test]
    fn test_insufficient_cash_logs_no_trade() {
        let closes = [10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 12.0, 9.0, 8.0, 10.0];
        let engine = BacktestEngine::new(BacktestConfig {
            initial_capital: 5.0, // less than one share
            fast_window: 2,
            slow_window: 5,
        });
        let result = engine.run(&series(&closes));
        assert!(result.trades.is_empty());
        assert!((result.final_equity - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_series() {
        let result = BacktestEngine::default().run(&IndicatorSeries::default());
        assert!(result.equity_curve.is_empty());
        assert!(result.trades.is_empty());
        assert_eq!(result.total_return_pct, 0.0);
    }
}
