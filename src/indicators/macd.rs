//! MACD (Moving Average Convergence Divergence)

use crate::indicators::ema::ewm_mean;

/// MACD line trio over a full close series
#[derive(Debug, Clone)]
pub struct MacdOutput {
    /// Fast EMA minus slow EMA (DIF)
    pub dif: Vec<f64>,
    /// Signal line: EMA of the DIF (DEA)
    pub dea: Vec<f64>,
    /// DIF minus DEA
    pub histogram: Vec<f64>,
}

/// Compute MACD with the given spans
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdOutput {
    let ema_fast = ewm_mean(closes, fast);
    let ema_slow = ewm_mean(closes, slow);
    let dif: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();
    let dea = ewm_mean(&dif, signal);
    let histogram: Vec<f64> = dif.iter().zip(&dea).map(|(d, e)| d - e).collect();

    MacdOutput {
        dif,
        dea,
        histogram,
    }
}
