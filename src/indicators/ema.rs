//! Exponentially weighted moving average
//!
//! The no-adjustment convention: seed on the first value, then
//! `ema[i] = value[i] * alpha + ema[i-1] * (1 - alpha)` with
//! `alpha = 2 / (span + 1)`. Not the bias-corrected variant.

/// Recursive exponential mean over the full sequence
pub fn ewm_mean(values: &[f64], span: usize) -> Vec<f64> {
    let mut results = Vec::with_capacity(values.len());
    if values.is_empty() || span == 0 {
        return results;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut prev = values[0];
    results.push(prev);
    for &value in &values[1..] {
        prev = value * alpha + prev * (1.0 - alpha);
        results.push(prev);
    }
    results
}
