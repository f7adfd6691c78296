//! Return series and Value-at-Risk

/// Day-over-day simple returns; undefined on the first bar
pub fn daily_returns(closes: &[f64]) -> Vec<Option<f64>> {
    let mut results = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        if i == 0 || closes[i - 1] == 0.0 {
            results.push(None);
        } else {
            results.push(Some(closes[i] / closes[i - 1] - 1.0));
        }
    }
    results
}

/// Linear-interpolated quantile, `q` in `[0, 1]`
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// One-day 95% Value-at-Risk: the 5th percentile of the defined daily returns
///
/// More negative means riskier; `None` when no returns are defined yet.
pub fn var_95(returns: &[Option<f64>]) -> Option<f64> {
    let defined: Vec<f64> = returns.iter().filter_map(|r| *r).collect();
    quantile(&defined, 0.05)
}
