//! OBV (On-Balance Volume)

/// Running signed cumulative volume; seeded at 0.0 on the first bar
pub fn obv(closes: &[f64], volumes: &[f64]) -> Vec<f64> {
    let mut results = Vec::with_capacity(closes.len());
    let mut running = 0.0;
    for i in 0..closes.len() {
        if i > 0 {
            if closes[i] > closes[i - 1] {
                running += volumes[i];
            } else if closes[i] < closes[i - 1] {
                running -= volumes[i];
            }
        }
        results.push(running);
    }
    results
}
