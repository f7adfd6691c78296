//! Trailing-window rolling statistics

/// Simple mean of the trailing `window` values; `None` until the window fills
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut results = Vec::with_capacity(values.len());
    if window == 0 {
        results.resize(values.len(), None);
        return results;
    }

    let mut sum = 0.0;
    for (i, &value) in values.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= values[i - window];
        }
        if i + 1 >= window {
            results.push(Some(sum / window as f64));
        } else {
            results.push(None);
        }
    }
    results
}

/// Sample standard deviation (ddof = 1) of the trailing `window` values
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut results = Vec::with_capacity(values.len());
    if window < 2 {
        results.resize(values.len(), None);
        return results;
    }

    for i in 0..values.len() {
        if i + 1 < window {
            results.push(None);
            continue;
        }
        let slice = &values[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let var = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (window as f64 - 1.0);
        results.push(Some(var.sqrt()));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_warm_up() {
        // Shorter than the window: undefined at every index
        let short = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 5);
        assert!(short.iter().all(|v| v.is_none()));

        let ma = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 5);
        assert_eq!(ma[3], None);
        assert_eq!(ma[4], Some(3.0));
        assert_eq!(ma[5], Some(4.0));
    }

    #[test]
    fn test_sample_std() {
        let std = rolling_std(&[1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(std[2], None);
        let got = std[3].unwrap();
        // sample variance of 1..4 is 5/3
        assert!((got - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_windows() {
        assert!(rolling_mean(&[1.0, 2.0], 0).iter().all(|v| v.is_none()));
        assert!(rolling_std(&[1.0, 2.0], 1).iter().all(|v| v.is_none()));
        assert_eq!(rolling_mean(&[7.0], 1), vec![Some(7.0)]);
    }
}
