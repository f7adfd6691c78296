//! Unit tests for stocklens modules

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use stocklens::data::{PriceBar, PriceSeries};
    use stocklens::indicators::{enrich, rolling};

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                PriceBar::new(
                    start_date() + chrono::Duration::days(i as i64),
                    c,
                    c + 1.0,
                    c - 1.0,
                    c,
                    1_000.0,
                )
            })
            .collect();
        PriceSeries::from_vec(bars)
    }

    #[test]
    fn test_short_series_has_no_ma5() {
        for len in 0..5 {
            let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            let enriched = enrich(&series_from_closes(&closes));
            assert!(enriched.bars().iter().all(|b| b.ma5.is_none()));
        }
    }

    #[test]
    fn test_ma5_matches_rolling_helper() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.3).cos()).collect();
        let enriched = enrich(&series_from_closes(&closes));
        let expected = rolling::rolling_mean(&closes, 5);
        for (bar, want) in enriched.bars().iter().zip(expected) {
            assert_eq!(bar.ma5, want);
        }
    }

    #[test]
    fn test_macd_histogram_is_dif_minus_dea() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.2).sin() * 5.0).collect();
        let enriched = enrich(&series_from_closes(&closes));
        for bar in enriched.bars().iter().skip(34) {
            let (dif, dea, hist) = (
                bar.macd_dif.unwrap(),
                bar.macd_dea.unwrap(),
                bar.macd_hist.unwrap(),
            );
            assert!((hist - (dif - dea)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_obv_tracks_close_direction() {
        let closes = [10.0, 11.0, 11.0, 10.5, 12.0];
        let enriched = enrich(&series_from_closes(&closes));
        let obv: Vec<f64> = enriched.bars().iter().map(|b| b.obv).collect();
        assert_eq!(obv, vec![0.0, 1_000.0, 1_000.0, 0.0, 1_000.0]);
    }

    #[test]
    fn test_var_95_present_after_two_bars() {
        let enriched = enrich(&series_from_closes(&[100.0, 101.0]));
        let var = enriched.var_95().unwrap();
        assert!((var - 0.01).abs() < 1e-12);
        assert_eq!(enrich(&series_from_closes(&[100.0])).var_95(), None);
    }
}
