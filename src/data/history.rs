//! Cached, indicator-enriched price history loading

use crate::config::CacheConfig;
use crate::data::cache::TtlCache;
use crate::data::source::{PriceHistorySource, SourceError};
use crate::indicators::{enrich, IndicatorSeries};
use chrono::{NaiveDate, Utc};
use chrono_tz::Asia::Taipei;
use tracing::{debug, warn};

/// Extra calendar days fetched ahead of the display window so the slowest
/// indicator (DEA, 35 bars) is fully warmed up before the first shown bar
const WARM_UP_DAYS: i64 = 150;

/// An enriched, display-ready market window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketView {
    /// Indicator-enriched bars, trimmed to the requested day count
    pub series: IndicatorSeries,
    /// 95% one-day VaR over the full fetched window, warm-up included
    pub var_95: Option<f64>,
}

impl MarketView {
    /// An empty view, served when the upstream fetch fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the view carries no bars
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Fetches daily history, enriches it, and caches the result per request
pub struct HistoryLoader<S> {
    source: S,
    cache: TtlCache<(String, u32), MarketView>,
}

impl<S: PriceHistorySource> HistoryLoader<S> {
    /// Create a loader over a price history source
    pub fn new(source: S, config: &CacheConfig) -> Self {
        Self {
            source,
            cache: TtlCache::new(config.price_ttl()),
        }
    }

    /// Load the last `days` trading days for `symbol`, enriched
    ///
    /// Fetch failures degrade to an empty view; the caller presents
    /// "no data" instead of crashing. Failures are not cached, so the next
    /// call retries the upstream.
    pub fn load(&mut self, symbol: &str, days: u32) -> MarketView {
        let key = (symbol.to_string(), days);
        if let Some(hit) = self.cache.get(&key) {
            debug!("price history cache hit for {} ({} days)", symbol, days);
            return hit;
        }

        let view = match self.fetch_view(symbol, days) {
            Ok(view) => view,
            Err(err) => {
                warn!(
                    "price history fetch failed for {}: {}; serving empty view",
                    symbol, err
                );
                return MarketView::empty();
            }
        };

        self.cache.insert(key, view.clone());
        view
    }

    /// Drop every cached window (the explicit "refresh" action)
    pub fn refresh(&mut self) {
        self.cache.invalidate_all();
    }

    fn fetch_view(&self, symbol: &str, days: u32) -> Result<MarketView, SourceError> {
        let end = market_today();
        let start = end - chrono::Duration::days(days as i64 + WARM_UP_DAYS);
        debug!("fetching {} from {} to {}", symbol, start, end);

        let mut raw = self.source.fetch_daily(symbol, start, end)?;
        raw.sort_by_date();

        let enriched = enrich(&raw);
        // VaR is taken over the whole fetched window before trimming
        let var_95 = enriched.var_95();
        Ok(MarketView {
            series: enriched.tail(days as usize),
            var_95,
        })
    }
}

/// Today's date on the market clock (Asia/Taipei)
pub fn market_today() -> NaiveDate {
    Utc::now().with_timezone(&Taipei).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bar::{PriceBar, PriceSeries};
    use crate::data::source::StaticHistory;

    fn seeded_loader(bar_count: i64) -> HistoryLoader<StaticHistory> {
        let today = market_today();
        let bars = (0..bar_count)
            .map(|i| {
                let price = 100.0 + i as f64 * 0.1;
                PriceBar::new(
                    today - chrono::Duration::days(bar_count - 1 - i),
                    price,
                    price + 1.0,
                    price - 1.0,
                    price,
                    1_000.0,
                )
            })
            .collect();
        let mut source = StaticHistory::new();
        source.insert("2330.TW", PriceSeries::from_vec(bars));
        HistoryLoader::new(source, &CacheConfig::default())
    }

    #[test]
    fn test_load_trims_to_requested_days() {
        let mut loader = seeded_loader(400);
        let view = loader.load("2330.TW", 180);
        assert_eq!(view.series.len(), 180);
        assert!(view.var_95.is_some());
        // last bar is the most recent one
        assert_eq!(view.series.last().unwrap().date(), market_today());
    }

    #[test]
    fn test_cache_round_trip_and_refresh() {
        let mut loader = seeded_loader(100);
        let first = loader.load("2330.TW", 30);
        let second = loader.load("2330.TW", 30);
        assert_eq!(first, second);
        loader.refresh();
        assert_eq!(loader.load("2330.TW", 30), first);
    }

    #[test]
    fn test_unknown_symbol_degrades_to_empty() {
        let mut loader = seeded_loader(100);
        let view = loader.load("0000.TW", 30);
        assert!(view.is_empty());
        assert_eq!(view.var_95, None);
    }
}
