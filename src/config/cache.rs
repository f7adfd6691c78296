//! Cache configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// TTLs for the caches fronting the external data sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Price history TTL in seconds
    pub price_ttl_secs: u64,
    /// Fundamentals TTL in seconds
    pub fundamentals_ttl_secs: u64,
    /// Display-name lookup TTL in seconds
    pub display_name_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            price_ttl_secs: 300,           // 5 minutes
            fundamentals_ttl_secs: 3_600,  // 1 hour
            display_name_ttl_secs: 86_400, // 1 day
        }
    }
}

impl CacheConfig {
    /// Price history TTL as a `Duration`
    pub fn price_ttl(&self) -> Duration {
        Duration::from_secs(self.price_ttl_secs)
    }

    /// Fundamentals TTL as a `Duration`
    pub fn fundamentals_ttl(&self) -> Duration {
        Duration::from_secs(self.fundamentals_ttl_secs)
    }

    /// Display-name lookup TTL as a `Duration`
    pub fn display_name_ttl(&self) -> Duration {
        Duration::from_secs(self.display_name_ttl_secs)
    }
}
