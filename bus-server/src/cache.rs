//! Caching layer for geocoding responses.
//!
//! Geocoded places are stable for far longer than any session, and riders
//! tend to search the same handful of destinations, so responses are cached
//! under the normalized query text. Normalizing the key ("Mercado", "mercado"
//! and "mércado " share an entry) keeps cardinality low without a time
//! bucket.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::catalog::normalize;
use crate::geocode::{GeocodeClient, GeocodeError, GeocodedPlace};

/// Cached place entry.
type PlaceEntry = Arc<GeocodedPlace>;

/// Configuration for the geocode cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Geocoding client with caching.
///
/// Wraps a `GeocodeClient` and caches successful lookups. Failures
/// (including "no match") are not cached, so a transient geocoder outage
/// does not pin bad answers.
pub struct CachedGeocoder {
    client: GeocodeClient,
    places: MokaCache<String, PlaceEntry>,
}

impl CachedGeocoder {
    /// Create a new cached geocoder.
    pub fn new(client: GeocodeClient, config: &GeocodeCacheConfig) -> Self {
        let places = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, places }
    }

    /// Resolve a query, using the cache when possible.
    pub async fn forward(&self, query: &str) -> Result<PlaceEntry, GeocodeError> {
        let key = normalize(query);

        if let Some(cached) = self.places.get(&key).await {
            return Ok(cached);
        }

        let place = self.client.forward(query).await?;
        let entry = Arc::new(place);

        self.places.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.places.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.places.invalidate_all();
    }
}
