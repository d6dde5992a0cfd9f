use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::modules::rates::models::{InterestRateQuote, RateKind};

/// In-process rate cache with a freshness window (24 hours by default).
///
/// A stale or absent entry is a miss; callers refetch and repopulate. Shared
/// via `web::Data`, so reads take the lock briefly and clone the quote out.
pub struct RateCache {
    ttl: Duration,
    entries: RwLock<HashMap<RateKind, CachedQuote>>,
}

struct CachedQuote {
    quote: InterestRateQuote,
    fetched_at: Instant,
}

impl RateCache {
    pub fn new(ttl_hours: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_hours * 3600),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached quote for a kind if it is still fresh.
    pub async fn get(&self, kind: RateKind) -> Option<InterestRateQuote> {
        let entries = self.entries.read().await;
        entries
            .get(&kind)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.quote.clone())
    }

    /// Store a freshly fetched quote.
    pub async fn put(&self, kind: RateKind, quote: InterestRateQuote) {
        let mut entries = self.entries.write().await;
        entries.insert(
            kind,
            CachedQuote {
                quote,
                fetched_at: Instant::now(),
            },
        );
    }
}
