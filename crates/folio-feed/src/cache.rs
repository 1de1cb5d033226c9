//! Read-through caching of fetched feed bodies.
//!
//! The fetcher consults a [`ResponseCache`] before going to the network and
//! stores successful bodies afterwards. [`TtlCache`] keeps bodies in memory for
//! a fixed lifetime; [`NoCache`] turns caching off.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub trait ResponseCache: Send + Sync {
    /// Body cached for `url`, if one is still fresh.
    fn get(&self, url: &str) -> Option<String>;

    fn put(&self, url: &str, body: String);
}

/// Time source for cache expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl ResponseCache for NoCache {
    fn get(&self, _url: &str) -> Option<String> {
        None
    }

    fn put(&self, _url: &str, _body: String) {}
}

struct CacheEntry {
    body: String,
    stored_at: Instant,
}

/// In-memory cache keyed by URL. Entries older than the TTL are treated as
/// missing and dropped on the next lookup.
pub struct TtlCache<C: Clock = SystemClock> {
    ttl: Duration,
    clock: C,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl TtlCache<SystemClock> {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<C: Clock> TtlCache<C> {
    #[must_use]
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> ResponseCache for TtlCache<C> {
    fn get(&self, url: &str) -> Option<String> {
        let now = self.clock.now();
        let mut entries = self.entries();

        let age = now.saturating_duration_since(entries.get(url)?.stored_at);
        if age < self.ttl {
            tracing::debug!(url, age_secs = age.as_secs(), "feed cache hit");
            return entries.get(url).map(|entry| entry.body.clone());
        }

        tracing::debug!(url, age_secs = age.as_secs(), "feed cache entry expired");
        entries.remove(url);
        None
    }

    fn put(&self, url: &str, body: String) {
        let stored_at = self.clock.now();
        self.entries()
            .insert(url.to_string(), CacheEntry { body, stored_at });
    }
}
