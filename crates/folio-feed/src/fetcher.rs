//! Retrieves the configured syndication feed and normalizes its entries.

use std::sync::Arc;
use std::time::Duration;

use folio_core::FeedConfig;
use reqwest::Client;

use crate::cache::{NoCache, ResponseCache, TtlCache};
use crate::error::FeedError;
use crate::locator::FeedLocator;
use crate::normalize::{parse_feed, NormalizedVideoEntry};

/// Fetches recent videos from the feed the [`FeedLocator`] resolves.
///
/// Bodies are read through a [`ResponseCache`]; only 2xx bodies are stored.
/// There are no retries. Timeouts are whatever the HTTP client enforces.
pub struct FeedFetcher {
    client: Client,
    locator: FeedLocator,
    cache: Arc<dyn ResponseCache>,
}

impl FeedFetcher {
    /// Creates a fetcher with the configured timeout, `User-Agent`, and a
    /// [`TtlCache`] (or [`NoCache`] when `cache_ttl_secs` is `0`).
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let cache: Arc<dyn ResponseCache> = if config.cache_ttl_secs == 0 {
            Arc::new(NoCache)
        } else {
            Arc::new(TtlCache::new(Duration::from_secs(config.cache_ttl_secs)))
        };
        Self::with_cache(config, cache)
    }

    /// Creates a fetcher that reads through the given cache.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_cache(
        config: &FeedConfig,
        cache: Arc<dyn ResponseCache>,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            locator: FeedLocator::new(config),
            cache,
        })
    }

    /// The feed URL that would be polled, for display and diagnostics.
    #[must_use]
    pub fn feed_url(&self) -> Option<String> {
        self.locator.resolve_feed_url()
    }

    /// Up to `max_items` recent videos, in feed order.
    ///
    /// Never fails: an unconfigured feed, a transport error, a non-2xx status
    /// and an unparsable body all yield an empty list. Failures are logged.
    pub async fn fetch_recent_entries(&self, max_items: usize) -> Vec<NormalizedVideoEntry> {
        match self.try_fetch_recent_entries(max_items).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "video feed unavailable; returning no entries");
                Vec::new()
            }
        }
    }

    /// Like [`FeedFetcher::fetch_recent_entries`], but surfaces failures.
    ///
    /// An unconfigured feed is not a failure and returns `Ok` with no entries
    /// without touching the network.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] — network or TLS failure.
    /// - [`FeedError::UnexpectedStatus`] — any non-2xx status.
    /// - [`FeedError::Xml`] / [`FeedError::Malformed`] — body is not well-formed XML.
    pub async fn try_fetch_recent_entries(
        &self,
        max_items: usize,
    ) -> Result<Vec<NormalizedVideoEntry>, FeedError> {
        let Some(url) = self.feed_url() else {
            tracing::debug!("no video feed configured");
            return Ok(Vec::new());
        };

        let body = self.fetch_body(&url).await?;
        let entries = parse_feed(&body, max_items)?;
        tracing::debug!(url = %url, count = entries.len(), "parsed video feed");
        Ok(entries)
    }

    async fn fetch_body(&self, url: &str) -> Result<String, FeedError> {
        if let Some(body) = self.cache.get(url) {
            return Ok(body);
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        self.cache.put(url, body.clone());
        Ok(body)
    }
}
