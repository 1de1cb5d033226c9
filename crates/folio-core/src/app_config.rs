use std::path::PathBuf;

/// Settings for locating and fetching the video syndication feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Explicit feed URL (`YOUTUBE_RSS_URL`). Wins over `channel_id`.
    pub explicit_feed_url: Option<String>,
    /// Channel identifier (`YOUTUBE_CHANNEL_ID`) used to build the canonical feed URL.
    pub channel_id: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Lifetime of a cached feed body. `0` disables caching.
    pub cache_ttl_secs: u64,
    /// Entry count used when a caller does not ask for a specific number.
    pub max_items: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            explicit_feed_url: None,
            channel_id: None,
            request_timeout_secs: 30,
            user_agent: "folio/0.1 (video-feed)".to_string(),
            cache_ttl_secs: 3600,
            max_items: 12,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub log_level: String,
    /// Optional YAML file replacing the built-in fallback video list.
    pub videos_path: Option<PathBuf>,
}
