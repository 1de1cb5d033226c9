//! Resolves which syndication URL to poll from the feed configuration.

use folio_core::FeedConfig;

const CHANNEL_FEED_BASE_URL: &str = "https://www.youtube.com/feeds/videos.xml";

/// Picks the feed URL: an explicit override first, then a URL built from the
/// channel identifier. Identifiers are not validated; a bad one fails at fetch time.
#[derive(Debug, Clone, Default)]
pub struct FeedLocator {
    explicit_feed_url: Option<String>,
    channel_id: Option<String>,
}

impl FeedLocator {
    #[must_use]
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            explicit_feed_url: config.explicit_feed_url.clone(),
            channel_id: config.channel_id.clone(),
        }
    }

    /// Returns the feed URL to poll, or `None` when no feed is configured.
    #[must_use]
    pub fn resolve_feed_url(&self) -> Option<String> {
        if let Some(explicit) = non_blank(self.explicit_feed_url.as_deref()) {
            return Some(explicit.to_string());
        }

        non_blank(self.channel_id.as_deref())
            .map(|channel_id| format!("{CHANNEL_FEED_BASE_URL}?channel_id={channel_id}"))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(explicit: Option<&str>, channel: Option<&str>) -> FeedLocator {
        FeedLocator::new(&FeedConfig {
            explicit_feed_url: explicit.map(str::to_string),
            channel_id: channel.map(str::to_string),
            ..FeedConfig::default()
        })
    }

    #[test]
    fn resolves_nothing_when_unconfigured() {
        assert!(locator(None, None).resolve_feed_url().is_none());
    }

    #[test]
    fn builds_channel_feed_url() {
        assert_eq!(
            locator(None, Some("UCXXXX")).resolve_feed_url().as_deref(),
            Some("https://www.youtube.com/feeds/videos.xml?channel_id=UCXXXX")
        );
    }

    #[test]
    fn explicit_url_wins_over_channel_id() {
        assert_eq!(
            locator(Some("https://example.com/feed.xml"), Some("UCXXXX"))
                .resolve_feed_url()
                .as_deref(),
            Some("https://example.com/feed.xml")
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        assert!(locator(Some("   "), Some("\t")).resolve_feed_url().is_none());
        assert_eq!(
            locator(Some(" "), Some(" UCXXXX ")).resolve_feed_url().as_deref(),
            Some("https://www.youtube.com/feeds/videos.xml?channel_id=UCXXXX")
        );
    }

    #[test]
    fn explicit_url_is_trimmed() {
        assert_eq!(
            locator(Some("  https://example.com/feed.xml\n"), None)
                .resolve_feed_url()
                .as_deref(),
            Some("https://example.com/feed.xml")
        );
    }
}
