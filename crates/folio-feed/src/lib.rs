//! Recent-video feed for the folio site.
//!
//! Resolves the channel's Atom feed URL from configuration, fetches it through
//! a TTL response cache, and maps each entry into a [`NormalizedVideoEntry`]
//! whose fields are always usable by the page. Feed trouble degrades to an
//! empty list; [`select_video_section`] then falls back to the curated list.

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod locator;
pub mod normalize;
pub mod section;
pub mod tree;

pub use cache::{Clock, NoCache, ResponseCache, SystemClock, TtlCache};
pub use error::FeedError;
pub use fetcher::FeedFetcher;
pub use locator::FeedLocator;
pub use normalize::{parse_feed, NormalizedVideoEntry};
pub use section::{select_video_section, VideoSection};
pub use tree::{as_slice, parse_document, pick_text, XmlElement, XmlValue};
