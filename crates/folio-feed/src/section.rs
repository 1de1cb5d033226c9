//! Decides what the "recent videos" block of the page shows.

use folio_core::ManualVideo;
use serde::Serialize;

use crate::normalize::NormalizedVideoEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "videos", rename_all = "snake_case")]
pub enum VideoSection {
    /// Entries from the live channel feed.
    Live(Vec<NormalizedVideoEntry>),
    /// The live feed was empty; curated videos stand in.
    Fallback(Vec<ManualVideo>),
    /// Neither source has anything. The page shows [`VideoSection::CONFIG_HINT`].
    NotConfigured,
}

impl VideoSection {
    pub const CONFIG_HINT: &'static str =
        "Set YOUTUBE_CHANNEL_ID (or YOUTUBE_RSS_URL) to show recent videos automatically.";

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, VideoSection::NotConfigured)
    }
}

/// Live entries win; the manual list is used only when the live list is empty.
#[must_use]
pub fn select_video_section(
    live: Vec<NormalizedVideoEntry>,
    manual: Vec<ManualVideo>,
) -> VideoSection {
    if !live.is_empty() {
        VideoSection::Live(live)
    } else if !manual.is_empty() {
        VideoSection::Fallback(manual)
    } else {
        VideoSection::NotConfigured
    }
}
