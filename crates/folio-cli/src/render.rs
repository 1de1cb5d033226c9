//! Plain-text output for the CLI commands.

use std::fmt::Write;

use folio_core::ManualVideo;
use folio_feed::{NormalizedVideoEntry, VideoSection};

pub(crate) fn render_feed_url(url: Option<&str>) -> String {
    url.map_or_else(
        || "no video feed configured (set YOUTUBE_CHANNEL_ID or YOUTUBE_RSS_URL)".to_string(),
        str::to_string,
    )
}

pub(crate) fn render_videos(entries: &[NormalizedVideoEntry]) -> String {
    if entries.is_empty() {
        return "no recent videos\n".to_string();
    }

    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, entry.title);
        let _ = writeln!(out, "   {}", entry.url);
        if let Some(published_at) = &entry.published_at {
            let _ = writeln!(out, "   published {published_at}");
        }
    }
    out
}

fn render_manual(videos: &[ManualVideo]) -> String {
    let mut out = String::new();
    for (index, video) in videos.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, video.title);
        let _ = writeln!(out, "   {}", video.watch_url());
        if !video.tags.is_empty() {
            let _ = writeln!(out, "   tags: {}", video.tags.join(", "));
        }
    }
    out
}

pub(crate) fn section_kind(section: &VideoSection) -> &'static str {
    match section {
        VideoSection::Live(_) => "live",
        VideoSection::Fallback(_) => "fallback",
        VideoSection::NotConfigured => "not_configured",
    }
}

pub(crate) fn render_section(section: &VideoSection) -> String {
    match section {
        VideoSection::Live(entries) => format!("live feed\n{}", render_videos(entries)),
        VideoSection::Fallback(videos) => format!("curated fallback\n{}", render_manual(videos)),
        VideoSection::NotConfigured => format!("{}\n", VideoSection::CONFIG_HINT),
    }
}
