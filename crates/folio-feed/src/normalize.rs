//! Maps raw Atom entries into display-ready video records.

use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::tree::{as_slice, parse_document, pick_text, XmlElement, XmlValue};

const WATCH_BASE_URL: &str = "https://www.youtube.com/watch";
const HOMEPAGE_URL: &str = "https://www.youtube.com";
const UNTITLED: &str = "Untitled";

/// A feed entry with every field resolved, whatever shape the source had.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedVideoEntry {
    /// Platform video identifier. Empty when the entry carried none.
    pub id: String,
    pub title: String,
    /// Viewing URL. Never empty.
    pub url: String,
    /// Raw `published` text, format preserved.
    pub published_at: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// Parse a feed body and normalize at most `max_items` entries in document order.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] or [`FeedError::Malformed`] if the body is not
/// well-formed XML.
pub fn parse_feed(xml: &str, max_items: usize) -> Result<Vec<NormalizedVideoEntry>, FeedError> {
    let document = parse_document(xml)?;
    Ok(feed_entries(&document)
        .iter()
        .take(max_items)
        .map(normalize_entry)
        .collect())
}

/// The `feed/entry` collection, whether absent, a bare element, or a list.
#[must_use]
pub fn feed_entries(document: &XmlElement) -> &[XmlValue] {
    as_slice(document.path(&["feed", "entry"]))
}

#[must_use]
pub fn normalize_entry(entry: &XmlValue) -> NormalizedVideoEntry {
    let id = non_empty(pick_text(entry.get("yt:videoId")))
        .or_else(|| non_empty(pick_text(entry.get("id"))))
        .unwrap_or_default()
        .to_string();

    let title = non_empty(pick_text(entry.get("title")))
        .unwrap_or(UNTITLED)
        .to_string();

    let url = non_empty(
        as_slice(entry.get("link"))
            .first()
            .and_then(|link| link.attr("href")),
    )
    .map_or_else(|| fallback_url(&id), str::to_string);

    let published_at = non_empty(pick_text(entry.get("published"))).map(str::to_string);

    let thumbnail_url = non_empty(
        as_slice(entry.get("media:group").and_then(|group| group.get("media:thumbnail")))
            .first()
            .and_then(|thumb| thumb.attr("url")),
    )
    .map(str::to_string);

    NormalizedVideoEntry {
        id,
        title,
        url,
        published_at,
        thumbnail_url,
    }
}

fn fallback_url(id: &str) -> String {
    if id.is_empty() {
        HOMEPAGE_URL.to_string()
    } else {
        format!("{WATCH_BASE_URL}?v={id}")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
