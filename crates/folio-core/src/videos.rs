//! Manually curated videos shown when the live feed yields nothing.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{AppConfig, ConfigError};

const WATCH_BASE_URL: &str = "https://www.youtube.com/watch";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualVideo {
    /// Platform video identifier.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ManualVideo {
    /// Canonical viewing URL for this video.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("{WATCH_BASE_URL}?v={}", self.id)
    }
}

#[derive(Debug, Deserialize)]
pub struct VideosFile {
    #[serde(default)]
    pub videos: Vec<ManualVideo>,
}

/// Built-in fallback list used when no videos file is configured.
#[must_use]
pub fn default_videos() -> Vec<ManualVideo> {
    vec![ManualVideo {
        id: "y5eainNzHEA".to_string(),
        title: "DONT START 2026 WITHOUT KNOWING AI AGENT : LLMS TO AI AGENTS EXPLAINED COMPLETELY!!"
            .to_string(),
        published_at: None,
        description: None,
        tags: vec![
            "AI Agents".to_string(),
            "LLMs".to_string(),
            "System Design".to_string(),
        ],
    }]
}

/// Load and validate the fallback video list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_videos(path: &Path) -> Result<Vec<ManualVideo>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VideosFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let videos_file: VideosFile =
        serde_yaml::from_str(&content).map_err(ConfigError::VideosFileParse)?;

    validate_videos(&videos_file.videos)?;

    Ok(videos_file.videos)
}

/// Fallback list for the running configuration: the YAML file when
/// `videos_path` is set, the built-in list otherwise.
///
/// # Errors
///
/// Returns `ConfigError` if the configured file is unreadable or invalid.
pub fn resolve_videos(config: &AppConfig) -> Result<Vec<ManualVideo>, ConfigError> {
    match &config.videos_path {
        Some(path) => load_videos(path),
        None => Ok(default_videos()),
    }
}

fn validate_videos(videos: &[ManualVideo]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for video in videos {
        if video.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "video '{}' has an empty id",
                video.title
            )));
        }

        if video.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "video '{}' has an empty title",
                video.id
            )));
        }

        if !seen_ids.insert(video.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate video id: '{}'",
                video.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_yaml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write yaml");
        file
    }

    #[test]
    fn default_videos_are_valid() {
        let videos = default_videos();
        assert_eq!(videos.len(), 1);
        assert!(validate_videos(&videos).is_ok());
    }

    #[test]
    fn watch_url_uses_video_id() {
        let video = &default_videos()[0];
        assert_eq!(
            video.watch_url(),
            "https://www.youtube.com/watch?v=y5eainNzHEA"
        );
    }

    #[test]
    fn load_videos_parses_yaml_file() {
        let file = write_yaml(
            r"
videos:
  - id: abc123
    title: First talk
    publishedAt: '2026-01-05T10:00:00+00:00'
    tags: [RAG]
  - id: def456
    title: Second talk
",
        );

        let videos = load_videos(file.path()).expect("valid videos file");
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "abc123");
        assert_eq!(
            videos[0].published_at.as_deref(),
            Some("2026-01-05T10:00:00+00:00")
        );
        assert_eq!(videos[0].tags, vec!["RAG".to_string()]);
        assert!(videos[1].tags.is_empty());
        assert!(videos[1].description.is_none());
    }

    #[test]
    fn load_videos_accepts_empty_list() {
        let file = write_yaml("videos: []\n");
        let videos = load_videos(file.path()).expect("empty list is valid");
        assert!(videos.is_empty());
    }

    #[test]
    fn load_videos_rejects_blank_id() {
        let file = write_yaml("videos:\n  - id: ' '\n    title: Talk\n");
        let err = load_videos(file.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("empty id")),
            "expected Validation error, got: {err:?}"
        );
    }

    #[test]
    fn load_videos_rejects_duplicate_ids() {
        let file = write_yaml(
            "videos:\n  - id: abc\n    title: One\n  - id: abc\n    title: Two\n",
        );
        let err = load_videos(file.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")),
            "expected Validation error, got: {err:?}"
        );
    }

    #[test]
    fn load_videos_reports_missing_file() {
        let err = load_videos(Path::new("/nonexistent/folio/videos.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::VideosFileIo { .. }));
    }

    #[test]
    fn load_videos_reports_malformed_yaml() {
        let file = write_yaml("videos: [unclosed\n");
        let err = load_videos(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::VideosFileParse(_)));
    }

    #[test]
    fn resolve_videos_uses_builtin_list_without_path() {
        let config = AppConfig {
            feed: crate::FeedConfig::default(),
            log_level: "info".to_string(),
            videos_path: None,
        };
        assert_eq!(resolve_videos(&config).expect("builtin"), default_videos());
    }
}
