//! Shared configuration and static content for the folio site.
//!
//! Loads the video-feed settings from the environment and owns the manually
//! curated fallback video list shown when the live feed has nothing to offer.

pub mod app_config;
pub mod config;
pub mod videos;

use thiserror::Error;

pub use app_config::{AppConfig, FeedConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use videos::{default_videos, load_videos, resolve_videos, ManualVideo, VideosFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read videos file {path}: {source}")]
    VideosFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse videos file: {0}")]
    VideosFileParse(#[source] serde_yaml::Error),

    #[error("invalid videos file: {0}")]
    Validation(String),
}
