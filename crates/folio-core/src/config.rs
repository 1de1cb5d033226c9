use crate::app_config::{AppConfig, FeedConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric setting cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric setting cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let defaults = FeedConfig::default();

    let explicit_feed_url = lookup("YOUTUBE_RSS_URL").ok();
    let channel_id = lookup("YOUTUBE_CHANNEL_ID").ok();
    let request_timeout_secs = parse_u64(
        "FOLIO_FEED_TIMEOUT_SECS",
        &defaults.request_timeout_secs.to_string(),
    )?;
    let user_agent = or_default("FOLIO_FEED_USER_AGENT", &defaults.user_agent);
    let cache_ttl_secs = parse_u64(
        "FOLIO_FEED_CACHE_TTL_SECS",
        &defaults.cache_ttl_secs.to_string(),
    )?;
    let max_items = parse_usize("FOLIO_FEED_MAX_ITEMS", &defaults.max_items.to_string())?;

    let log_level = or_default("FOLIO_LOG_LEVEL", "info");
    let videos_path = lookup("FOLIO_VIDEOS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        feed: FeedConfig {
            explicit_feed_url,
            channel_id,
            request_timeout_secs,
            user_agent,
            cache_ttl_secs,
            max_items,
        },
        log_level,
        videos_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
