//! Configuration management for the Quadbeat client.
//!
//! Values come from environment variables, optionally loaded from a `.env`
//! file in the local data directory. Every value has a default, so the client
//! runs against a local backend without any configuration.
//!
//! Precedence:
//! 1. Command-line flags (`--api-url`, `--session`)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Defaults

use std::{env, path::PathBuf, time::Duration};

use crate::controller::OrderingPolicy;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MOODS: [&str; 3] = ["Melancholy", "Energetic", "Neutral"];

/// Loads environment variables from `quadbeat/.env` in the local data directory.
///
/// The directory is created when missing. A missing `.env` file is fine,
/// defaults apply; a malformed one is reported.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/quadbeat/.env`
/// - macOS: `~/Library/Application Support/quadbeat/.env`
/// - Windows: `%LOCALAPPDATA%/quadbeat/.env`
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        log::debug!("no .env at {}, using defaults", path.display());
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("quadbeat/.env");
    path
}

/// Backend base URL from `QUADBEAT_API_URL`.
pub fn api_url() -> String {
    env::var("QUADBEAT_API_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Per-request timeout from `QUADBEAT_REQUEST_TIMEOUT_SECS`. `0` disables it.
pub fn request_timeout() -> Option<Duration> {
    parse_timeout(env::var("QUADBEAT_REQUEST_TIMEOUT_SECS").ok().as_deref())
}

/// Mood controls from `QUADBEAT_MOODS`, comma separated.
pub fn moods() -> Vec<String> {
    parse_moods(env::var("QUADBEAT_MOODS").ok().as_deref())
}

/// Result ordering from `QUADBEAT_DISCARD_STALE_RESULTS`.
pub fn ordering_policy() -> OrderingPolicy {
    if parse_flag(env::var("QUADBEAT_DISCARD_STALE_RESULTS").ok().as_deref()) {
        OrderingPolicy::LatestIssued
    } else {
        OrderingPolicy::LastResolved
    }
}

pub fn parse_timeout(raw: Option<&str>) -> Option<Duration> {
    let secs = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    if secs == 0 {
        None
    } else {
        Some(Duration::from_secs(secs))
    }
}

pub fn parse_moods(raw: Option<&str>) -> Vec<String> {
    let moods: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect();

    if moods.is_empty() {
        DEFAULT_MOODS.iter().map(|m| m.to_string()).collect()
    } else {
        moods
    }
}

pub fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

/// Everything the client needs to start, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub request_timeout: Option<Duration>,
    pub moods: Vec<String>,
    pub ordering: OrderingPolicy,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            api_url: api_url(),
            request_timeout: request_timeout(),
            moods: moods(),
            ordering: ordering_policy(),
        }
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
            moods: DEFAULT_MOODS.iter().map(|m| m.to_string()).collect(),
            ordering: OrderingPolicy::LastResolved,
        }
    }
}
