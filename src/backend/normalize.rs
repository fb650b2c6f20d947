use serde_json::Value;
use thiserror::Error;

use crate::{
    backend::transport::TransportError,
    types::{ErrorEnvelope, PlaylistAck, Song},
};

pub const LOAD_PLAYLIST_FAILED: &str = "Failed to load playlist";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        RawResponse {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body text, or a generic status line when the body is blank.
    pub fn status_message(&self) -> String {
        let body = self.body.trim();
        if body.is_empty() {
            format!("HTTP error! status: {}", self.status)
        } else {
            body.to_string()
        }
    }
}

/// Why a song list could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Non-2xx status, network error or an unreadable body.
    #[error("{0}")]
    Transport(String),
    /// The service was reached but had nothing to return.
    #[error("{0}")]
    NoResults(String),
}

impl Failure {
    pub fn message(&self) -> &str {
        match self {
            Failure::Transport(msg) | Failure::NoResults(msg) => msg,
        }
    }

    /// Same class of failure, different text.
    pub fn with_message(&self, message: impl Into<String>) -> Failure {
        match self {
            Failure::Transport(_) => Failure::Transport(message.into()),
            Failure::NoResults(_) => Failure::NoResults(message.into()),
        }
    }
}

/// Normalized result of a song-list request. `Ok` is never empty.
pub type Outcome = Result<Vec<Song>, Failure>;

/// Classifies a song-list response (search or recommend).
///
/// - non-2xx → `Transport(body or status line)`
/// - `{ "message": ... }` → `NoResults(message)`
/// - `[]` → `NoResults(empty_message)`
/// - non-empty array → `Ok(songs)`
pub fn normalize(raw: &RawResponse, empty_message: &str) -> Outcome {
    if !raw.is_success() {
        return Err(Failure::Transport(raw.status_message()));
    }

    let value: Value = serde_json::from_str(&raw.body)
        .map_err(|e| Failure::Transport(format!("Invalid response body: {}", e)))?;

    match value {
        Value::Array(_) => {
            let songs: Vec<Song> = serde_json::from_value(value)
                .map_err(|e| Failure::Transport(format!("Invalid song list: {}", e)))?;
            if songs.is_empty() {
                Err(Failure::NoResults(empty_message.to_string()))
            } else {
                Ok(songs)
            }
        }
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) => Err(Failure::NoResults(message.to_string())),
            None => Err(Failure::Transport(
                "Unexpected response body: expected a song list".to_string(),
            )),
        },
        _ => Err(Failure::Transport(
            "Unexpected response body: expected a song list".to_string(),
        )),
    }
}

/// [`normalize`] for a send that may not have produced a response at all.
pub fn classify(result: Result<RawResponse, TransportError>, empty_message: &str) -> Outcome {
    match result {
        Ok(raw) => normalize(&raw, empty_message),
        Err(e) => Err(Failure::Transport(e.to_string())),
    }
}

/// Failure of a playlist load or mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// Network error, timeout or unreadable body.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx status, message taken from the `{error}` envelope.
    #[error("{0}")]
    Rejected(String),
    /// 2xx with `success: false`.
    #[error("{0}")]
    Declined(String),
    /// Add requested for a song that is not among the displayed results.
    #[error("Song {0} is not among the displayed results")]
    UnknownSong(String),
    /// The control for this operation is already locked by an in-flight call.
    #[error("{0} is already in progress")]
    Busy(String),
}

impl From<TransportError> for PlaylistError {
    fn from(err: TransportError) -> Self {
        PlaylistError::Transport(err.to_string())
    }
}

fn error_message(body: &str, default_message: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|env| env.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| default_message.to_string())
}

/// Parses the playlist load response.
pub fn playlist_songs(raw: &RawResponse) -> Result<Vec<Song>, PlaylistError> {
    if !raw.is_success() {
        return Err(PlaylistError::Rejected(error_message(
            &raw.body,
            LOAD_PLAYLIST_FAILED,
        )));
    }

    serde_json::from_str::<Vec<Song>>(&raw.body)
        .map_err(|e| PlaylistError::Transport(format!("Invalid playlist body: {}", e)))
}

/// Checks a mutation acknowledgement. HTTP success alone is not enough, the
/// body must also carry `success: true`.
pub fn playlist_ack(raw: &RawResponse, default_message: &str) -> Result<(), PlaylistError> {
    if !raw.is_success() {
        return Err(PlaylistError::Rejected(error_message(
            &raw.body,
            default_message,
        )));
    }

    let ack: PlaylistAck = serde_json::from_str(&raw.body)
        .map_err(|e| PlaylistError::Transport(format!("Invalid acknowledgement: {}", e)))?;

    if ack.success {
        Ok(())
    } else {
        Err(PlaylistError::Declined(
            ack.error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| default_message.to_string()),
        ))
    }
}
