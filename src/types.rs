use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// A song as exchanged with the backend.
///
/// Identity is `song_id`; everything else is display metadata and may be
/// missing. `score` is only set on recommendation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub song_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Song {
    pub fn new(song_id: impl Into<String>) -> Self {
        Self {
            song_id: song_id.into(),
            title: None,
            artist: None,
            score: None,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_TITLE)
    }

    pub fn display_artist(&self) -> &str {
        self.artist
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(UNKNOWN_ARTIST)
    }

    /// `Score: 0.90` style label. A zero score is treated as absent, the
    /// backend reports `0.0` for songs that were never scored.
    pub fn score_label(&self) -> Option<String> {
        self.score
            .filter(|s| *s != 0.0)
            .map(|s| format!("Score: {:.2}", s))
    }
}

/// Acknowledgement body returned by every playlist mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{ "error": "..." }` body the playlist endpoints send with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<String>,
}

#[derive(Tabled)]
pub struct SongTableRow {
    #[tabled(rename = "Song ID")]
    pub id: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Score")]
    pub score: String,
}

impl From<&Song> for SongTableRow {
    fn from(song: &Song) -> Self {
        SongTableRow {
            id: song.song_id.clone(),
            title: song.display_title().to_string(),
            artist: song.display_artist().to_string(),
            score: song.score_label().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
pub struct ControlTableRow {
    #[tabled(rename = "Control")]
    pub control: String,
    #[tabled(rename = "State")]
    pub state: String,
    #[tabled(rename = "Label")]
    pub label: String,
}
