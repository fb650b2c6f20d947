use std::fmt;

use reqwest::Method;

use crate::{session::SessionId, types::Song};

pub const SEARCH_PATH: &str = "/search";
pub const RECOMMEND_PATH: &str = "/recommend";
pub const PLAYLIST_PATH: &str = "/playlist";
pub const PLAYLIST_ADD_PATH: &str = "/playlist/add";
pub const PLAYLIST_REMOVE_PATH: &str = "/playlist/remove";
pub const PLAYLIST_CLEAR_PATH: &str = "/playlist/clear";

/// Recommendation graph the backend traverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphType {
    SongBased,
    MoodBased,
}

impl GraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::SongBased => "SONG_BASED",
            GraphType::MoodBased => "MOOD_BASED",
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traversal strategy. Fixed per graph type, never chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "DIJKSTRA",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a recommendation is seeded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationQuery {
    SongBased(String),
    MoodBased(String),
}

impl RecommendationQuery {
    pub fn graph_type(&self) -> GraphType {
        match self {
            RecommendationQuery::SongBased(_) => GraphType::SongBased,
            RecommendationQuery::MoodBased(_) => GraphType::MoodBased,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            RecommendationQuery::SongBased(_) => Algorithm::Bfs,
            RecommendationQuery::MoodBased(_) => Algorithm::Dijkstra,
        }
    }

    /// The value sent as `songId`: a song id, or the mood label for mood queries.
    pub fn seed(&self) -> &str {
        match self {
            RecommendationQuery::SongBased(id) => id,
            RecommendationQuery::MoodBased(mood) => mood,
        }
    }
}

/// A fully described request, independent of the HTTP client that sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequestSpec {
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Song>,
}

impl HttpRequestSpec {
    fn get(path: &'static str) -> Self {
        HttpRequestSpec {
            method: Method::GET,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    fn with_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// Percent-encoded query string, parameters in insertion order.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<String>>()
            .join("&")
    }

    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if self.query.is_empty() {
            format!("{}{}", base, self.path)
        } else {
            format!("{}{}?{}", base, self.path, self.query_string())
        }
    }

    /// Raw (not encoded) value of a query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub fn search(query: &str) -> HttpRequestSpec {
    HttpRequestSpec::get(SEARCH_PATH).with_param("query", query)
}

/// Builds the recommend request. Song queries go out as `SONG_BASED`/`BFS`,
/// mood queries as `MOOD_BASED`/`DIJKSTRA` with the label in `songId`.
pub fn recommend(query: &RecommendationQuery) -> HttpRequestSpec {
    HttpRequestSpec::get(RECOMMEND_PATH)
        .with_param("songId", query.seed())
        .with_param("graphType", query.graph_type().as_str())
        .with_param("algorithm", query.algorithm().as_str())
}

pub fn load_playlist(session: &SessionId) -> HttpRequestSpec {
    HttpRequestSpec::get(PLAYLIST_PATH).with_param("sessionId", session.as_str())
}

pub fn add_to_playlist(session: &SessionId, song: &Song) -> HttpRequestSpec {
    HttpRequestSpec {
        method: Method::POST,
        body: Some(song.clone()),
        ..HttpRequestSpec::get(PLAYLIST_ADD_PATH)
    }
    .with_param("sessionId", session.as_str())
}

pub fn remove_from_playlist(session: &SessionId, song_id: &str) -> HttpRequestSpec {
    HttpRequestSpec {
        method: Method::DELETE,
        ..HttpRequestSpec::get(PLAYLIST_REMOVE_PATH)
    }
    .with_param("sessionId", session.as_str())
    .with_param("songId", song_id)
}

pub fn clear_playlist(session: &SessionId) -> HttpRequestSpec {
    HttpRequestSpec {
        method: Method::DELETE,
        ..HttpRequestSpec::get(PLAYLIST_CLEAR_PATH)
    }
    .with_param("sessionId", session.as_str())
}
