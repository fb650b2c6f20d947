use crate::types::Song;

/// What the recommendation area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsView {
    #[default]
    Empty,
    Songs(Vec<Song>),
    Error(String),
}

/// What the playlist area currently shows. An empty `Songs` renders as
/// "Your playlist is empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaylistView {
    #[default]
    NotLoaded,
    Songs(Vec<Song>),
    Error(String),
}

/// Search flow states. `Displaying` and `ErrorDisplayed` are resting states;
/// a new submission starts over from either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    ResolvingRecommendation,
    Displaying,
    ErrorDisplayed,
}

/// Rendered client state. Views are only ever replaced whole, from a flow's
/// completion, so a failed operation leaves the previous view in place.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub results: ResultsView,
    pub playlist: PlaylistView,
    pub search_phase: SearchPhase,
    playlist_loads: usize,
    alerts: Vec<String>,
}

impl Screen {
    /// True while at least one playlist load is in flight.
    pub fn playlist_loading(&self) -> bool {
        self.playlist_loads > 0
    }

    pub fn begin_playlist_load(&mut self) {
        self.playlist_loads += 1;
    }

    pub fn end_playlist_load(&mut self) {
        self.playlist_loads = self.playlist_loads.saturating_sub(1);
    }

    pub fn show_results(&mut self, songs: Vec<Song>) {
        self.results = ResultsView::Songs(songs);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.results = ResultsView::Error(message.into());
    }

    pub fn show_playlist(&mut self, songs: Vec<Song>) {
        self.playlist = PlaylistView::Songs(songs);
    }

    pub fn show_playlist_error(&mut self, message: impl Into<String>) {
        self.playlist = PlaylistView::Error(message.into());
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// A song from the currently displayed result cards.
    pub fn find_result(&self, song_id: &str) -> Option<Song> {
        match &self.results {
            ResultsView::Songs(songs) => songs.iter().find(|s| s.song_id == song_id).cloned(),
            _ => None,
        }
    }

    pub fn playlist_contains(&self, song_id: &str) -> bool {
        match &self.playlist {
            PlaylistView::Songs(songs) => songs.iter().any(|s| s.song_id == song_id),
            _ => false,
        }
    }
}
