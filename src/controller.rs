//! Interaction controller.
//!
//! Wires the user-facing triggers (search submit, mood selection, playlist
//! actions) to the backend flows and renders their outcomes into the shared
//! [`Screen`]. Each trigger is an independent flow; flows are not cancelled
//! and nothing orders one flow against another, so two overlapping flows
//! render in the order they complete unless [`OrderingPolicy::LatestIssued`]
//! is selected. Within one flow the steps run strictly in sequence.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::Mutex;

use crate::{
    backend::{
        normalize::{self, Failure, Outcome, PlaylistError},
        request::{self, RecommendationQuery},
        transport::Transport,
    },
    config::Settings,
    management::{ControlBoard, PlaylistSessionManager, Screen, SearchPhase},
    session::SessionId,
    types::Song,
};

pub const SEARCH_EMPTY: &str = "No songs found matching your search.";
pub const RECOMMEND_EMPTY: &str = "No songs found. Try a different mood or search term.";
pub const RECOMMEND_FAILED: &str = "Error getting recommendations. Please try again.";
const MOOD_NOT_FOUND_MARKER: &str = "No songs found with mood";

/// How completions of overlapping result flows are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingPolicy {
    /// Whichever flow completes last is shown.
    #[default]
    LastResolved,
    /// Only the most recently triggered flow may render; earlier ones are dropped.
    LatestIssued,
}

/// What became of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Ignored: blank search, or the control was already busy.
    Skipped,
    /// The flow ran and its outcome was rendered.
    Rendered,
    /// The flow ran but a newer flow had been issued, nothing was rendered.
    Stale,
}

#[derive(Clone)]
pub struct InteractionController {
    transport: Arc<dyn Transport>,
    session: SessionId,
    board: Arc<ControlBoard>,
    screen: Arc<Mutex<Screen>>,
    playlist: PlaylistSessionManager,
    ordering: OrderingPolicy,
    issued: Arc<AtomicU64>,
    /// Ticket of the most recent search; only it may move `search_phase`.
    search_owner: Arc<AtomicU64>,
}

impl InteractionController {
    pub fn new(transport: Arc<dyn Transport>, session: SessionId, settings: &Settings) -> Self {
        let board = Arc::new(ControlBoard::with_moods(settings.moods.iter().cloned()));
        let screen = Arc::new(Mutex::new(Screen::default()));
        let playlist = PlaylistSessionManager::new(
            Arc::clone(&transport),
            Arc::clone(&board),
            Arc::clone(&screen),
        );

        Self {
            transport,
            session,
            board,
            screen,
            playlist,
            ordering: settings.ordering,
            issued: Arc::new(AtomicU64::new(0)),
            search_owner: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn board(&self) -> &Arc<ControlBoard> {
        &self.board
    }

    pub fn screen(&self) -> &Arc<Mutex<Screen>> {
        &self.screen
    }

    /// Initial playlist load for this session.
    pub async fn start(&self) {
        // failures end up in the playlist view
        let _ = self.load_playlist().await;
    }

    /// Search flow: search, take the top hit, recommend from it.
    ///
    /// Only the first search hit is used; the rest of the hit list is ignored.
    pub async fn submit_search(&self, input: &str) -> Dispatch {
        let query = input.trim();
        if query.is_empty() {
            return Dispatch::Skipped;
        }

        let ticket = self.issue();
        self.search_owner.store(ticket, Ordering::SeqCst);
        self.set_phase(ticket, SearchPhase::Searching);
        log::debug!("search #{} for {:?}", ticket, query);

        let hits = normalize::classify(
            self.transport.send(&request::search(query)).await,
            SEARCH_EMPTY,
        );

        let outcome = match hits {
            Ok(hits) => match hits.first() {
                Some(top) => {
                    self.set_phase(ticket, SearchPhase::ResolvingRecommendation);
                    log::debug!("search #{} recommends from {}", ticket, top.song_id);
                    self.recommend(&RecommendationQuery::SongBased(top.song_id.clone()))
                        .await
                        .map_err(|f| match f {
                            Failure::Transport(_) => f.with_message(RECOMMEND_FAILED),
                            other => other,
                        })
                }
                None => Err(Failure::NoResults(SEARCH_EMPTY.to_string())),
            },
            Err(Failure::Transport(msg)) => Err(Failure::Transport(format!(
                "Failed to search songs: {}",
                msg
            ))),
            Err(other) => Err(other),
        };

        self.render(ticket, outcome, true)
    }

    /// Mood flow. The chosen mood control is busy for the duration; all mood
    /// controls are reset when the flow ends, whatever the outcome.
    pub async fn select_mood(&self, mood: &str) -> Dispatch {
        let Some(_guard) = self.board.lock_mood(mood) else {
            log::debug!("mood {} is already loading", mood);
            return Dispatch::Skipped;
        };

        let ticket = self.issue();
        log::debug!("mood #{} for {:?}", ticket, mood);

        let outcome = self
            .recommend(&RecommendationQuery::MoodBased(mood.to_string()))
            .await
            .map_err(|f| friendly_mood_failure(mood, f));

        self.render(ticket, outcome, false)
    }

    /// Adds a song from the displayed result cards, posting the full card.
    pub async fn add_to_playlist(&self, song_id: &str) -> Result<(), PlaylistError> {
        let song = self.screen.lock().find_result(song_id);
        match song {
            Some(song) => self.add_song(&song).await,
            None => {
                let err = PlaylistError::UnknownSong(song_id.to_string());
                self.screen.lock().alert(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn add_song(&self, song: &Song) -> Result<(), PlaylistError> {
        self.playlist.add(&self.session, song).await
    }

    pub async fn remove_from_playlist(&self, song_id: &str) -> Result<(), PlaylistError> {
        self.playlist.remove(&self.session, song_id).await
    }

    pub async fn clear_playlist(&self) -> Result<(), PlaylistError> {
        self.playlist.clear(&self.session).await
    }

    pub async fn load_playlist(&self) -> Result<Vec<Song>, PlaylistError> {
        self.playlist.load(&self.session).await
    }

    async fn recommend(&self, query: &RecommendationQuery) -> Outcome {
        normalize::classify(
            self.transport.send(&request::recommend(query)).await,
            RECOMMEND_EMPTY,
        )
    }

    fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn owns_search(&self, ticket: u64) -> bool {
        self.search_owner.load(Ordering::SeqCst) == ticket
    }

    /// A superseded search leaves the phase to the newer search.
    fn set_phase(&self, ticket: u64, phase: SearchPhase) {
        let mut screen = self.screen.lock();
        if self.owns_search(ticket) {
            screen.search_phase = phase;
        }
    }

    fn render(&self, ticket: u64, outcome: Outcome, from_search: bool) -> Dispatch {
        if self.ordering == OrderingPolicy::LatestIssued
            && ticket != self.issued.load(Ordering::SeqCst)
        {
            log::debug!("dropping stale completion #{}", ticket);
            if from_search {
                // a newer flow owns the results view, the search ends unrendered
                self.set_phase(ticket, SearchPhase::Idle);
            }
            return Dispatch::Stale;
        }

        let mut screen = self.screen.lock();
        let phase = match outcome {
            Ok(songs) => {
                screen.show_results(songs);
                SearchPhase::Displaying
            }
            Err(failure) => {
                screen.show_error(failure.message());
                SearchPhase::ErrorDisplayed
            }
        };
        if from_search && self.owns_search(ticket) {
            screen.search_phase = phase;
        }
        Dispatch::Rendered
    }
}

/// Rewrites the backend's "no songs with mood" message into one naming the
/// requested mood; other failures pass through unchanged.
pub fn friendly_mood_failure(mood: &str, failure: Failure) -> Failure {
    if failure.message().contains(MOOD_NOT_FOUND_MARKER) {
        failure.with_message(format!(
            "No songs found with mood \"{}\". Please try a different mood.",
            mood
        ))
    } else {
        failure
    }
}
