use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    backend::{
        normalize::{self, PlaylistError},
        request::{self, HttpRequestSpec},
        transport::Transport,
    },
    management::{
        controls::{ControlBoard, ControlId},
        screen::Screen,
    },
    session::SessionId,
    types::Song,
};

pub const ADD_FAILED: &str = "Failed to add song to playlist";
pub const REMOVE_FAILED: &str = "Failed to remove song from playlist";
pub const CLEAR_FAILED: &str = "Failed to clear playlist";

/// Keeps the client's playlist view in step with the server-side playlist.
///
/// Every mutation follows the same template: lock the control it was
/// triggered from, send the request, reload the whole playlist when the
/// server acknowledged with `success: true`, alert otherwise. The control is
/// released on every path. The local view is never patched in place.
///
/// The session is passed into each call rather than stored, so one manager
/// can serve several sessions.
#[derive(Clone)]
pub struct PlaylistSessionManager {
    transport: Arc<dyn Transport>,
    board: Arc<ControlBoard>,
    screen: Arc<Mutex<Screen>>,
}

impl PlaylistSessionManager {
    pub fn new(
        transport: Arc<dyn Transport>,
        board: Arc<ControlBoard>,
        screen: Arc<Mutex<Screen>>,
    ) -> Self {
        Self {
            transport,
            board,
            screen,
        }
    }

    /// Fetches the playlist and replaces the playlist view with it, or with
    /// a playlist-scoped error. The results view is never touched.
    pub async fn load(&self, session: &SessionId) -> Result<Vec<Song>, PlaylistError> {
        self.screen.lock().begin_playlist_load();

        let result = match self.transport.send(&request::load_playlist(session)).await {
            Ok(raw) => normalize::playlist_songs(&raw),
            Err(e) => Err(PlaylistError::from(e)),
        };

        let mut screen = self.screen.lock();
        screen.end_playlist_load();
        match &result {
            Ok(songs) => screen.show_playlist(songs.clone()),
            Err(e) => {
                log::warn!("loading playlist for {} failed: {}", session, e);
                screen.show_playlist_error(e.to_string());
            }
        }

        result
    }

    pub async fn add(&self, session: &SessionId, song: &Song) -> Result<(), PlaylistError> {
        let control = ControlId::AddToPlaylist(song.song_id.clone());
        let Some(_guard) = self.board.try_lock(control.clone()) else {
            return Err(self.busy(&control));
        };

        self.mutate(session, request::add_to_playlist(session, song), ADD_FAILED)
            .await
    }

    pub async fn remove(&self, session: &SessionId, song_id: &str) -> Result<(), PlaylistError> {
        let control = ControlId::RemoveFromPlaylist(song_id.to_string());
        let Some(_guard) = self.board.try_lock(control.clone()) else {
            return Err(self.busy(&control));
        };

        self.mutate(
            session,
            request::remove_from_playlist(session, song_id),
            REMOVE_FAILED,
        )
        .await
    }

    pub async fn clear(&self, session: &SessionId) -> Result<(), PlaylistError> {
        let Some(_guard) = self.board.try_lock(ControlId::ClearPlaylist) else {
            return Err(self.busy(&ControlId::ClearPlaylist));
        };

        self.mutate(session, request::clear_playlist(session), CLEAR_FAILED)
            .await
    }

    fn busy(&self, control: &ControlId) -> PlaylistError {
        let err = PlaylistError::Busy(control.to_string());
        self.screen.lock().alert(err.to_string());
        err
    }

    async fn mutate(
        &self,
        session: &SessionId,
        request: HttpRequestSpec,
        default_message: &str,
    ) -> Result<(), PlaylistError> {
        let result = match self.transport.send(&request).await {
            Ok(raw) => normalize::playlist_ack(&raw, default_message),
            Err(e) => Err(PlaylistError::from(e)),
        };

        match result {
            Ok(()) => {
                // a failed reload is already rendered as the playlist error
                if let Err(e) = self.load(session).await {
                    log::debug!("reload after {} failed: {}", request.path, e);
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("{} for {} failed: {}", request.path, session, e);
                self.screen.lock().alert(e.to_string());
                Err(e)
            }
        }
    }
}
