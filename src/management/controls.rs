use std::{fmt, sync::Arc};

use parking_lot::Mutex;

/// A user-facing trigger whose enabled state and label the client tracks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlId {
    Mood(String),
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ClearPlaylist,
}

impl ControlId {
    pub fn idle_label(&self) -> String {
        match self {
            ControlId::Mood(mood) => mood.clone(),
            ControlId::AddToPlaylist(_) => "Add to Playlist".to_string(),
            ControlId::RemoveFromPlaylist(_) => "Remove".to_string(),
            ControlId::ClearPlaylist => "Clear Playlist".to_string(),
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            ControlId::Mood(_) => "Loading...",
            ControlId::AddToPlaylist(_) => "Adding...",
            ControlId::RemoveFromPlaylist(_) => "Removing...",
            ControlId::ClearPlaylist => "Clearing...",
        }
    }

    fn is_mood(&self) -> bool {
        matches!(self, ControlId::Mood(_))
    }

    /// Controls tied to one song card. They only live on the board while busy.
    fn is_per_song(&self) -> bool {
        matches!(
            self,
            ControlId::AddToPlaylist(_) | ControlId::RemoveFromPlaylist(_)
        )
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlId::Mood(mood) => write!(f, "mood {}", mood),
            ControlId::AddToPlaylist(id) => write!(f, "add {}", id),
            ControlId::RemoveFromPlaylist(id) => write!(f, "remove {}", id),
            ControlId::ClearPlaylist => f.write_str("clear playlist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub label: String,
}

impl ControlState {
    fn idle(id: &ControlId) -> Self {
        ControlState {
            enabled: true,
            label: id.idle_label(),
        }
    }

    fn busy(id: &ControlId) -> Self {
        ControlState {
            enabled: false,
            label: id.busy_label().to_string(),
        }
    }
}

/// Enabled/label bookkeeping for every control the client knows about.
///
/// Controls are kept in registration order. Unknown controls read as idle,
/// and per-song controls are dropped from the board once released.
#[derive(Debug, Default)]
pub struct ControlBoard {
    controls: Mutex<Vec<(ControlId, ControlState)>>,
}

impl ControlBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moods<I, S>(moods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let board = Self::new();
        for mood in moods {
            board.register(ControlId::Mood(mood.into()));
        }
        board
    }

    pub fn register(&self, id: ControlId) {
        let mut controls = self.controls.lock();
        if !controls.iter().any(|(c, _)| *c == id) {
            let state = ControlState::idle(&id);
            controls.push((id, state));
        }
    }

    pub fn state(&self, id: &ControlId) -> ControlState {
        self.controls
            .lock()
            .iter()
            .find(|(c, _)| c == id)
            .map(|(_, s)| s.clone())
            .unwrap_or_else(|| ControlState::idle(id))
    }

    /// Number of controls currently tracked.
    pub fn len(&self) -> usize {
        self.controls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.lock().is_empty()
    }

    pub fn is_enabled(&self, id: &ControlId) -> bool {
        self.state(id).enabled
    }

    pub fn moods(&self) -> Vec<(String, ControlState)> {
        self.controls
            .lock()
            .iter()
            .filter_map(|(id, state)| match id {
                ControlId::Mood(mood) => Some((mood.clone(), state.clone())),
                _ => None,
            })
            .collect()
    }

    /// Disables `id` and shows its busy label. Returns `None` while the
    /// control is already disabled; dropping the guard restores it.
    pub fn try_lock(self: &Arc<Self>, id: ControlId) -> Option<ControlGuard> {
        {
            let mut controls = self.controls.lock();
            match controls.iter().position(|(c, _)| *c == id) {
                Some(idx) if !controls[idx].1.enabled => return None,
                Some(idx) => controls[idx].1 = ControlState::busy(&id),
                None => {
                    let state = ControlState::busy(&id);
                    controls.push((id.clone(), state));
                }
            }
        }
        log::debug!("locked {}", id);

        Some(ControlGuard {
            board: Arc::clone(self),
            release: Release::One(id),
        })
    }

    /// Mood controls lock as a group: the chosen mood turns busy, every other
    /// mood is forced back to idle. Dropping the guard resets all of them.
    pub fn lock_mood(self: &Arc<Self>, mood: &str) -> Option<ControlGuard> {
        let target = ControlId::Mood(mood.to_string());
        {
            let mut controls = self.controls.lock();
            if controls
                .iter()
                .any(|(c, s)| *c == target && !s.enabled)
            {
                return None;
            }
            if !controls.iter().any(|(c, _)| *c == target) {
                let state = ControlState::idle(&target);
                controls.push((target.clone(), state));
            }
            for (id, state) in controls.iter_mut().filter(|(c, _)| c.is_mood()) {
                *state = if *id == target {
                    ControlState::busy(id)
                } else {
                    ControlState::idle(id)
                };
            }
        }
        log::debug!("locked {}", target);

        Some(ControlGuard {
            board: Arc::clone(self),
            release: Release::AllMoods,
        })
    }

    fn reset(&self, id: &ControlId) {
        let mut controls = self.controls.lock();
        if id.is_per_song() {
            controls.retain(|(c, _)| c != id);
        } else if let Some((_, state)) = controls.iter_mut().find(|(c, _)| c == id) {
            *state = ControlState::idle(id);
        }
    }

    fn reset_moods(&self) {
        for (id, state) in self.controls.lock().iter_mut().filter(|(c, _)| c.is_mood()) {
            *state = ControlState::idle(id);
        }
    }
}

#[derive(Debug)]
enum Release {
    One(ControlId),
    AllMoods,
}

/// Restores the locked control(s) when dropped, on every exit path.
#[derive(Debug)]
pub struct ControlGuard {
    board: Arc<ControlBoard>,
    release: Release,
}

impl Drop for ControlGuard {
    fn drop(&mut self) {
        match &self.release {
            Release::One(id) => {
                self.board.reset(id);
                log::debug!("released {}", id);
            }
            Release::AllMoods => {
                self.board.reset_moods();
                log::debug!("released mood controls");
            }
        }
    }
}
