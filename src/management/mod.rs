mod controls;
mod playlist;
mod screen;

pub use controls::ControlBoard;
pub use controls::ControlGuard;
pub use controls::ControlId;
pub use controls::ControlState;
pub use playlist::ADD_FAILED;
pub use playlist::CLEAR_FAILED;
pub use playlist::PlaylistSessionManager;
pub use playlist::REMOVE_FAILED;
pub use screen::PlaylistView;
pub use screen::ResultsView;
pub use screen::Screen;
pub use screen::SearchPhase;
