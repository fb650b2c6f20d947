//! # CLI Module
//!
//! Command-line layer for Quadbeat. Every command builds an
//! [`InteractionController`](crate::controller::InteractionController) against
//! the configured backend, triggers one or more flows on it and prints the
//! resulting screen state.
//!
//! ## Commands
//!
//! - [`search`] - Search for a song and show recommendations from the top hit
//! - [`mood`] - Mood-based recommendations
//! - [`moods`] - Show the configured mood controls
//! - [`playlist`] - Show or change the session playlist
//! - [`shell`] - Interactive session keeping one session id for its lifetime
//!
//! ## Sessions
//!
//! The playlist lives on the backend, keyed by session id. One-shot commands
//! generate a fresh id unless `--session` is passed, and print the id they
//! used so it can be handed to the next command. The shell keeps one id for
//! as long as it runs.
//!
//! ## Output
//!
//! Rendered views go to stdout as tables; failures and alerts use the
//! `warning!` marker. Network calls in one-shot commands show a spinner.

mod client;
mod playlist;
mod recommend;
mod render;
mod shell;

pub use client::connect;
pub use playlist::PlaylistAction;
pub use playlist::playlist;
pub use recommend::mood;
pub use recommend::moods;
pub use recommend::search;
pub use render::EMPTY_PLAYLIST;
pub use render::render_moods;
pub use render::render_playlist;
pub use render::render_results;
pub use shell::HELP;
pub use shell::ShellCommand;
pub use shell::parse_line;
pub use shell::shell;
