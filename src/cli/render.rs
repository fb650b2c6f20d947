use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    management::{ControlBoard, PlaylistView, ResultsView},
    types::{ControlTableRow, SongTableRow},
};

pub const EMPTY_PLAYLIST: &str = "Your playlist is empty";

pub fn render_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Empty => "No recommendations yet.".to_string(),
        ResultsView::Songs(songs) => {
            let rows: Vec<SongTableRow> = songs.iter().map(SongTableRow::from).collect();
            format!(
                "Found {} recommendations:\n{}",
                songs.len(),
                Table::new(rows)
            )
        }
        ResultsView::Error(message) => message.clone(),
    }
}

pub fn render_playlist(view: &PlaylistView, loading: bool) -> String {
    let body = match view {
        PlaylistView::NotLoaded => "Playlist not loaded.".to_string(),
        PlaylistView::Songs(songs) if songs.is_empty() => EMPTY_PLAYLIST.to_string(),
        PlaylistView::Songs(songs) => {
            let rows: Vec<SongTableRow> = songs
                .iter()
                .map(SongTableRow::from)
                .map(|mut row| {
                    // playlist entries carry no meaningful score
                    row.score.clear();
                    row
                })
                .collect();
            format!("Playlist ({} songs):\n{}", songs.len(), Table::new(rows))
        }
        PlaylistView::Error(message) => message.clone(),
    };

    if loading {
        format!("Loading...\n{}", body)
    } else {
        body
    }
}

pub fn render_moods(board: &ControlBoard) -> String {
    let rows: Vec<ControlTableRow> = board
        .moods()
        .into_iter()
        .map(|(mood, state)| ControlTableRow {
            control: mood,
            state: if state.enabled { "enabled" } else { "busy" }.to_string(),
            label: state.label,
        })
        .collect();

    Table::new(rows).to_string()
}

pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
