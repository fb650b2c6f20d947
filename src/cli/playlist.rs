use crate::{
    cli::{client, render},
    config::Settings,
    error, info, success,
    types::Song,
};

#[derive(Debug, Clone)]
pub enum PlaylistAction {
    Show,
    Add(Song),
    Remove(String),
    Clear,
}

pub async fn playlist(settings: &Settings, session: Option<String>, action: PlaylistAction) {
    let ctl = match client::connect(settings, session) {
        Ok(ctl) => ctl,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    let pb = render::spinner("Loading playlist...");
    ctl.start().await;
    pb.finish_and_clear();

    match action {
        PlaylistAction::Show => {}
        PlaylistAction::Add(song) => {
            let pb = render::spinner("Adding...");
            let result = ctl.add_song(&song).await;
            pb.finish_and_clear();
            if result.is_ok() {
                success!("Added {} to the playlist", song.display_title());
            }
        }
        PlaylistAction::Remove(song_id) => {
            let pb = render::spinner("Removing...");
            let result = ctl.remove_from_playlist(&song_id).await;
            pb.finish_and_clear();
            if result.is_ok() {
                success!("Removed {} from the playlist", song_id);
            }
        }
        PlaylistAction::Clear => {
            let pb = render::spinner("Clearing...");
            let result = ctl.clear_playlist().await;
            pb.finish_and_clear();
            if result.is_ok() {
                success!("Playlist cleared");
            }
        }
    }

    client::print_alerts(&ctl);
    client::print_playlist(&ctl);
    info!("Session: {}", ctl.session());
}
