use std::sync::Arc;

use crate::{
    backend::transport::{HttpTransport, TransportError},
    cli::render,
    config::Settings,
    controller::InteractionController,
    management::{PlaylistView, ResultsView},
    session, warning,
};

/// Builds a controller talking to the configured backend. `session` reuses
/// an existing server-side playlist; without it a fresh id is generated.
pub fn connect(
    settings: &Settings,
    session: Option<String>,
) -> Result<InteractionController, TransportError> {
    let transport = HttpTransport::new(settings.api_url.clone(), settings.request_timeout)?;
    Ok(InteractionController::new(
        Arc::new(transport),
        session::resolve(session),
        settings,
    ))
}

pub fn print_results(ctl: &InteractionController) {
    let view = ctl.screen().lock().results.clone();
    match view {
        ResultsView::Error(message) => warning!("{}", message),
        view => println!("{}", render::render_results(&view)),
    }
}

pub fn print_playlist(ctl: &InteractionController) {
    let (view, loading) = {
        let screen = ctl.screen().lock();
        (screen.playlist.clone(), screen.playlist_loading())
    };
    match view {
        PlaylistView::Error(message) => warning!("{}", message),
        view => println!("{}", render::render_playlist(&view, loading)),
    }
}

pub fn print_alerts(ctl: &InteractionController) {
    let alerts = ctl.screen().lock().take_alerts();
    for alert in alerts {
        warning!("{}", alert);
    }
}
