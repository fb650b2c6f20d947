use crate::{
    cli::{client, render},
    config::Settings,
    controller::Dispatch,
    error, info, warning,
};

pub async fn search(settings: &Settings, session: Option<String>, query: String) {
    let ctl = match client::connect(settings, session) {
        Ok(ctl) => ctl,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    let pb = render::spinner("Searching...");
    let dispatch = ctl.submit_search(&query).await;
    pb.finish_and_clear();

    match dispatch {
        Dispatch::Skipped => warning!("Nothing to search for."),
        _ => client::print_results(&ctl),
    }
}

pub async fn mood(settings: &Settings, session: Option<String>, mood: String) {
    let ctl = match client::connect(settings, session) {
        Ok(ctl) => ctl,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    if !settings.moods.iter().any(|m| m.eq_ignore_ascii_case(&mood)) {
        info!(
            "{} is not one of the configured moods ({}), asking anyway",
            mood,
            settings.moods.join(", ")
        );
    }

    let pb = render::spinner("Loading...");
    ctl.select_mood(&mood).await;
    pb.finish_and_clear();

    client::print_results(&ctl);
}

pub fn moods(settings: &Settings) {
    let board = crate::management::ControlBoard::with_moods(settings.moods.iter().cloned());
    println!("{}", render::render_moods(&board));
}
