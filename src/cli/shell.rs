use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::JoinSet,
};

use crate::{
    cli::{client, render},
    config::Settings,
    controller::{Dispatch, InteractionController},
    error, info, success, warning,
};

pub const HELP: &str = "\
Commands:
  search <query>     recommend from the top search hit
  mood <label>       mood-based recommendations
  moods              show mood controls
  results            show the current recommendations
  add <songId>       add a displayed recommendation to the playlist
  remove <songId>    remove a song from the playlist
  clear              clear the playlist
  playlist           reload and show the playlist
  help               show this help
  quit               leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Mood(String),
    Moods,
    Results,
    Add(String),
    Remove(String),
    Clear,
    Playlist,
    Help,
    Quit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let needs_arg = |usage: &str, build: fn(String) -> ShellCommand| {
        if rest.is_empty() {
            Err(format!("usage: {}", usage))
        } else {
            Ok(build(rest.to_string()))
        }
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(ShellCommand::Empty),
        "search" | "s" => Ok(ShellCommand::Search(rest.to_string())),
        "mood" | "m" => needs_arg("mood <label>", ShellCommand::Mood),
        "moods" => Ok(ShellCommand::Moods),
        "results" | "r" => Ok(ShellCommand::Results),
        "add" | "a" => needs_arg("add <songId>", ShellCommand::Add),
        "remove" | "rm" => needs_arg("remove <songId>", ShellCommand::Remove),
        "clear" => Ok(ShellCommand::Clear),
        "playlist" | "p" => Ok(ShellCommand::Playlist),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(format!("Unknown command {:?}, type help", other)),
    }
}

/// Interactive session. One session id for the lifetime of the shell; every
/// network command runs as its own task so completions may interleave.
pub async fn shell(settings: &Settings, session: Option<String>) {
    let ctl = match client::connect(settings, session) {
        Ok(ctl) => ctl,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    info!("Session {} on {}", ctl.session(), settings.api_url);
    ctl.start().await;
    client::print_playlist(&ctl);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks: JoinSet<()> = JoinSet::new();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Cannot read input: {}", e);
                break;
            }
        };

        match parse_line(&line) {
            Err(message) => warning!("{}", message),
            Ok(ShellCommand::Empty) => {}
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => println!("{}", HELP),
            Ok(ShellCommand::Moods) => println!("{}", render::render_moods(ctl.board())),
            Ok(ShellCommand::Results) => client::print_results(&ctl),
            Ok(command) => {
                let ctl = ctl.clone();
                tasks.spawn(async move { run(&ctl, command).await });
            }
        }

        while let Some(joined) = tasks.try_join_next() {
            if let Err(e) = joined {
                warning!("Task join error: {}", e);
            }
        }
    }

    if !tasks.is_empty() {
        info!("Waiting for {} request(s) to finish", tasks.len());
    }
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            warning!("Task join error: {}", e);
        }
    }
}

async fn run(ctl: &InteractionController, command: ShellCommand) {
    match command {
        ShellCommand::Search(query) => match ctl.submit_search(&query).await {
            Dispatch::Rendered => client::print_results(ctl),
            Dispatch::Skipped => warning!("Nothing to search for."),
            Dispatch::Stale => {}
        },
        ShellCommand::Mood(mood) => match ctl.select_mood(&mood).await {
            Dispatch::Rendered => client::print_results(ctl),
            Dispatch::Skipped => warning!("Mood {} is already loading.", mood),
            Dispatch::Stale => {}
        },
        ShellCommand::Add(song_id) => {
            if ctl.add_to_playlist(&song_id).await.is_ok() {
                success!("Added {} to the playlist", song_id);
                client::print_playlist(ctl);
            }
        }
        ShellCommand::Remove(song_id) => {
            if ctl.remove_from_playlist(&song_id).await.is_ok() {
                success!("Removed {} from the playlist", song_id);
                client::print_playlist(ctl);
            }
        }
        ShellCommand::Clear => {
            if ctl.clear_playlist().await.is_ok() {
                success!("Playlist cleared");
                client::print_playlist(ctl);
            }
        }
        ShellCommand::Playlist => {
            let _ = ctl.load_playlist().await;
            client::print_playlist(ctl);
        }
        _ => {}
    }

    client::print_alerts(ctl);
}
