use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use quadbeat::{
    cli::{self, PlaylistAction},
    config::{self, Settings},
    types::Song,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Backend base URL (overrides QUADBEAT_API_URL)
    #[clap(long, global = true)]
    api_url: Option<String>,

    /// Reuse an existing session id instead of generating one
    #[clap(long, global = true)]
    session: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search for a song and recommend from the top hit
    Search(SearchOptions),

    /// Recommendations for a mood
    Mood(MoodOptions),

    /// List the configured mood controls
    Moods,

    /// Show or change the session playlist
    Playlist(PlaylistOptions),

    /// Interactive session
    Shell,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search terms
    #[clap(required = true, num_args = 1..)]
    query: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct MoodOptions {
    /// Mood label, e.g. Energetic
    mood: String,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Show or change the session playlist")]
pub struct PlaylistOptions {
    /// Subcommands under `playlist` (e.g., `add`)
    #[command(subcommand)]
    pub command: Option<PlaylistSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistSubcommand {
    /// Add a song to the playlist
    Add(PlaylistAddOpts),
    /// Remove a song from the playlist
    Remove(PlaylistRemoveOpts),
    /// Remove every song from the playlist
    Clear,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistAddOpts {
    /// Song id
    song_id: String,
    #[clap(long)]
    title: Option<String>,
    #[clap(long)]
    artist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistRemoveOpts {
    /// Song id
    song_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment, using defaults. Err: {}", e);
    }

    let cli = Cli::parse();
    let settings = Settings::from_env().with_api_url(cli.api_url);

    match cli.command {
        Command::Search(opt) => cli::search(&settings, cli.session, opt.query.join(" ")).await,
        Command::Mood(opt) => cli::mood(&settings, cli.session, opt.mood).await,
        Command::Moods => cli::moods(&settings),
        Command::Playlist(opt) => {
            let action = match opt.command {
                Some(PlaylistSubcommand::Add(a)) => PlaylistAction::Add(Song {
                    title: a.title,
                    artist: a.artist,
                    ..Song::new(a.song_id)
                }),
                Some(PlaylistSubcommand::Remove(r)) => PlaylistAction::Remove(r.song_id),
                Some(PlaylistSubcommand::Clear) => PlaylistAction::Clear,
                None => PlaylistAction::Show,
            };
            cli::playlist(&settings, cli.session, action).await
        }
        Command::Shell => cli::shell(&settings, cli.session).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
