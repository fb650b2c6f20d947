//! Quadbeat song discovery client library
//!
//! This library drives the client side of the Quadbeat song discovery service.
//! It turns user intents (search for a song, pick a mood, maintain a playlist)
//! into requests against the Quadbeat backend, classifies the responses and keeps
//! the rendered state and control bookkeeping consistent with the server.
//!
//! # Modules
//!
//! - `backend` - Request building, response normalization and HTTP transport
//! - `cli` - Command-line interface implementations and terminal rendering
//! - `config` - Configuration management and environment variables
//! - `controller` - Interaction controller wiring triggers to flows
//! - `management` - Control board, rendered screen state and playlist session manager
//! - `session` - Session identity providers
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use quadbeat::{cli, config::{self, Settings}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     config::load_env().await?;
//!     let ctl = cli::connect(&Settings::from_env(), None)?;
//!     ctl.start().await;
//!     ctl.select_mood("Energetic").await;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod controller;
pub mod management;
pub mod session;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Session {} started", session);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist cleared");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal start-up problems in the binary. Flow failures are rendered
/// into the screen state instead and never terminate the client.
///
/// # Example
///
/// ```
/// error!("Cannot build HTTP client: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for alerts raised by playlist mutations and other recoverable issues.
///
/// # Example
///
/// ```
/// warning!("Song already exists in playlist");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
