//! Spotify Playlist Tracks CLI Library
//!
//! This library lists the tracks of a public Spotify playlist. It extracts the
//! playlist ID from a URL or URI, authenticates with the client-credentials
//! flow, pages through the playlist and flattens every item into an
//! `{artist, name, url}` record written as a JSON line.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Credentials, endpoints and environment handling
//! - `error` - Error taxonomy and the crate `Result` alias
//! - `management` - Application token lifecycle and the transient token cache
//! - `output` - Line-delimited JSON emitter
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Playlist ID extraction, flattening and small helpers
//!
//! # Example
//!
//! ```
//! use sptracks::{config::{Credentials, Settings}, spotify};
//!
//! #[tokio::main]
//! async fn main() -> sptracks::error::Result<()> {
//!     let credentials = Credentials::resolve(None, None)?;
//!     let tracks = spotify::playlist::get_track_info(
//!         "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M",
//!         credentials,
//!         &Settings::from_env(),
//!     )
//!     .await?;
//!     println!("{} tracks", tracks.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod output;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point to stderr.
///
/// Stdout is reserved for track records, so all status output goes to
/// stderr.
///
/// # Example
///
/// ```
/// info!("Found {} tracks in playlist.", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr and exits
/// the program with status 1.
///
/// Only for the top-level reporting point: destructors of values still on
/// the stack do not run after this.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// Used for recoverable issues that users should notice.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
