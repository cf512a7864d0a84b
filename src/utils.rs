use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;

use crate::{
    error::{Error, Result},
    types::{ArtistRef, PlaylistItem, Track},
};

pub const TRACK_URL_PREFIX: &str = "https://open.spotify.com/track/";

// Covers both https://open.spotify.com/playlist/<id> and spotify:playlist:<id>
static PLAYLIST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"playlist[/:]([a-zA-Z0-9]+)").expect("playlist id pattern is valid")
});

/// Extracts the playlist identifier from a playlist URL or URI.
///
/// # Example
///
/// ```
/// let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")?;
/// assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
/// ```
pub fn extract_playlist_id(playlist_url: &str) -> Result<String> {
    PLAYLIST_ID
        .captures(playlist_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::InvalidInput(playlist_url.to_string()))
}

pub fn track_url(track_id: &str) -> String {
    format!("{TRACK_URL_PREFIX}{track_id}")
}

pub fn join_artists(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Turns raw playlist items into output records, dropping items whose track
/// is gone. Order is preserved.
pub fn flatten_items(items: Vec<PlaylistItem>) -> Vec<Track> {
    items
        .into_iter()
        .filter_map(|item| item.track)
        .map(Track::from)
        .collect()
}

/// Spinner on stderr. It has no ticker thread of its own; callers advance it
/// with [`ProgressBar::tick`] as work completes.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(message.into());
    pb.tick();
    pb
}
