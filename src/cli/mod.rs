//! # CLI Module
//!
//! Command implementations behind the `sptracks` binary. Argument parsing and
//! exit codes live in `main.rs`; the functions here do the work and return a
//! [`crate::error::Result`] so every failure reaches a single reporting point.
//!
//! ## Output Contract
//!
//! - **stdout**: data only, one JSON object per line
//! - **stderr**: status messages (`info!`, `warning!`), the progress spinner
//!   and errors
//!
//! ## Usage
//!
//! ```bash
//! sptracks https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! sptracks spotify:playlist:37i9dQZF1DXcBWIGoYBM5M "$CLIENT_ID" "$CLIENT_SECRET"
//! sptracks <url> | jq -r .name
//! ```

mod tracks;

pub use tracks::TracksOptions;
pub use tracks::tracks;
