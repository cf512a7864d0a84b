//! Error types shared by every layer of the crate.
//!
//! Failures fall into three families: the user handed us something we cannot
//! read a playlist out of, no credentials could be found, or the Spotify side
//! (network, accounts service, Web API) failed. Output failures on stdout are
//! tracked separately so a closed pipe is reported as what it is.

use thiserror::Error;

/// A convenient Result type alias for operations that may fail.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not extract playlist ID from URL: {0}")]
    InvalidInput(String),

    #[error(
        "Spotify API credentials not provided. Either pass them as arguments or set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET environment variables."
    )]
    MissingCredentials,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Anything that went wrong between us and Spotify. Not further classified:
/// callers only ever report it.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Spotify request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Spotify API error (http status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected Spotify response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Upstream(UpstreamError::Http(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Upstream(UpstreamError::Decode(err))
    }
}
