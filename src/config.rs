//! Configuration management for sptracks.
//!
//! This module handles loading and accessing configuration values from the
//! command line, environment variables and an optional `.env` file. It provides
//! a centralized way to manage the Spotify API credentials, the API endpoints
//! and the location of the transient token cache.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Explicit values (command-line arguments, highest priority)
//! 2. Environment variables
//! 3. `.env` file in the local data directory (never overrides the environment)
//! 4. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf};

use crate::error::{Error, Result};

pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const ENV_API_URL: &str = "SPOTIFY_API_URL";
pub const ENV_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
pub const ENV_TOKEN_CACHE: &str = "SPTRACKS_TOKEN_CACHE";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up in `sptracks/.env` under the platform-specific local
/// data directory:
/// - Linux: `~/.local/share/sptracks/.env`
/// - macOS: `~/Library/Application Support/sptracks/.env`
/// - Windows: `%LOCALAPPDATA%/sptracks/.env`
///
/// A missing file is not an error. Variables already present in the process
/// environment are left untouched.
///
/// # Errors
///
/// Returns an error string if the file exists but cannot be read or parsed.
pub fn load_env() -> std::result::Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sptracks/.env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Client-credentials pair used to obtain an application token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Resolves credentials against the process environment.
    ///
    /// See [`Credentials::resolve_with`] for the precedence rule.
    pub fn resolve(client_id: Option<String>, client_secret: Option<String>) -> Result<Self> {
        Self::resolve_with(client_id, client_secret, |key| env::var(key).ok())
    }

    /// Resolves each field independently: the explicit value if present and
    /// non-empty, else the environment value if present and non-empty, else
    /// [`Error::MissingCredentials`].
    ///
    /// # Example
    ///
    /// ```
    /// let creds = Credentials::resolve_with(Some("id".into()), None, |key| match key {
    ///     "SPOTIFY_CLIENT_SECRET" => Some("secret".into()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(creds.client_secret, "secret");
    /// ```
    pub fn resolve_with<F>(
        client_id: Option<String>,
        client_secret: Option<String>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |explicit: Option<String>, key: &str| {
            explicit
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(key).filter(|v| !v.is_empty()))
        };

        match (
            pick(client_id, ENV_CLIENT_ID),
            pick(client_secret, ENV_CLIENT_SECRET),
        ) {
            (Some(client_id), Some(client_secret)) => Ok(Self {
                client_id,
                client_secret,
            }),
            _ => Err(Error::MissingCredentials),
        }
    }
}

// Keep the secret out of debug output and logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Endpoints and paths used while talking to Spotify.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Web API base URL without a trailing slash, e.g. `https://api.spotify.com/v1`.
    pub api_url: String,
    /// Accounts service token endpoint.
    pub token_url: String,
    /// Where the token is cached for the lifetime of one run.
    pub token_cache: PathBuf,
}

impl Settings {
    /// Builds settings from the process environment, falling back to the
    /// public Spotify endpoints and the user cache directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = non_empty(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let token_url = non_empty(ENV_TOKEN_URL).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let token_cache = non_empty(ENV_TOKEN_CACHE)
            .map(PathBuf::from)
            .unwrap_or_else(default_token_cache);

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token_url,
            token_cache,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            token_cache: default_token_cache(),
        }
    }
}

fn default_token_cache() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sptracks/token.json");
    path
}
