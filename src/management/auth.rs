use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;
use reqwest::Client;

use crate::{
    config::{Credentials, Settings},
    error::Result,
    spotify,
    types::Token,
    warning,
};

/// Seconds before expiry at which a token is treated as expired.
pub const EXPIRY_MARGIN_SECS: u64 = 240;

/// Transient on-disk copy of the application token.
///
/// The file is owned once this value has written it or read a token from it.
/// Dropping an owning cache removes the file, whatever path the program takes
/// to exit; a file at the cache path that is not a token is never touched.
/// Removal failures are ignored.
#[derive(Debug)]
pub struct TokenCache {
    path: PathBuf,
    owned: bool,
}

impl TokenCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            owned: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Reads the cached token. A missing or unreadable cache is simply empty.
    pub async fn load(&mut self) -> Option<Token> {
        let content = async_fs::read_to_string(&self.path).await.ok()?;
        let token = serde_json::from_str::<Token>(&content).ok()?;
        self.owned = true;
        Some(token)
    }

    /// Writes the token to the cache path.
    ///
    /// # Errors
    ///
    /// Refuses with [`std::io::ErrorKind::AlreadyExists`] if something other
    /// than a token already sits at the path.
    pub async fn persist(&mut self, token: &Token) -> std::io::Result<()> {
        if !self.owned && async_fs::metadata(&self.path).await.is_ok() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "file exists and is not a token cache",
            ));
        }

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(token)?;
        // anything at the path from here on was written by us
        self.owned = true;
        async_fs::write(&self.path, json).await
    }
}

impl Drop for TokenCache {
    fn drop(&mut self) {
        if self.owned {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Hands out a valid application token, requesting a new one through the
/// client-credentials flow whenever the current one is missing or about to
/// expire.
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    cache: TokenCache,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, settings: &Settings) -> Self {
        TokenManager {
            credentials,
            token_url: settings.token_url.clone(),
            cache: TokenCache::new(settings.token_cache.clone()),
            token: None,
        }
    }

    pub async fn get_valid_token(&mut self, client: &Client) -> Result<String> {
        if let Some(token) = self.token.as_ref().filter(|t| !is_expired(t)) {
            return Ok(token.access_token.clone());
        }

        if let Some(cached) = self.load_cached().await {
            debug!("Using cached token from {}", self.cache.path().display());
            let access_token = cached.access_token.clone();
            self.token = Some(cached);
            return Ok(access_token);
        }

        let token =
            spotify::auth::request_client_token(client, &self.token_url, &self.credentials).await?;
        if let Err(e) = self.cache.persist(&token).await {
            warning!(
                "Couldn't write token to cache at {}: {}",
                self.cache.path().display(),
                e
            );
        }

        let access_token = token.access_token.clone();
        self.token = Some(token);
        Ok(access_token)
    }

    async fn load_cached(&mut self) -> Option<Token> {
        self.cache
            .load()
            .await
            .filter(|t| t.client_id == self.credentials.client_id && !is_expired(t))
    }
}

pub fn is_expired(token: &Token) -> bool {
    let now = Utc::now().timestamp().max(0) as u64;
    is_expired_at(token, now)
}

pub fn is_expired_at(token: &Token, now: u64) -> bool {
    let expires_at = token.obtained_at.saturating_add(token.expires_in);
    now >= expires_at.saturating_sub(EXPIRY_MARGIN_SECS)
}
