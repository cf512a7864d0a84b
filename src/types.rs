use serde::{Deserialize, Serialize};

use crate::utils;

/// Response of the accounts service token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Application token as held in memory and in the token cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
    pub client_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    // null for tracks that were removed from Spotify
    #[serde(default)]
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub name: Option<String>,
}

/// Error payloads returned by Spotify.
///
/// The Web API nests a status and message under `error`, the accounts
/// service returns an OAuth error code with an optional description.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    Api { error: ApiErrorDetail },
    Auth {
        error: String,
        error_description: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn message(&self) -> String {
        match self {
            ApiErrorBody::Api { error } => error.message.clone().unwrap_or_default(),
            ApiErrorBody::Auth {
                error,
                error_description,
            } => error_description.clone().unwrap_or_else(|| error.clone()),
        }
    }
}

/// One flattened playlist entry, emitted as a JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub artist: String,
    pub name: String,
    pub url: String,
}

impl From<TrackObject> for Track {
    fn from(track: TrackObject) -> Track {
        Track {
            artist: utils::join_artists(&track.artists),
            name: track.name.unwrap_or_default(),
            url: track.id.as_deref().map(utils::track_url).unwrap_or_default(),
        }
    }
}
