//! # Spotify Integration Module
//!
//! Thin layer over the Spotify Web API covering what sptracks needs: an
//! application token from the accounts service and the paginated track listing
//! of a playlist.
//!
//! ```text
//! cli::tracks
//!     ↓
//! spotify::playlist  ──uses──▶  management::TokenManager
//!     ↓                               ↓
//! GET /playlists/{id}/tracks     spotify::auth (POST /api/token)
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Client-credentials flow. No user context and no scopes, so only
//!   public playlists are reachable.
//! - [`playlist`] - First page request, `next` cursor following and flattening
//!   into [`crate::types::Track`] records.
//!
//! ## Error Handling
//!
//! There is no retry, backoff or rate-limit handling. Any non-success status is
//! turned into [`UpstreamError::Api`] with the message Spotify sent, transport
//! failures into [`UpstreamError::Http`], and both propagate to the caller
//! unmodified.

pub mod auth;
pub mod playlist;

use reqwest::Response;

use crate::{
    error::{Result, UpstreamError},
    types::ApiErrorBody,
};

/// Passes successful responses through and converts everything else into an
/// [`UpstreamError::Api`] carrying Spotify's own error message when it sent one.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.message(),
        Err(_) => body.trim().to_string(),
    };
    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        message
    };

    Err(UpstreamError::Api {
        status: status.as_u16(),
        message,
    }
    .into())
}
