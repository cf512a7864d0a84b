use chrono::Utc;
use log::debug;
use reqwest::Client;

use crate::{
    config::Credentials,
    error::Result,
    spotify::check_status,
    types::{Token, TokenResponse},
};

/// Requests an application access token using the client-credentials flow.
///
/// Sends the client ID and secret as HTTP basic auth to the accounts service
/// token endpoint with `grant_type=client_credentials`. The resulting token
/// carries no user context, which is enough to read public playlists.
///
/// # Arguments
///
/// * `client` - HTTP client to send the request with
/// * `token_url` - Accounts service token endpoint
/// * `credentials` - Client ID and secret of the registered application
///
/// # Errors
///
/// Rejected credentials surface as an API error with the accounts service's
/// `error_description` (e.g. "Invalid client"). Network failures are returned
/// as [`crate::error::UpstreamError::Http`], a body that is not a token response
/// as [`crate::error::UpstreamError::Decode`]; nothing is retried.
pub async fn request_client_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token> {
    debug!("POST {} (client_id={})", token_url, credentials.client_id);

    let response = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let response = check_status(response).await?;
    let body = response.text().await?;
    let json = serde_json::from_str::<TokenResponse>(&body)?;

    Ok(Token {
        access_token: json.access_token,
        token_type: json.token_type,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp().max(0) as u64,
        client_id: credentials.client_id.clone(),
    })
}
