use log::debug;
use reqwest::Client;

use crate::{
    config::{Credentials, Settings},
    error::Result,
    management::TokenManager,
    spotify::check_status,
    types::{PlaylistItem, PlaylistTracksPage, Track},
    utils,
};

/// Page size requested from the playlist-tracks endpoint (Spotify's maximum).
pub const PAGE_LIMIT: u32 = 100;

/// Collects the tracks of a public playlist as flat output records.
///
/// Extracts the playlist ID from `playlist_url`, authenticates with the
/// client-credentials flow, walks every page of the playlist and flattens
/// the items. The token cache created on the way is removed before this
/// function returns, on success and on error alike.
///
/// # Errors
///
/// - [`crate::error::Error::InvalidInput`] if no playlist ID can be extracted.
///   Nothing is sent to Spotify in that case.
/// - [`crate::error::Error::Upstream`] for any authentication, API or network
///   failure. No partial result is returned.
///
/// # Example
///
/// ```
/// let credentials = Credentials::resolve(None, None)?;
/// let tracks = get_track_info(
///     "spotify:playlist:37i9dQZF1DXcBWIGoYBM5M",
///     credentials,
///     &Settings::from_env(),
/// )
/// .await?;
/// ```
pub async fn get_track_info(
    playlist_url: &str,
    credentials: Credentials,
    settings: &Settings,
) -> Result<Vec<Track>> {
    let playlist_id = utils::extract_playlist_id(playlist_url)?;

    let client = Client::new();
    let mut token_mgr = TokenManager::new(credentials, settings);
    let items =
        get_playlist_items(&client, &mut token_mgr, &settings.api_url, &playlist_id).await?;

    Ok(utils::flatten_items(items))
}

/// Fetches every item of a playlist, following the `next` cursor until the
/// API reports no further page. Items keep the order they were served in.
pub async fn get_playlist_items(
    client: &Client,
    token_mgr: &mut TokenManager,
    api_url: &str,
    playlist_id: &str,
) -> Result<Vec<PlaylistItem>> {
    let mut page_url = first_page_url(api_url, playlist_id);
    let mut items: Vec<PlaylistItem> = Vec::new();

    let pb = utils::spinner("Fetching playlist tracks...");

    loop {
        let page = match get_page(client, token_mgr, &page_url).await {
            Ok(page) => page,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        items.extend(page.items);
        match page.total {
            Some(total) => pb.set_message(format!(
                "Fetching playlist tracks... ({}/{})",
                items.len(),
                total
            )),
            None => pb.set_message(format!("Fetching playlist tracks... ({})", items.len())),
        }
        pb.tick();

        match page.next {
            Some(next) => page_url = next,
            None => break,
        }
    }

    pb.finish_and_clear();
    Ok(items)
}

pub fn first_page_url(api_url: &str, playlist_id: &str) -> String {
    format!(
        "{uri}/playlists/{id}/tracks?limit={limit}&offset=0&additional_types=track",
        uri = api_url.trim_end_matches('/'),
        id = playlist_id,
        limit = PAGE_LIMIT
    )
}

async fn get_page(
    client: &Client,
    token_mgr: &mut TokenManager,
    page_url: &str,
) -> Result<PlaylistTracksPage> {
    let token = token_mgr.get_valid_token(client).await?;
    debug!("GET {}", page_url);

    let response = client.get(page_url).bearer_auth(token).send().await?;
    let response = check_status(response).await?;

    let body = response.text().await?;

    Ok(serde_json::from_str::<PlaylistTracksPage>(&body)?)
}
