use std::io::Write;

use crate::{
    config::{Credentials, Settings},
    error::Result,
    info, output, spotify,
};

#[derive(Debug, Clone)]
pub struct TracksOptions {
    pub playlist_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

/// Prints every track of the playlist as one JSON line on stdout.
///
/// Credentials are resolved first, so missing credentials are reported even
/// for an unusable URL. Nothing is written to stdout unless every page was
/// fetched.
pub async fn tracks(opts: TracksOptions, settings: &Settings) -> Result<()> {
    let credentials = Credentials::resolve(opts.client_id, opts.client_secret)?;
    let tracks = spotify::playlist::get_track_info(&opts.playlist_url, credentials, settings).await?;

    info!("Found {} tracks in playlist.", tracks.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_json_lines(&mut out, &tracks)?;
    out.flush()?;

    Ok(())
}
