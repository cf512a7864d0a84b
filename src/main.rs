use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sptracks::{cli, config, error, warning};

/// Exit status used when the run is interrupted with Ctrl-C.
const EXIT_INTERRUPTED: i32 = 130;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Playlist URL or URI, e.g. https://open.spotify.com/playlist/<id> or spotify:playlist:<id>
    #[clap(required_unless_present = "completions")]
    playlist_url: Option<String>,

    /// Spotify API client ID [default: $SPOTIFY_CLIENT_ID]
    client_id: Option<String>,

    /// Spotify API client secret [default: $SPOTIFY_CLIENT_SECRET]
    client_secret: Option<String>,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = config::load_env() {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let Some(playlist_url) = cli.playlist_url else {
        error!("Missing playlist URL. Run with --help for usage.");
    };

    let opts = cli::TracksOptions {
        playlist_url,
        client_id: cli.client_id,
        client_secret: cli.client_secret,
    };
    let settings = config::Settings::from_env();

    // The run future owns the token cache; finishing or being cancelled by
    // Ctrl-C drops it, which removes the cache file before we exit.
    let result = tokio::select! {
        res = cli::tracks(opts, &settings) => Some(res),
        _ = tokio::signal::ctrl_c() => None,
    };

    let Some(result) = result else {
        warning!("Interrupted.");
        std::process::exit(EXIT_INTERRUPTED);
    };

    if let Err(e) = result {
        error!("Error: {}", e);
    }
}
