mod app;
mod config;
mod input;
mod logging;
mod lyrics;
mod spotify;
#[cfg(test)]
mod testutil;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dashtune", version, about = "Search tracks, follow lyrics, drive playback")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive dashboard (default).
    Tui,
    /// Search tracks and print to stdout (headless).
    Search { query: String },
    /// Dump raw Search JSON to stdout (headless).
    SearchJson { query: String },
    /// Print lyrics for a track URI, e.g. spotify:track:<id> (headless).
    Lyrics { uri: String },
    /// Play a track URI on the active device (headless).
    Play { uri: String },

    /// Configure the access token used for search and playback.
    Auth {
        #[command(subcommand)]
        method: AuthCommand,
    },
}

#[derive(Debug, Subcommand)]
enum AuthCommand {
    /// Store an access token directly.
    Token { token: String },
    /// Exchange an authorization code via the auth server and store the token.
    Exchange { code: String },
    /// Forget the stored token.
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let _log_guard = logging::init_file(&cfg.paths.data_dir)?;
            let mouse = cfg.input.mouse;
            let mut app = app::App::new(cfg, cli.config.clone())?;
            let mut terminal = tui::TerminalGuard::enter(mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Search { query } => {
            logging::init_stderr()?;
            let (client, token) = make_client(&cfg)?;
            let tracks = client.search_tracks(&query, &token).await?;
            print_tracks(&tracks);
        }
        Command::SearchJson { query } => {
            logging::init_stderr()?;
            let (client, token) = make_client(&cfg)?;
            let v = client.search_raw(&query, &token).await?;
            println!("{}", serde_json::to_string_pretty(&v)?);
        }
        Command::Lyrics { uri } => {
            logging::init_stderr()?;
            let id = spotify::uri::track_id(&uri)?;
            let client = lyrics::LyricsClient::new(&cfg.lyrics.api_base)?;
            let lyrics = client.show(id).await?;
            println!("# {}", lyrics.sync_type.label());
            for line in &lyrics.lines {
                match line.start_time_ms {
                    Some(ms) => println!("[{:02}:{:02}.{:02}] {}", ms / 60000, (ms % 60000) / 1000, (ms % 1000) / 10, line.words),
                    None => println!("{}", line.words),
                }
            }
        }
        Command::Play { uri } => {
            logging::init_stderr()?;
            spotify::uri::track_id(&uri)?;
            let (client, token) = make_client(&cfg)?;
            client.start_playback(&token, &uri).await?;
            println!("Playing {uri}");
        }
        Command::Auth { method } => {
            logging::init_stderr()?;
            let mut cfg = cfg;
            match method {
                AuthCommand::Token { token } => {
                    if spotify::AccessToken::new(token.as_str()).is_none() {
                        anyhow::bail!("token is empty");
                    }
                    cfg.spotify.access_token = Some(token.trim().to_string());
                }
                AuthCommand::Exchange { code } => {
                    let resp = spotify::auth::exchange_code(&cfg.auth.server, &code).await?;
                    if let Some(secs) = resp.expires_in {
                        println!("Token expires in {secs}s.");
                    }
                    if resp.refresh_token.is_some() {
                        // Refresh stays with the auth server.
                        tracing::info!("refresh token issued but not stored");
                    }
                    cfg.spotify.access_token = Some(resp.access_token);
                }
                AuthCommand::Clear => cfg.spotify.access_token = None,
            }
            config::save(&cfg, cli.config.as_deref()).context("save config")?;
            println!("Updated config auth settings.");
        }
    }

    Ok(())
}

fn make_client(cfg: &config::Config) -> anyhow::Result<(spotify::SpotifyClient, spotify::AccessToken)> {
    let token = spotify::auth::resolve_token(cfg.spotify.access_token.as_deref()).with_context(|| {
        format!(
            "no access token: set {} or run `dashtune auth`",
            spotify::auth::TOKEN_ENV
        )
    })?;
    let client = spotify::SpotifyClient::new(&cfg.spotify.api_base, cfg.spotify.search_limit)?;
    Ok((client, token))
}

fn print_tracks(tracks: &[spotify::Track]) {
    for (i, t) in tracks.iter().enumerate() {
        let artist = if t.artist.is_empty() {
            String::new()
        } else {
            format!(" - {}", t.artist)
        };
        println!("{:02}. {}{}  ({})", i + 1, t.title, artist, t.uri);
    }
}
