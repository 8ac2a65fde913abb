pub mod actions;
pub mod dashboard;
pub mod debounce;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::lyrics::{LyricsCache, LyricsClient};
use crate::spotify::{self, SpotifyClient};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use dashboard::{Dashboard, DashboardSettings, Effect};
use debounce::Debouncer;
use events::{Event, NetworkEvent, TimerEvent};
use state::{AppState, Toast};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    config_path: Option<PathBuf>,
    state: AppState,
    spotify: SpotifyClient,
    lyrics: LyricsClient,
    lyrics_cache: LyricsCache,
    debouncer: Debouncer,
}

impl App {
    pub fn new(cfg: Config, config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let spotify = SpotifyClient::new(&cfg.spotify.api_base, cfg.spotify.search_limit)?;
        let lyrics = LyricsClient::new(&cfg.lyrics.api_base)?;
        let lyrics_cache = LyricsCache::new(cfg.lyrics.cache_size);

        let settings = DashboardSettings {
            debounce: cfg.search.debounce(),
            on_deselect: cfg.lyrics.on_deselect,
            autoplay: cfg.player.autoplay,
        };
        let token = spotify::auth::resolve_token(cfg.spotify.access_token.as_deref());
        let mut state = AppState::new(Dashboard::new(settings, token));
        if !state.dashboard.has_token() {
            state.toast = Some(Toast::error("No access token: run `dashtune auth`"));
            state.status = "Search disabled (no access token)".into();
        }

        Ok(Self {
            cfg,
            config_path,
            state,
            spotify,
            lyrics,
            lyrics_cache,
            debouncer: Debouncer::new(),
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        // No ticker: redraw on input, timer and network events only.
        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            self.state.tick = self.state.tick.wrapping_add(1);
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Timer(TimerEvent::SearchDue { generation }) => {
                    if let Some(effect) = self.state.dashboard.search_due(generation) {
                        self.run_effect(effect, &tx);
                    }
                }
                Event::Network(ne) => self.handle_network(ne),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        self.debouncer.cancel();
        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::InputChar(c) => {
                let mut q = self.state.dashboard.query().to_string();
                q.push(c);
                self.set_query(q, tx);
            }
            Action::Backspace => {
                let mut q = self.state.dashboard.query().to_string();
                if q.pop().is_some() {
                    self.set_query(q, tx);
                }
            }
            Action::ClearInput => self.set_query(String::new(), tx),
            Action::Escape => {
                if self.state.dashboard.query().is_empty() {
                    self.state.should_quit = true;
                } else {
                    self.set_query(String::new(), tx);
                }
            }
            Action::ListUp => self.state.select_prev(),
            Action::ListDown => self.state.select_next(),
            Action::GoTop => self.state.selected = 0,
            Action::GoBottom => self.state.select_last(),
            Action::Activate => {
                let track = self
                    .state
                    .dashboard
                    .results()
                    .get(self.state.selected)
                    .cloned();
                if let Some(track) = track {
                    tracing::info!(uri = %track.uri, "track chosen");
                    self.state.status = format!("Now playing: {} - {}", track.title, track.artist);
                    for effect in self.state.dashboard.choose_track(track) {
                        self.run_effect(effect, tx);
                    }
                    self.state.reset_selection();
                }
            }
            Action::Deselect => {
                self.state.dashboard.clear_playing();
                self.state.status = "Nothing selected".into();
            }
            Action::ReloadToken => self.reload_token(tx),
            Action::Resize => {}
        }
    }

    fn reload_token(&mut self, tx: &mpsc::Sender<Event>) {
        let from_file = match crate::config::load(self.config_path.as_deref()) {
            Ok(cfg) => cfg.spotify.access_token,
            Err(e) => {
                tracing::warn!("reload config failed: {e:#}");
                self.cfg.spotify.access_token.clone()
            }
        };
        let token = spotify::auth::resolve_token(from_file.as_deref());
        let found = token.is_some();
        if let Some(effect) = self.state.dashboard.set_access_token(token) {
            self.run_effect(effect, tx);
        }
        if found {
            self.state.toast = Some(Toast::success("Access token loaded"));
            self.state.status = "Ready".into();
        } else {
            self.state.toast = Some(Toast::error("No access token: run `dashtune auth`"));
            self.state.status = "Search disabled (no access token)".into();
        }
    }

    fn set_query(&mut self, query: String, tx: &mpsc::Sender<Event>) {
        let cleared = query.is_empty();
        if let Some(effect) = self.state.dashboard.set_query(query) {
            self.run_effect(effect, tx);
        }
        if cleared {
            self.state.reset_selection();
        }
    }

    fn run_effect(&mut self, effect: Effect, tx: &mpsc::Sender<Event>) {
        match effect {
            Effect::ScheduleSearch { generation, delay } => {
                let tx = tx.clone();
                self.debouncer.schedule(delay, async move {
                    let _ = tx
                        .send(Event::Timer(TimerEvent::SearchDue { generation }))
                        .await;
                });
            }
            Effect::CancelSearch => self.debouncer.cancel(),
            Effect::Search {
                generation,
                query,
                token,
            } => {
                self.state.status = format!("Searching: {query}");
                let spotify = self.spotify.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let ev = match spotify.search_tracks(&query, &token).await {
                        Ok(tracks) => {
                            tracing::info!(query = %query, results = tracks.len(), "search done");
                            NetworkEvent::SearchResults {
                                generation,
                                query,
                                tracks,
                            }
                        }
                        Err(e) => {
                            tracing::warn!(query = %query, "search failed: {e:#}");
                            NetworkEvent::SearchFailed {
                                generation,
                                message: format!("{e:#}"),
                            }
                        }
                    };
                    let _ = tx.send(Event::Network(ev)).await;
                });
            }
            Effect::FetchLyrics {
                generation,
                track_id,
            } => {
                let client = self.lyrics.clone();
                let cache = self.lyrics_cache.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let outcome = crate::lyrics::fetch_lyrics(&client, &cache, &track_id).await;
                    if let Err(e) = &outcome {
                        tracing::info!(track_id = %track_id, "no lyrics: {e}");
                    }
                    let _ = tx
                        .send(Event::Network(NetworkEvent::LyricsLoaded {
                            generation,
                            track_id,
                            outcome,
                        }))
                        .await;
                });
            }
            Effect::Play { token, track_uri } => {
                let spotify = self.spotify.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let ev = match spotify.start_playback(&token, &track_uri).await {
                        Ok(()) => NetworkEvent::PlaybackStarted { track_uri },
                        Err(e) => {
                            tracing::warn!(track_uri = %track_uri, "playback failed: {e:#}");
                            NetworkEvent::PlaybackFailed {
                                message: format!("{e:#}"),
                            }
                        }
                    };
                    let _ = tx.send(Event::Network(ev)).await;
                });
            }
        }
    }

    fn handle_network(&mut self, ne: NetworkEvent) {
        match ne {
            NetworkEvent::SearchResults {
                generation,
                query,
                tracks,
            } => {
                if self.state.dashboard.apply_search_results(generation, tracks) {
                    self.state.reset_selection();
                    self.state.status = format!(
                        "{} results for \"{query}\"",
                        self.state.dashboard.results().len()
                    );
                }
            }
            NetworkEvent::SearchFailed {
                generation,
                message,
            } => {
                if let Some(notice) = self.state.dashboard.search_failed(generation, message) {
                    self.state.toast = Some(Toast::error(notice));
                }
            }
            NetworkEvent::LyricsLoaded {
                generation,
                track_id,
                outcome,
            } => {
                if self.state.dashboard.apply_lyrics(generation, &track_id, outcome) {
                    let view = self.state.dashboard.lyrics();
                    if let Some(lyrics) = view.lyrics() {
                        self.state.status = format!("{} lyric lines", lyrics.lines.len());
                    } else if let Some(err) = view.error() {
                        self.state.status = format!("Lyrics: {err}");
                    }
                }
            }
            NetworkEvent::PlaybackStarted { track_uri } => {
                // Only worth a toast if it is still the selected track.
                if self.state.dashboard.player_target().track_uri == track_uri {
                    self.state.toast = Some(Toast::success("Playing on active device"));
                }
            }
            NetworkEvent::PlaybackFailed { message } => {
                self.state.toast = Some(Toast::error(format!("Playback failed: {message}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default(), None).unwrap()
    }

    #[test]
    fn test_deselect_reports_nothing_selected() {
        let mut app = app();
        let (tx, _rx) = mpsc::channel(8);

        app.handle_action(Action::Deselect, &tx);
        assert_eq!(app.state.status, "Nothing selected");
        assert!(app.state.dashboard.playing().is_none());
    }

    #[test]
    fn test_reload_token_picks_up_config_file() {
        let dir = std::env::temp_dir().join(format!("dashtune-app-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = std::fs::remove_dir_all(&dir);
        let mut cfg = Config::default();
        cfg.spotify.access_token = Some("from-file".into());
        crate::config::save(&cfg, Some(&path)).unwrap();

        let mut app = App::new(Config::default(), Some(path)).unwrap();
        let (tx, _rx) = mpsc::channel(8);
        app.handle_action(Action::ReloadToken, &tx);
        assert!(app.state.dashboard.has_token());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
