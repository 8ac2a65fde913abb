//! Search/selection/lyrics coordinator.
//!
//! `Dashboard` owns every piece of pipeline state and never performs I/O.
//! Each input returns the effects the driver must run (timers, requests),
//! and each async completion comes back tagged with the generation it was
//! issued under. A completion whose generation is no longer current is
//! dropped, so a slow response can never overwrite newer state.

use crate::config::DeselectPolicy;
use crate::lyrics::{Lyrics, LyricsError};
use crate::spotify::uri::track_id;
use crate::spotify::{AccessToken, Track};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsView {
    /// Nothing has been selected yet (or the pane was cleared on deselect).
    Idle,
    Fetching { track_id: String },
    Resolved(Lyrics),
    Failed(String),
}

impl LyricsView {
    pub fn lyrics(&self) -> Option<&Lyrics> {
        match self {
            LyricsView::Resolved(l) => Some(l),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LyricsView::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Work the driver must carry out on the dashboard's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace any pending search timer with one firing after `delay`.
    ScheduleSearch { generation: u64, delay: Duration },
    /// Drop the pending search timer, if any.
    CancelSearch,
    Search {
        generation: u64,
        query: String,
        token: AccessToken,
    },
    FetchLyrics { generation: u64, track_id: String },
    Play { token: AccessToken, track_uri: String },
}

/// What the external player is told to play. An empty URI means nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTarget {
    pub access_token: Option<AccessToken>,
    pub track_uri: String,
}

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub debounce: Duration,
    pub on_deselect: DeselectPolicy,
    pub autoplay: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(150),
            on_deselect: DeselectPolicy::Keep,
            autoplay: true,
        }
    }
}

#[derive(Debug)]
pub struct Dashboard {
    settings: DashboardSettings,
    token: Option<AccessToken>,

    query: String,
    results: Vec<Track>,
    search_generation: u64,
    searching: bool,

    playing: Option<Track>,
    lyrics: LyricsView,
    lyrics_generation: u64,
}

impl Dashboard {
    pub fn new(settings: DashboardSettings, token: Option<AccessToken>) -> Self {
        Self {
            settings,
            token,
            query: String::new(),
            results: Vec::new(),
            search_generation: 0,
            searching: false,
            playing: None,
            lyrics: LyricsView::Idle,
            lyrics_generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Track] {
        &self.results
    }

    pub fn playing(&self) -> Option<&Track> {
        self.playing.as_ref()
    }

    pub fn lyrics(&self) -> &LyricsView {
        &self.lyrics
    }

    pub fn searching(&self) -> bool {
        self.searching
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn player_target(&self) -> PlayerTarget {
        PlayerTarget {
            access_token: self.token.clone(),
            track_uri: self.playing.as_ref().map(|t| t.uri.clone()).unwrap_or_default(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Option<Effect> {
        self.query = query.into();
        self.on_search_input_changed()
    }

    pub fn set_access_token(&mut self, token: Option<AccessToken>) -> Option<Effect> {
        if token == self.token {
            return None;
        }
        self.token = token;
        self.on_search_input_changed()
    }

    fn on_search_input_changed(&mut self) -> Option<Effect> {
        // Whatever was pending belongs to the previous input.
        self.search_generation += 1;
        self.searching = false;

        if self.query.is_empty() {
            self.results.clear();
            return Some(Effect::CancelSearch);
        }
        if self.token.is_none() {
            return Some(Effect::CancelSearch);
        }
        Some(Effect::ScheduleSearch {
            generation: self.search_generation,
            delay: self.settings.debounce,
        })
    }

    /// The debounce window for `generation` elapsed.
    pub fn search_due(&mut self, generation: u64) -> Option<Effect> {
        if generation != self.search_generation {
            tracing::debug!(generation, current = self.search_generation, "stale search timer");
            return None;
        }
        let token = self.token.clone()?;
        if self.query.is_empty() {
            return None;
        }
        self.searching = true;
        Some(Effect::Search {
            generation,
            query: self.query.clone(),
            token,
        })
    }

    /// Returns whether the results were applied.
    pub fn apply_search_results(&mut self, generation: u64, tracks: Vec<Track>) -> bool {
        if generation != self.search_generation {
            tracing::debug!(generation, "dropping stale search results");
            return false;
        }
        self.searching = false;
        self.results = tracks;
        true
    }

    /// Returns the notice to show, or `None` when the failure is stale.
    /// Prior results stay in place either way.
    pub fn search_failed(&mut self, generation: u64, message: String) -> Option<String> {
        if generation != self.search_generation {
            return None;
        }
        self.searching = false;
        Some(format!("Search failed: {message}"))
    }

    /// Make `track` the playing track and return to the pre-search state.
    pub fn choose_track(&mut self, track: Track) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.playing = Some(track.clone());
        effects.extend(self.set_query(""));
        effects.extend(self.start_lyrics(&track));
        if self.settings.autoplay
            && let Some(token) = &self.token
        {
            effects.push(Effect::Play {
                token: token.clone(),
                track_uri: track.uri,
            });
        }
        effects
    }

    /// Nothing is playing any more.
    pub fn clear_playing(&mut self) {
        if self.playing.take().is_none() {
            return;
        }
        // Keep lets an in-flight lookup for the last track still land.
        if self.settings.on_deselect == DeselectPolicy::Clear {
            self.lyrics_generation += 1;
            self.lyrics = LyricsView::Idle;
        }
    }

    fn start_lyrics(&mut self, track: &Track) -> Option<Effect> {
        self.lyrics_generation += 1;
        match track_id(&track.uri) {
            Ok(id) => {
                self.lyrics = LyricsView::Fetching {
                    track_id: id.to_string(),
                };
                Some(Effect::FetchLyrics {
                    generation: self.lyrics_generation,
                    track_id: id.to_string(),
                })
            }
            Err(e) => {
                tracing::warn!(uri = %track.uri, "{e}");
                self.lyrics = LyricsView::Failed(e.to_string());
                None
            }
        }
    }

    /// Returns whether the outcome was applied.
    pub fn apply_lyrics(
        &mut self,
        generation: u64,
        track_id: &str,
        outcome: Result<Lyrics, LyricsError>,
    ) -> bool {
        if generation != self.lyrics_generation {
            tracing::debug!(generation, track_id, "dropping stale lyrics");
            return false;
        }
        self.lyrics = match outcome {
            Ok(lyrics) => LyricsView::Resolved(lyrics),
            Err(e) => LyricsView::Failed(e.to_string()),
        };
        true
    }
}
