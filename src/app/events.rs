use crate::lyrics::{Lyrics, LyricsError};
use crate::spotify::Track;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Timer(TimerEvent),
    Network(NetworkEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum TimerEvent {
    /// The debounce window for this search generation elapsed.
    SearchDue { generation: u64 },
}

#[derive(Debug, Clone)]
pub enum NetworkEvent {
    SearchResults { generation: u64, query: String, tracks: Vec<Track> },
    SearchFailed { generation: u64, message: String },
    LyricsLoaded {
        generation: u64,
        track_id: String,
        outcome: Result<Lyrics, LyricsError>,
    },
    PlaybackStarted { track_uri: String },
    PlaybackFailed { message: String },
}
