//! Root layout widget - orchestrates main layout structure

use crate::app::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::{lyrics, now_playing, track_list};

/// Main layout structure:
/// ┌────────────────────────────────────┐
/// │ Search                             │
/// ├────────────────────────────────────┤
/// │ Results while a query is active,   │
/// │ lyrics otherwise                   │
/// ├────────────────────────────────────┤
/// │ Player + status                    │
/// └────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(5),    // Results / lyrics
            Constraint::Length(5), // Player
        ])
        .split(frame.area());

    track_list::render_search_box(frame, state, rows[0]);
    if state.dashboard.query().is_empty() {
        lyrics::render(frame, state, rows[1]);
    } else {
        track_list::render(frame, state, rows[1]);
    }
    now_playing::render(frame, state, rows[2]);
}
