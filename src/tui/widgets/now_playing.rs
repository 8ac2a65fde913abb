//! Now Playing widget - what the external player was asked to play

use super::truncate_str;
use crate::app::state::{AppState, ToastKind};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = theme.panel(format!(" {} Player ", icons.music), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Track title
            Constraint::Length(1), // Artist
            Constraint::Length(1), // Status or toast
        ])
        .split(inner);

    let width = inner.width.saturating_sub(2) as usize;
    let target = state.dashboard.player_target();

    let (icon, title, artist) = match state.dashboard.playing() {
        Some(t) => (icons.play, t.title.as_str(), t.artist.as_str()),
        None => (icons.stop, "Not playing", ""),
    };
    let title_line = Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(theme.palette.playing)),
        Span::styled(
            truncate_str(title, width),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title_line), rows[0]);

    let second = if target.access_token.is_none() {
        "player unavailable (no access token)".to_string()
    } else if artist.is_empty() {
        String::new()
    } else {
        format!("{} {artist}", icons.artist)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_str(&second, width),
            Style::default().fg(theme.palette.fg_secondary),
        ))),
        rows[1],
    );

    let status_line = match &state.toast {
        Some(toast) if !toast.is_expired() => {
            let (prefix, color) = match toast.kind {
                ToastKind::Success => (icons.success, theme.palette.playing),
                ToastKind::Error => (icons.error, theme.palette.error),
            };
            Line::from(Span::styled(
                format!("{prefix} {}", truncate_str(&toast.message, width.saturating_sub(2))),
                Style::default().fg(color),
            ))
        }
        _ => Line::from(Span::styled(
            truncate_str(&state.status, width),
            Style::default().fg(theme.palette.fg_secondary),
        )),
    };
    frame.render_widget(Paragraph::new(status_line), rows[2]);
}
