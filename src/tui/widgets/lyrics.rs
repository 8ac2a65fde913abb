//! Lyrics pane

use crate::app::dashboard::LyricsView;
use crate::app::state::AppState;
use crate::tui::theme::{get_theme, LoadingSpinner};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let title = match state.dashboard.lyrics() {
        LyricsView::Resolved(l) => format!(" {} Lyrics · {} ", theme.icons.lyrics, l.sync_type.label()),
        _ => format!(" {} Lyrics ", theme.icons.lyrics),
    };
    let block = theme.panel(title, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(theme.palette.fg_secondary);
    let notice = |text: String, style: Style| {
        Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    };

    let paragraph = match state.dashboard.lyrics() {
        LyricsView::Idle => notice("Pick a track to see its lyrics".into(), dim),
        LyricsView::Fetching { .. } => notice(
            format!("{} Loading lyrics...", LoadingSpinner::frame(state.tick)),
            dim,
        ),
        LyricsView::Failed(msg) => notice(
            format!("{} {msg}", theme.icons.error),
            Style::default().fg(theme.palette.error),
        ),
        LyricsView::Resolved(l) if l.lines.is_empty() => notice("No lyrics available".into(), dim),
        LyricsView::Resolved(l) => {
            let style = Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD);
            let lines: Vec<Line> = l
                .lines
                .iter()
                .map(|line| Line::from(Span::styled(line.words.as_str(), style)))
                .collect();
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
        }
    };
    frame.render_widget(paragraph, inner);
}
