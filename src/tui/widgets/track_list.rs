//! Query box and search result list

use super::truncate_str;
use crate::app::state::AppState;
use crate::tui::theme::{get_theme, LoadingSpinner};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the search input box
pub fn render_search_box(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let dash = &state.dashboard;

    let title = format!(" {} Search ", theme.icons.search);
    let block = theme.panel(title, true);

    let line = if !dash.has_token() {
        Line::from(Span::styled(
            format!("{}▏ (no access token)", dash.query()),
            Style::default().fg(theme.palette.fg_secondary),
        ))
    } else if dash.searching() {
        Line::from(format!("{} {}", dash.query(), LoadingSpinner::frame(state.tick)))
    } else if dash.query().is_empty() {
        Line::from(Span::styled(
            "▏Search songs/artists",
            Style::default().fg(theme.palette.fg_secondary),
        ))
    } else {
        Line::from(format!("{}▏", dash.query()))
    };

    let p = Paragraph::new(line)
        .style(Style::default().fg(theme.palette.fg_primary))
        .block(block);
    frame.render_widget(p, area);
}

/// Render the result list, one row per track
pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let title = format!(" Results ({}) ", state.dashboard.results().len());
    let block = theme.panel(title, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.dashboard.results().is_empty() {
        let msg = if state.dashboard.searching() {
            format!("{} Searching...", LoadingSpinner::frame(state.tick))
        } else {
            "No results".to_string()
        };
        let empty = Paragraph::new(Line::from(msg))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(empty, inner);
        return;
    }

    let visible_height = inner.height as usize;
    state.update_scroll(visible_height);
    let scroll_offset = state.scroll_offset;
    let width = inner.width.saturating_sub(3) as usize;

    let items: Vec<ListItem> = state
        .dashboard
        .results()
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|t| {
            let title = Span::styled(
                t.title.clone(),
                Style::default().fg(theme.palette.fg_primary),
            );
            let artist = Span::styled(
                format!("  {}", t.artist),
                Style::default().fg(theme.palette.fg_secondary),
            );
            if t.title.chars().count() + t.artist.chars().count() + 2 > width {
                ListItem::new(Line::from(truncate_str(&format!("{} - {}", t.title, t.artist), width)))
            } else {
                ListItem::new(Line::from(vec![title, artist]))
            }
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.saturating_sub(scroll_offset)));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme.palette.bg_highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("\u{f054} "); // nf-fa-chevron_right

    frame.render_stateful_widget(list, inner, &mut list_state);
}
