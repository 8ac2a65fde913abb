use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::AppState;
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => {
                        Some(InputEvent::Key(k))
                    }
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => Some(InputEvent::Mouse(m)),
                    Ok(CtEvent::Resize(_, _)) => Some(InputEvent::Resize),
                    _ => None,
                };
                if let Some(ev) = forwarded
                    && tx.blocking_send(Event::Input(ev)).is_err()
                {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ListUp),
            MouseEventKind::ScrollDown => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => handle_key(state, k),
    }
}

// The query box always has focus: printable keys edit it, everything else
// drives the result list or the player.
fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    let has_results = !state.dashboard.results().is_empty();

    match k.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::Char('s') if ctrl => Some(Action::Deselect),
        KeyCode::Char('r') if ctrl => Some(Action::ReloadToken),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Esc => Some(Action::Escape),

        KeyCode::Up if has_results => Some(Action::ListUp),
        KeyCode::Down if has_results => Some(Action::ListDown),
        KeyCode::Home if has_results => Some(Action::GoTop),
        KeyCode::End if has_results => Some(Action::GoBottom),
        KeyCode::Enter if has_results => Some(Action::Activate),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dashboard::{Dashboard, DashboardSettings, Effect};
    use crate::spotify::{AccessToken, Track};

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn state(with_results: bool) -> AppState {
        let mut dash = Dashboard::new(DashboardSettings::default(), AccessToken::new("tok"));
        if with_results
            && let Some(Effect::ScheduleSearch { generation, .. }) = dash.set_query("q")
        {
            dash.search_due(generation);
            dash.apply_search_results(
                generation,
                vec![Track {
                    artist: "A".into(),
                    title: "T".into(),
                    uri: "spotify:track:1".into(),
                    album_url: String::new(),
                }],
            );
        }
        AppState::new(dash)
    }

    #[test]
    fn test_typing_edits_query() {
        let s = state(false);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('q'))), Some(Action::InputChar('q')));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Backspace)), Some(Action::Backspace));
        assert_eq!(map_input_to_action(&s, ctrl('u')), Some(Action::ClearInput));
        assert_eq!(map_input_to_action(&s, ctrl('c')), Some(Action::Quit));
        assert_eq!(map_input_to_action(&s, ctrl('r')), Some(Action::ReloadToken));
        assert_eq!(map_input_to_action(&s, ctrl('s')), Some(Action::Deselect));
        assert_eq!(map_input_to_action(&s, ctrl('x')), None);
    }

    #[test]
    fn test_list_keys_need_results() {
        let empty = state(false);
        assert_eq!(map_input_to_action(&empty, key(KeyCode::Enter)), None);
        assert_eq!(map_input_to_action(&empty, key(KeyCode::Down)), None);

        let full = state(true);
        assert_eq!(map_input_to_action(&full, key(KeyCode::Enter)), Some(Action::Activate));
        assert_eq!(map_input_to_action(&full, key(KeyCode::Down)), Some(Action::ListDown));
    }
}
