use super::dashboard::Dashboard;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Everything the renderer reads. Pipeline state lives in `dashboard`;
/// the rest is view bookkeeping.
pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub dashboard: Dashboard,

    // Result list cursor
    pub selected: usize,
    pub scroll_offset: usize,

    pub toast: Option<Toast>,
    pub status: String,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            dashboard,
            selected: 0,
            scroll_offset: 0,
            toast: None,
            status: String::new(),
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.dashboard.results().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_last(&mut self) {
        self.selected = self.dashboard.results().len().saturating_sub(1);
    }

    /// Call after the result list was replaced.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dashboard::DashboardSettings;
    use crate::spotify::{AccessToken, Track};

    fn state_with_results(n: usize) -> AppState {
        let mut dash = Dashboard::new(DashboardSettings::default(), AccessToken::new("tok"));
        let generation = match dash.set_query("q") {
            Some(crate::app::dashboard::Effect::ScheduleSearch { generation, .. }) => generation,
            other => panic!("unexpected {other:?}"),
        };
        dash.search_due(generation);
        let tracks = (0..n)
            .map(|i| Track {
                artist: "A".into(),
                title: format!("T{i}"),
                uri: format!("spotify:track:{i}"),
                album_url: String::new(),
            })
            .collect();
        dash.apply_search_results(generation, tracks);
        AppState::new(dash)
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut s = state_with_results(3);
        s.select_prev();
        assert_eq!(s.selected, 0);
        for _ in 0..5 {
            s.select_next();
        }
        assert_eq!(s.selected, 2);
        s.select_last();
        assert_eq!(s.selected, 2);

        let mut empty = state_with_results(0);
        empty.select_next();
        empty.select_last();
        assert_eq!(empty.selected, 0);
    }

    #[test]
    fn test_update_scroll_follows_cursor() {
        let mut s = state_with_results(10);
        s.selected = 7;
        s.update_scroll(3);
        assert_eq!(s.scroll_offset, 5);
        s.selected = 2;
        s.update_scroll(3);
        assert_eq!(s.scroll_offset, 2);
    }
}
