use crate::config::{AppConfig, KeyMap};
use crate::stopwatch::{Clock, Session};
use crate::ui::theme::Theme;
use ratatui::layout::Rect;

/// Everything the UI renders from. Owned by the main loop; no globals.
pub struct AppState {
    pub keys: KeyMap,
    pub session: Session,
    pub theme: Theme,
    /// Last known terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, keys: KeyMap, clock: Box<dyn Clock + Send>) -> Self {
        Self {
            keys,
            session: Session::new(clock),
            theme: config.ui.theme,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn status_line(&self) -> String {
        let state = if self.session.is_running() {
            "RUNNING"
        } else if self.session.elapsed_ms() > 0 {
            "PAUSED"
        } else {
            "READY"
        };
        format!("{} | {} theme", state, self.theme.name())
    }
}
