use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::stopwatch::TickOutcome;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Frame(_) => handle_frame(state),
    }
}

fn handle_frame(state: &mut AppState) -> Vec<Action> {
    state.dirty = true;
    match state.session.tick() {
        TickOutcome::Continue => vec![Action::RequestFrame],
        TickOutcome::Suspend => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.keys.command_for(key.code) {
        Some(cmd) => apply_command(state, cmd),
        None => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let app_layout = layout::compute_layout(state.viewport);
    match app_layout.command_at(mouse.column, mouse.row) {
        Some(cmd) => apply_command(state, cmd),
        None => vec![],
    }
}

pub fn apply_command(state: &mut AppState, cmd: Command) -> Vec<Action> {
    state.dirty = true;
    match cmd {
        Command::Toggle => match state.session.toggle() {
            TickOutcome::Continue => vec![Action::RequestFrame],
            TickOutcome::Suspend => vec![Action::CancelFrame],
        },
        Command::Lap => {
            state.session.record_lap();
            vec![]
        }
        Command::Reset => {
            state.session.reset();
            vec![Action::CancelFrame]
        }
        Command::ToggleTheme => {
            state.theme = state.theme.toggled();
            tracing::debug!(theme = state.theme.name(), "theme toggled");
            vec![]
        }
        Command::Quit => vec![Action::Quit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, KeyMap};
    use crate::stopwatch::ManualClock;
    use crate::ui::theme::Theme;
    use crossterm::event::KeyEventState;

    fn state_with_clock() -> (AppState, ManualClock) {
        let clock = ManualClock::new(0);
        let mut state = AppState::new(&AppConfig::default(), KeyMap::default(), Box::new(clock.clone()));
        state.viewport = Rect::new(0, 0, 80, 24);
        (state, clock)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn test_space_starts_and_requests_frames() {
        let (mut state, clock) = state_with_clock();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char(' '))), vec![Action::RequestFrame]);
        assert!(state.session.is_running());

        clock.advance(500);
        assert_eq!(handle_event(&mut state, AppEvent::Frame(0)), vec![Action::RequestFrame]);
        assert_eq!(state.session.elapsed_ms(), 500);

        assert_eq!(handle_event(&mut state, key(KeyCode::Char(' '))), vec![Action::CancelFrame]);
        assert!(!state.session.is_running());
        assert_eq!(handle_event(&mut state, AppEvent::Frame(1)), vec![]);
    }

    #[test]
    fn test_lap_key_ignored_before_start() {
        let (mut state, clock) = state_with_clock();
        clock.advance(1_000);
        handle_event(&mut state, key(KeyCode::Char('l')));
        assert!(state.session.ledger().is_empty());
    }

    #[test]
    fn test_lap_and_reset_keys() {
        let (mut state, clock) = state_with_clock();
        handle_event(&mut state, key(KeyCode::Char(' ')));
        clock.advance(1_500);
        handle_event(&mut state, key(KeyCode::Char('L')));
        clock.advance(2_500);
        handle_event(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.session.ledger().len(), 2);

        assert_eq!(handle_event(&mut state, key(KeyCode::Char('r'))), vec![Action::CancelFrame]);
        assert!(state.session.ledger().is_empty());
        assert_eq!(state.session.elapsed_ms(), 0);
        assert!(!state.session.is_running());
    }

    #[test]
    fn test_theme_key_flips_theme() {
        let (mut state, _clock) = state_with_clock();
        handle_event(&mut state, key(KeyCode::Char('t')));
        assert_eq!(state.theme, Theme::Light);
        handle_event(&mut state, key(KeyCode::Char('T')));
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_quit_keys() {
        let (mut state, _clock) = state_with_clock();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_key_release_ignored() {
        let (mut state, _clock) = state_with_clock();
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(handle_event(&mut state, AppEvent::Terminal(CEvent::Key(release))).is_empty());
        assert!(!state.session.is_running());
    }

    #[test]
    fn test_click_on_buttons() {
        let (mut state, clock) = state_with_clock();
        let controls = layout::compute_layout(state.viewport).controls;

        let actions = handle_event(&mut state, click(controls.toggle.x + 2, controls.toggle.y + 1));
        assert_eq!(actions, vec![Action::RequestFrame]);
        clock.advance(800);
        handle_event(&mut state, click(controls.lap.x + 2, controls.lap.y + 1));
        assert_eq!(state.session.ledger().len(), 1);

        handle_event(&mut state, click(controls.theme.x + 2, controls.theme.y + 1));
        assert_eq!(state.theme, Theme::Light);

        handle_event(&mut state, click(controls.reset.x + 2, controls.reset.y + 1));
        assert!(state.session.ledger().is_empty());
    }

    #[test]
    fn test_click_outside_buttons_does_nothing() {
        let (mut state, _clock) = state_with_clock();
        assert!(handle_event(&mut state, click(0, 0)).is_empty());
        assert!(!state.session.is_running());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let (mut state, _clock) = state_with_clock();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(100, 40)));
        assert_eq!(state.viewport, Rect::new(0, 0, 100, 40));
        assert!(state.dirty);
    }
}
