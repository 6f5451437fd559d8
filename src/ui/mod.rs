mod controls;
mod lap_list;
pub mod layout;
mod readout;
mod status_bar;
pub mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(state.theme.base()), area);

    let app_layout = layout::compute_layout(area);
    render_header(frame, app_layout.header, state);
    readout::render(frame, app_layout.readout, state);
    controls::render(frame, &app_layout.controls, state);
    lap_list::render(frame, app_layout.laps, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(vec![
        Span::styled(" NEOCHRON ", state.theme.title()),
        Span::styled("stopwatch", state.theme.label()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler::apply_command;
    use crate::app::command::Command;
    use crate::config::{AppConfig, KeyMap};
    use crate::stopwatch::ManualClock;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn new_state() -> (AppState, ManualClock) {
        let clock = ManualClock::new(0);
        let state = AppState::new(&AppConfig::default(), KeyMap::default(), Box::new(clock.clone()));
        (state, clock)
    }

    #[test]
    fn test_initial_screen() {
        let (state, _clock) = new_state();
        let screen = draw(&state);
        assert!(screen.contains("00:00:00.000"));
        assert!(screen.contains("Start [Space]"));
        assert!(screen.contains("Laps (0)"));
        assert!(screen.contains("Press Lap to record times"));
        assert!(screen.contains("READY | dark theme"));
    }

    #[test]
    fn test_running_screen_with_laps() {
        let (mut state, clock) = new_state();
        apply_command(&mut state, Command::Toggle);
        clock.advance(1_000);
        apply_command(&mut state, Command::Lap);
        clock.advance(3_000);
        apply_command(&mut state, Command::Lap);
        clock.advance(2_000);
        apply_command(&mut state, Command::Lap);

        let screen = draw(&state);
        assert!(screen.contains("00:00:06.000"));
        assert!(screen.contains("Stop [Space]"));
        assert!(screen.contains("Laps (3)"));
        assert!(!screen.contains("Press Lap to record times"));
        assert!(screen.contains("00:00:01.00"));
        assert!(screen.contains("fastest"));
        assert!(screen.contains("slowest"));
        assert!(screen.contains("+00:02.00"));
        assert!(screen.contains("-00:01.00"));

        // Newest lap is listed first
        let newest = screen.find("#03").unwrap();
        let oldest = screen.find("#01").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn test_theme_toggle_changes_status() {
        let (mut state, _clock) = new_state();
        apply_command(&mut state, Command::ToggleTheme);
        let screen = draw(&state);
        assert!(screen.contains("READY | light theme"));
        assert!(screen.contains("light [T]"));
    }
}
