use crate::app::command::Command;
use crate::app::state::AppState;
use crate::ui::layout::ControlsLayout;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, controls: &ControlsLayout, state: &AppState) {
    for (cmd, area) in controls.buttons() {
        let (label, style) = button(state, cmd);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(state.theme.border());
        let paragraph = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

fn button(state: &AppState, cmd: Command) -> (String, Style) {
    let theme = state.theme;
    let key = state.keys.key_for(cmd);
    match cmd {
        Command::Toggle => {
            let running = state.session.is_running();
            let label = if running { "■ Stop" } else { "▶ Start" };
            (format!("{} [{}]", label, key), theme.primary_button(running))
        }
        Command::Lap => {
            let style = if state.session.lap_recording_enabled() {
                theme.button()
            } else {
                theme.button_disabled()
            };
            (format!("⚑ Lap [{}]", key), style)
        }
        Command::Reset => (format!("↺ Reset [{}]", key), theme.button()),
        // Same glyph in both themes; only the name changes
        Command::ToggleTheme => (format!("◐ {} [{}]", theme.name(), key), theme.button()),
        Command::Quit => (format!("Quit [{}]", key), theme.button()),
    }
}
