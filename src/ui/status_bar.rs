use crate::app::command::Command;
use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme;
    let mut parts: Vec<Span> = Vec::new();

    // Running badge
    let badge = if state.session.is_running() {
        Span::styled(" ● ", theme.status_running())
    } else {
        Span::styled(" ■ ", theme.status_stopped())
    };
    parts.push(badge);

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        theme.status_bar(),
    ));

    let hints = key_hints(state);
    // Pad to push the hints to the right edge
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.width() + 1);
    parts.push(Span::styled(" ".repeat(remaining), theme.status_bar()));
    parts.push(Span::styled(format!("{} ", hints), theme.status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn key_hints(state: &AppState) -> String {
    [
        (Command::Toggle, "start/stop"),
        (Command::Lap, "lap"),
        (Command::Reset, "reset"),
        (Command::ToggleTheme, "theme"),
        (Command::Quit, "quit"),
    ]
    .iter()
    .map(|(cmd, what)| format!("{} {}", state.keys.key_for(*cmd), what))
    .collect::<Vec<_>>()
    .join(" · ")
}
