use crate::app::state::AppState;
use crate::stopwatch::format::format_time;
use crate::stopwatch::LapMarker;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use unicode_width::UnicodeWidthStr;

const NUMBER_WIDTH: usize = 6;
const SPLIT_WIDTH: usize = 14;
const TAG_WIDTH: usize = 9;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme;
    let ledger = state.session.ledger();
    let block = Block::default()
        .title(format!(" Laps ({}) ", ledger.len()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    if ledger.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled("Press Lap to record times", theme.placeholder())),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = ledger
        .iter_recent_first()
        .map(|(index, lap)| {
            let (tag, split_style) = match ledger.marker(index) {
                LapMarker::Fastest => ("fastest", theme.lap_fastest()),
                LapMarker::Slowest => ("slowest", theme.lap_slowest()),
                LapMarker::None => ("", theme.lap_time()),
            };
            let delta = ledger.format_delta(index).unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(pad(&format!(" #{:02}", lap.number), NUMBER_WIDTH), theme.lap_number()),
                Span::styled(pad(&format_time(lap.split_ms, true), SPLIT_WIDTH), split_style),
                Span::styled(pad(tag, TAG_WIDTH), split_style),
                Span::styled(delta, theme.lap_delta()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Right-pad to a display width. `±` and friends are counted by cell width,
/// not bytes.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}
