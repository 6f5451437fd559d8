use crate::app::state::AppState;
use crate::stopwatch::format::TimeParts;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme;
    let block = Block::default()
        .title(" Elapsed ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let fields = TimeParts::from_millis(state.session.elapsed_ms()).readout_fields();
    let sep = Span::styled(":", theme.label());
    let clock_line = Line::from(vec![
        Span::styled(fields[0].clone(), theme.readout()),
        sep.clone(),
        Span::styled(fields[1].clone(), theme.readout()),
        sep,
        Span::styled(fields[2].clone(), theme.readout()),
        Span::styled(".", theme.label()),
        Span::styled(fields[3].clone(), theme.readout_millis()),
    ]);

    let labels = ["h", "m", "s", "ms"]
        .iter()
        .zip(fields.iter())
        .map(|(label, field)| format!("{:^width$}", label, width = field.len()))
        .collect::<Vec<_>>()
        .join(" ");

    let lines = vec![
        Line::default(),
        clock_line,
        Line::from(Span::styled(labels, theme.label())),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
