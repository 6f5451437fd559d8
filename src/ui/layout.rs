use crate::app::command::Command;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub readout: Rect,
    pub controls: ControlsLayout,
    pub laps: Rect,
    pub status_bar: Rect,
}

/// The clickable button row.
pub struct ControlsLayout {
    pub toggle: Rect,
    pub lap: Rect,
    pub reset: Rect,
    pub theme: Rect,
}

impl ControlsLayout {
    pub fn buttons(&self) -> [(Command, Rect); 4] {
        [
            (Command::Toggle, self.toggle),
            (Command::Lap, self.lap),
            (Command::Reset, self.reset),
            (Command::ToggleTheme, self.theme),
        ]
    }
}

impl AppLayout {
    /// Command of the button under a terminal cell, if any.
    pub fn command_at(&self, column: u16, row: u16) -> Option<Command> {
        let pos = Position::new(column, row);
        self.controls
            .buttons()
            .into_iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(cmd, _)| cmd)
    }
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(6), // Readout
            Constraint::Length(3), // Buttons
            Constraint::Min(3),    // Laps
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(main_chunks[2]);

    AppLayout {
        header: main_chunks[0],
        readout: main_chunks[1],
        controls: ControlsLayout {
            toggle: button_chunks[0],
            lap: button_chunks[1],
            reset: button_chunks[2],
            theme: button_chunks[3],
        },
        laps: main_chunks[3],
        status_bar: main_chunks[4],
    }
}
