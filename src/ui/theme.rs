use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Binary display attribute flipped by the theme command.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn bg(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(18, 18, 28),
            Theme::Light => Color::Rgb(240, 240, 245),
        }
    }

    fn fg(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(230, 230, 240),
            Theme::Light => Color::Rgb(30, 30, 40),
        }
    }

    fn muted(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(110, 110, 130),
            Theme::Light => Color::Rgb(140, 140, 155),
        }
    }

    fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(0, 210, 255),
            Theme::Light => Color::Rgb(0, 110, 200),
        }
    }

    fn error(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(255, 85, 110),
            Theme::Light => Color::Rgb(200, 30, 60),
        }
    }

    fn success(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(80, 230, 140),
            Theme::Light => Color::Rgb(20, 150, 70),
        }
    }

    pub fn base(self) -> Style {
        Style::default().fg(self.fg()).bg(self.bg())
    }

    pub fn border(self) -> Style {
        Style::default().fg(self.muted())
    }

    pub fn title(self) -> Style {
        Style::default().fg(self.fg()).add_modifier(Modifier::BOLD)
    }

    pub fn readout(self) -> Style {
        Style::default().fg(self.accent()).add_modifier(Modifier::BOLD)
    }

    pub fn readout_millis(self) -> Style {
        Style::default().fg(self.muted())
    }

    pub fn label(self) -> Style {
        Style::default().fg(self.muted())
    }

    /// Primary button: accent when idle, error colour while running (it then
    /// reads "Stop").
    pub fn primary_button(self, running: bool) -> Style {
        let color = if running { self.error() } else { self.accent() };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn button(self) -> Style {
        Style::default().fg(self.fg())
    }

    pub fn button_disabled(self) -> Style {
        Style::default().fg(self.muted()).add_modifier(Modifier::DIM)
    }

    pub fn lap_number(self) -> Style {
        Style::default().fg(self.muted())
    }

    pub fn lap_time(self) -> Style {
        Style::default().fg(self.fg())
    }

    pub fn lap_fastest(self) -> Style {
        Style::default().fg(self.success()).add_modifier(Modifier::BOLD)
    }

    pub fn lap_slowest(self) -> Style {
        Style::default().fg(self.error()).add_modifier(Modifier::BOLD)
    }

    pub fn lap_delta(self) -> Style {
        Style::default().fg(self.muted())
    }

    pub fn placeholder(self) -> Style {
        Style::default().fg(self.muted()).add_modifier(Modifier::ITALIC)
    }

    pub fn status_bar(self) -> Style {
        Style::default().fg(self.bg()).bg(self.muted())
    }

    pub fn status_running(self) -> Style {
        Style::default()
            .fg(self.bg())
            .bg(self.success())
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_stopped(self) -> Style {
        Style::default().fg(self.bg()).bg(self.fg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_two_values() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.base(), Theme::Light.base());
        assert_ne!(Theme::Dark.primary_button(true), Theme::Dark.primary_button(false));
    }
}
