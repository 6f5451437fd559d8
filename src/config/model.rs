//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! default so the stopwatch runs without a config file.

use crate::ui::theme::Theme;
use serde::{Deserialize, Serialize};

pub const MIN_FRAME_RATE: u32 = 1;
pub const MAX_FRAME_RATE: u32 = 240;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme at startup; `T` flips it for the rest of the run.
    #[serde(default)]
    pub theme: Theme,
    /// Readout refreshes per second while running.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            frame_rate: default_frame_rate(),
        }
    }
}

impl UiConfig {
    pub fn clamped_frame_rate(&self) -> u32 {
        self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE)
    }
}

/// Key names per command. See [`super::keys`] for the accepted names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyConfig {
    #[serde(default = "default_toggle_key")]
    pub toggle: String,
    #[serde(default = "default_lap_key")]
    pub lap: String,
    #[serde(default = "default_reset_key")]
    pub reset: String,
    #[serde(default = "default_theme_key")]
    pub theme: String,
    #[serde(default = "default_quit_key")]
    pub quit: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            toggle: default_toggle_key(),
            lap: default_lap_key(),
            reset: default_reset_key(),
            theme: default_theme_key(),
            quit: default_quit_key(),
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs only ever
/// go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_frame_rate() -> u32 {
    60
}

fn default_toggle_key() -> String {
    "space".into()
}

fn default_lap_key() -> String {
    "l".into()
}

fn default_reset_key() -> String {
    "r".into()
}

fn default_theme_key() -> String {
    "t".into()
}

fn default_quit_key() -> String {
    "q".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_dir() -> String {
    "~/.local/share/neochron/logs".into()
}
