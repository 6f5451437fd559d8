use crate::config::AppConfig;
use crate::ui::theme::Theme;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "neochron",
    version = env!("CARGO_PKG_VERSION"),
    about = "Terminal stopwatch with lap splits"
)]
pub struct Args {
    /// Config file (default: <config dir>/neochron/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Theme at startup
    #[arg(short, long, value_enum)]
    pub theme: Option<Theme>,

    /// Readout refreshes per second while running
    #[arg(long, value_name = "FPS")]
    pub frame_rate: Option<u32>,

    /// Write debug-level logs to the log directory
    #[arg(short, long, action)]
    pub verbose: bool,
}

impl Args {
    /// Flags win over the config file.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
        if let Some(rate) = self.frame_rate {
            config.ui.frame_rate = rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["neochron", "--theme", "light", "--frame-rate", "30", "-v"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.ui.theme, Theme::Light);
        assert_eq!(config.ui.frame_rate, 30);
        assert!(args.verbose);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["neochron"]);
        let mut config = AppConfig::default();
        config.ui.frame_rate = 24;
        args.apply(&mut config);
        assert_eq!(config.ui.frame_rate, 24);
        assert_eq!(config.ui.theme, Theme::Dark);
        assert!(args.config.is_none());
    }
}
