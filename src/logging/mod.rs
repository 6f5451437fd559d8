//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events go to a daily file named
//! `neochron_<date>.log` in the configured log directory (default:
//! `~/.local/share/neochron/logs/`). Nothing is written to the terminal, which
//! the UI owns.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<Option<PathBuf>> {
    if !config.enabled && !verbose {
        return Ok(None);
    }

    let level = if verbose {
        Level::DEBUG
    } else {
        config
            .level
            .parse::<Level>()
            .map_err(|_| anyhow!("Unknown log level `{}`", config.level))?
    };

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_dir.join(format!("neochron_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!(e))
        .with_context(|| "Failed to install logger")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "neochron started");
    Ok(Some(path))
}

/// Expand a leading `~/` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(dir),
        },
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = LoggingConfig::default();
        assert_eq!(init(&config, false).unwrap(), None);
    }

    #[test]
    fn test_bad_level_rejected() {
        let config = LoggingConfig {
            enabled: true,
            level: "chatty".into(),
            log_dir: std::env::temp_dir().display().to_string(),
        };
        assert!(init(&config, false).is_err());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/x"), PathBuf::from("/var/log/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }
}
