pub mod keys;
pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use keys::{Key, KeyBindingError, KeyMap};
pub use model::{AppConfig, KeyConfig, LoggingConfig, UiConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("neochron")
        .join("config.toml")
}

/// Load the config from `path`, or the default location. A missing default
/// file yields defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (config_path(), false),
    };
    if !explicit && !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(contents).with_context(|| "Failed to parse config file")?;
    KeyMap::from_names(&config.keys).with_context(|| "Invalid key binding")?;
    Ok(config)
}
