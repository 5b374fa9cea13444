use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration at ~/.config/tba/config.toml
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Season shown by `tba events` when --year isn't given
    pub default_year: Option<i32>,

    /// Print event keys next to event names
    #[serde(default)]
    pub show_keys: bool,
}

/// Get the config directory path (~/.config/tba)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("tba");
    Ok(config_dir)
}

/// Get the config file path (~/.config/tba/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/tba/config.toml
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Load config from `path`, using defaults if the file doesn't exist.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Create a default config file with all options commented out.
pub fn create_default_config(path: &Path) -> Result<()> {
    let contents = "\
# tba configuration

# Season to list when --year isn't given:
# default_year = 2024

# Print event keys next to event names:
# show_keys = true
";

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Could not create config directory")?;
    }

    std::fs::write(path, contents).context("Could not write config file")?;

    Ok(())
}
