use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config;

pub fn run() -> Result<()> {
    let path = config::config_path()?;

    if path.exists() {
        println!("Config file: {}", path.display());
    } else {
        config::create_default_config(&path)?;
        println!("Created default config at {}", path.display().green());
    }

    Ok(())
}
