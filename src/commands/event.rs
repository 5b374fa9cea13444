use std::path::Path;

use anyhow::{Context, Result};

use crate::render::render_event_details;

pub fn run(file: &Path, key: &str) -> Result<()> {
    let events = tba_core::load_events(file)
        .with_context(|| format!("Failed to load events from {}", file.display()))?;

    let event = events
        .iter()
        .find(|e| e.key == key)
        .with_context(|| format!("No event with key '{}' in {}", key, file.display()))?;

    for line in render_event_details(event) {
        println!("{}", line);
    }

    Ok(())
}
