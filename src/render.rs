//! TUI rendering traits for tba-core types.
//!
//! Extension traits that add colored terminal rendering to tba-core types
//! using owo_colors.

use owo_colors::OwoColorize;
use tba_core::{EventRecord, EventType};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventType {
    fn render(&self) -> String {
        let name = self.display_name();
        if self.is_championship() {
            name.yellow().to_string()
        } else if self.is_district_championship() {
            name.cyan().to_string()
        } else {
            name.dimmed().to_string()
        }
    }
}

/// One listing line: name, type and dates.
pub fn render_event_line(event: &EventRecord, show_key: bool) -> String {
    let mut line = format!("  {}", event.display_name());

    if show_key {
        line.push_str(&format!(" {}", format!("({})", event.key).dimmed()));
    }

    let dates = event
        .date_range_label()
        .unwrap_or_else(|| "Dates TBD".to_string());

    format!("{} {} {}", line, event.event_type.render(), dates.dimmed())
}

/// Header for a group of events sharing a week label.
pub fn render_week_header(year: i32, label: &str, show_year: bool) -> String {
    if show_year {
        format!("{} {}", year, label).bold().to_string()
    } else {
        label.bold().to_string()
    }
}

/// Labelled fields for the single-event view.
pub fn render_event_details(event: &EventRecord) -> Vec<String> {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    let mut lines = vec![
        event.friendly_name_with_year().bold().to_string(),
        format!("  {} {}", "Key:".dimmed(), event.key),
        format!("  {} {}", "Type:".dimmed(), event.event_type.render()),
        format!("  {} {}", "Week:".dimmed(), event.week_label()),
        format!(
            "  {} {}",
            "Dates:".dimmed(),
            event.date_range_label().unwrap_or_else(|| "TBD".to_string())
        ),
        format!("  {} {}", "Championship:".dimmed(), yes_no(event.is_championship())),
        format!(
            "  {} {}",
            "District championship:".dimmed(),
            yes_no(event.is_district_championship())
        ),
    ];

    if let Some(city) = &event.city {
        let location = [Some(city.as_str()), event.state_prov.as_deref(), event.country.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("  {} {}", "Location:".dimmed(), location));
    }

    if !event.webcasts.is_empty() {
        let streams = event
            .webcasts
            .iter()
            .map(|w| format!("{}/{}", w.kind, w.channel))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("  {} {}", "Webcasts:".dimmed(), streams));
    }

    lines
}
