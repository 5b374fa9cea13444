use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tba_core::{EventRecord, compare_order};

use crate::config::Config;
use crate::render::{render_event_line, render_week_header};

pub fn run(file: &Path, year: Option<i32>, cfg: &Config) -> Result<()> {
    let mut events = tba_core::load_events(file)
        .with_context(|| format!("Failed to load events from {}", file.display()))?;

    if let Some(year) = year {
        events.retain(|e| e.year == year);
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    events.sort_by(compare_order);

    let multiple_years = events.first().map(|e| e.year) != events.last().map(|e| e.year);

    for (i, group) in group_by_week(&events).iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{}",
            render_week_header(group.year, &group.label, multiple_years)
        );
        for event in &group.events {
            println!("{}", render_event_line(event, cfg.show_keys));
        }
    }

    Ok(())
}

/// Events that share a season and week label
#[derive(Debug)]
pub struct WeekGroup<'a> {
    pub year: i32,
    pub label: String,
    pub events: Vec<&'a EventRecord>,
}

/// Group already-sorted events under their week labels.
///
/// Groups appear in the order their first event does. Events sharing a tier
/// but not a label (championship cities, the two kinds of "Other") can
/// interleave after sorting, so grouping doesn't rely on adjacency.
pub fn group_by_week(events: &[EventRecord]) -> Vec<WeekGroup<'_>> {
    let mut groups: Vec<WeekGroup<'_>> = Vec::new();
    let mut index: HashMap<(i32, String), usize> = HashMap::new();

    for event in events {
        let label = event.week_label();
        match index.entry((event.year, label)) {
            Entry::Occupied(entry) => groups[*entry.get()].events.push(event),
            Entry::Vacant(entry) => {
                let (year, label) = entry.key().clone();
                entry.insert(groups.len());
                groups.push(WeekGroup {
                    year,
                    label,
                    events: vec![event],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use tba_core::EventType;

    fn event(key: &str, year: i32, event_type: EventType, week: Option<u32>) -> EventRecord {
        EventRecord {
            week,
            city: Some("Houston".to_string()),
            ..EventRecord::new(key, year, event_type)
        }
    }

    #[test]
    fn groups_sorted_season_by_label() {
        let mut events = vec![
            event("2019cmptx", 2019, EventType::ChampionshipFinals, None),
            event("2019week", 2019, EventType::Preseason, None),
            event("2019miket", 2019, EventType::District, Some(0)),
            event("2019scmb", 2019, EventType::Regional, Some(0)),
            event("2019cur", 2019, EventType::ChampionshipDivision, None),
            event("2019casj", 2019, EventType::Regional, Some(3)),
        ];
        events.sort_by(compare_order);

        let groups = group_by_week(&events);
        let summary: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|g| {
                (
                    g.label.as_str(),
                    g.events.iter().map(|e| e.key.as_str()).collect(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Preseason", vec!["2019week"]),
                ("Week 1", vec!["2019scmb", "2019miket"]),
                ("Week 4", vec!["2019casj"]),
                ("Championship - Houston", vec!["2019cur", "2019cmptx"]),
            ]
        );
    }

    #[test]
    fn same_label_in_different_years_splits() {
        let mut events = vec![
            event("2019a", 2019, EventType::Offseason, None),
            event("2020a", 2020, EventType::Offseason, None),
        ];
        events.sort_by(compare_order);

        let groups = group_by_week(&events);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].year, 2019);
        assert_eq!(groups[1].year, 2020);
    }

    #[test]
    fn interleaved_championship_cities_share_one_group() {
        let division = |key: &str, city: &str| EventRecord {
            city: Some(city.to_string()),
            ..EventRecord::new(key, 2018, EventType::ChampionshipDivision)
        };
        let mut events = vec![
            division("2018arc", "Detroit"),
            division("2018carv", "Houston"),
            division("2018cur", "Detroit"),
            division("2018gal", "Houston"),
        ];
        events.sort_by(compare_order);

        let groups = group_by_week(&events);
        let summary: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|g| {
                (
                    g.label.as_str(),
                    g.events.iter().map(|e| e.key.as_str()).collect(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Championship - Detroit", vec!["2018arc", "2018cur"]),
                ("Championship - Houston", vec!["2018carv", "2018gal"]),
            ]
        );
    }

    #[test]
    fn week_less_and_unlabeled_events_share_other() {
        let mut events = vec![
            event("2019misc", 2019, EventType::Unlabeled, None),
            event("2019cur", 2019, EventType::ChampionshipDivision, None),
            event("2019nowk", 2019, EventType::Regional, None),
        ];
        events.sort_by(compare_order);

        let groups = group_by_week(&events);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();

        assert_eq!(labels, vec!["Other", "Championship - Houston"]);
        assert_eq!(groups[0].events.len(), 2);
        assert_eq!(groups[0].events[0].key, "2019nowk");
        assert_eq!(groups[0].events[1].key, "2019misc");
    }

    #[test]
    fn no_events_no_groups() {
        assert!(group_by_week(&[]).is_empty());
    }
}
