//! Local event representation.
//!
//! `EventRecord` is the validated, immutable snapshot of one event. The api
//! module builds these from service payloads; everything else only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::EventCategory;
use crate::date_label::date_range_label;
use crate::event_type::EventType;

/// A competition event
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Service key, e.g. "2019miket"
    pub key: String,
    pub year: i32,
    pub event_type: EventType,
    /// Category name as sent by the service ("Regional", "District Championship", ...)
    pub event_type_name: Option<String>,
    /// Zero-based competition week. Only week-bearing types carry one.
    pub week: Option<u32>,

    pub name: Option<String>,
    pub short_name: Option<String>,
    pub event_code: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// IANA time zone identifier of the venue
    pub timezone: Option<String>,

    // Location
    pub city: Option<String>,
    pub state_prov: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub location_name: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub gmaps_place_id: Option<String>,
    pub gmaps_url: Option<String>,

    pub website: Option<String>,
    pub first_event_id: Option<String>,
    pub district: Option<District>,
    pub webcasts: Vec<Webcast>,

    // Championship structure
    pub division_keys: Vec<String>,
    pub parent_event_key: Option<String>,
    pub playoff_type: Option<i64>,
    pub playoff_type_string: Option<String>,
}

/// The district an event belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub key: String,
    pub abbreviation: String,
    pub display_name: String,
    pub year: i32,
}

/// A video stream for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webcast {
    /// Streaming service: "twitch", "youtube", "livestream", ...
    #[serde(rename = "type")]
    pub kind: String,
    pub channel: String,
    pub file: Option<String>,
    pub date: Option<String>,
}

impl EventRecord {
    /// A record with only the required fields set.
    pub fn new(key: impl Into<String>, year: i32, event_type: EventType) -> Self {
        EventRecord {
            key: key.into(),
            year,
            event_type,
            event_type_name: None,
            week: None,
            name: None,
            short_name: None,
            event_code: None,
            start_date: None,
            end_date: None,
            timezone: None,
            city: None,
            state_prov: None,
            country: None,
            address: None,
            postal_code: None,
            location_name: None,
            lat: None,
            lng: None,
            gmaps_place_id: None,
            gmaps_url: None,
            website: None,
            first_event_id: None,
            district: None,
            webcasts: Vec::new(),
            division_keys: Vec::new(),
            parent_event_key: None,
            playoff_type: None,
            playoff_type_string: None,
        }
    }

    pub fn category(&self) -> EventCategory {
        EventCategory::of(self)
    }

    pub fn is_championship(&self) -> bool {
        self.event_type.is_championship()
    }

    pub fn is_district_championship(&self) -> bool {
        self.event_type.is_district_championship()
    }

    /// Section label for the event's place in the season, e.g. "Week 3".
    pub fn week_label(&self) -> String {
        match self.event_type {
            EventType::ChampionshipDivision | EventType::ChampionshipFinals => {
                // Two championship sites since 2017, told apart by city
                match &self.city {
                    Some(city) if self.year >= 2017 => format!("Championship - {city}"),
                    _ => "Championship".to_string(),
                }
            }
            EventType::Unlabeled => "Other".to_string(),
            EventType::Preseason => "Preseason".to_string(),
            EventType::Offseason => "Offseason".to_string(),
            _ => match self.week {
                None => "Other".to_string(),
                // 2016 opened with a half week, so its stored weeks already read one-based
                Some(0) if self.year == 2016 => "Week 0.5".to_string(),
                Some(week) if self.year == 2016 => format!("Week {week}"),
                Some(week) => format!("Week {}", week + 1),
            },
        }
    }

    /// "2019 Detroit Championship Finals", with fallbacks for missing names.
    pub fn friendly_name_with_year(&self) -> String {
        let name = self
            .short_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Unnamed");
        let type_name = self.event_type_name.as_deref().unwrap_or("Event");

        format!("{} {} {}", self.year, name, type_name)
    }

    /// Best name for listings: short name, then full name, then key.
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.key)
    }

    /// Date range, `None` until both dates are known.
    ///
    /// Start and end are already venue-local calendar days, so the event's
    /// time zone never shifts them.
    pub fn date_range_label(&self) -> Option<String> {
        date_range_label(self.start_date, self.end_date, self.timezone.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(year: i32, event_type: EventType, week: Option<u32>) -> EventRecord {
        EventRecord {
            week,
            ..EventRecord::new("test", year, event_type)
        }
    }

    #[test]
    fn week_label_2016_half_week() {
        assert_eq!(event(2016, EventType::Regional, Some(0)).week_label(), "Week 0.5");
        assert_eq!(event(2016, EventType::Regional, Some(3)).week_label(), "Week 3");
    }

    #[test]
    fn week_label_is_one_based() {
        assert_eq!(event(2019, EventType::Regional, Some(3)).week_label(), "Week 4");
        assert_eq!(event(2019, EventType::District, Some(0)).week_label(), "Week 1");
        assert_eq!(
            event(2022, EventType::DistrictChampionshipDivision, Some(6)).week_label(),
            "Week 7"
        );
    }

    #[test]
    fn week_label_championship_city() {
        let detroit = EventRecord {
            city: Some("Detroit".to_string()),
            ..event(2018, EventType::ChampionshipDivision, None)
        };
        assert_eq!(detroit.week_label(), "Championship - Detroit");

        let old = EventRecord {
            city: Some("St. Louis".to_string()),
            ..event(2010, EventType::ChampionshipFinals, None)
        };
        assert_eq!(old.week_label(), "Championship");

        assert_eq!(
            event(2019, EventType::ChampionshipFinals, None).week_label(),
            "Championship"
        );
    }

    #[test]
    fn week_label_championship_city_starts_in_2017() {
        let with_city = |year| EventRecord {
            city: Some("St. Louis".to_string()),
            ..event(year, EventType::ChampionshipDivision, None)
        };

        assert_eq!(with_city(2017).week_label(), "Championship - St. Louis");
        assert_eq!(with_city(2016).week_label(), "Championship");
    }

    #[test]
    fn week_label_fixed_tiers() {
        assert_eq!(event(2019, EventType::Preseason, None).week_label(), "Preseason");
        assert_eq!(event(2019, EventType::Offseason, None).week_label(), "Offseason");
        assert_eq!(event(2019, EventType::Unlabeled, None).week_label(), "Other");
        // Week is ignored outside the week-bearing types
        assert_eq!(event(2019, EventType::Offseason, Some(2)).week_label(), "Offseason");
    }

    #[test]
    fn week_label_missing_week_is_other() {
        assert_eq!(event(2019, EventType::Regional, None).week_label(), "Other");
        assert_eq!(event(2016, EventType::DistrictChampionship, None).week_label(), "Other");
    }

    #[test]
    fn friendly_name_prefers_short_name() {
        let event = EventRecord {
            name: Some("FIRST in Michigan State Championship".to_string()),
            short_name: Some("Michigan".to_string()),
            event_type_name: Some("District Championship".to_string()),
            ..event(2019, EventType::DistrictChampionship, Some(6))
        };

        assert_eq!(
            event.friendly_name_with_year(),
            "2019 Michigan District Championship"
        );
    }

    #[test]
    fn friendly_name_fallbacks() {
        let named = EventRecord {
            name: Some("Palmetto Regional".to_string()),
            ..event(2016, EventType::Regional, Some(0))
        };
        assert_eq!(named.friendly_name_with_year(), "2016 Palmetto Regional Event");

        assert_eq!(
            event(2016, EventType::Regional, Some(0)).friendly_name_with_year(),
            "2016 Unnamed Event"
        );
    }

    #[test]
    fn record_flags_follow_type() {
        let cmp = event(2019, EventType::ChampionshipDivision, None);
        let dcmp = event(2019, EventType::DistrictChampionshipDivision, Some(5));

        assert!(cmp.is_championship());
        assert!(!cmp.is_district_championship());
        assert!(dcmp.is_district_championship());
        assert!(!dcmp.is_championship());
    }

    #[test]
    fn date_range_label_needs_both_dates() {
        let mut record = event(2023, EventType::Regional, Some(4));
        record.start_date = NaiveDate::from_ymd_opt(2023, 4, 1);
        assert_eq!(record.date_range_label(), None);

        record.end_date = NaiveDate::from_ymd_opt(2023, 4, 3);
        record.timezone = Some("America/New_York".to_string());
        assert_eq!(record.date_range_label().as_deref(), Some("Apr 01 to Apr 03"));
    }
}
