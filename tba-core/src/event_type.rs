//! The closed set of event types reported by the data service.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Regional,
    District,
    DistrictChampionship,
    ChampionshipDivision,
    ChampionshipFinals,
    DistrictChampionshipDivision,
    Offseason,
    Preseason,
    Unlabeled,
}

impl EventType {
    pub const ALL: [EventType; 9] = [
        EventType::Regional,
        EventType::District,
        EventType::DistrictChampionship,
        EventType::ChampionshipDivision,
        EventType::ChampionshipFinals,
        EventType::DistrictChampionshipDivision,
        EventType::Offseason,
        EventType::Preseason,
        EventType::Unlabeled,
    ];

    /// Map the service's integer `event_type` code.
    ///
    /// Codes the service adds later are treated as unlabeled so they land
    /// at the end of a season instead of in the middle of the weeks.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => EventType::Regional,
            1 => EventType::District,
            2 => EventType::DistrictChampionship,
            3 => EventType::ChampionshipDivision,
            4 => EventType::ChampionshipFinals,
            5 => EventType::DistrictChampionshipDivision,
            99 => EventType::Offseason,
            100 => EventType::Preseason,
            -1 => EventType::Unlabeled,
            other => {
                tracing::warn!(code = other, "Unknown event type code, treating as unlabeled");
                EventType::Unlabeled
            }
        }
    }

    pub fn code(self) -> i64 {
        match self {
            EventType::Regional => 0,
            EventType::District => 1,
            EventType::DistrictChampionship => 2,
            EventType::ChampionshipDivision => 3,
            EventType::ChampionshipFinals => 4,
            EventType::DistrictChampionshipDivision => 5,
            EventType::Offseason => 99,
            EventType::Preseason => 100,
            EventType::Unlabeled => -1,
        }
    }

    /// Regionals, districts and district championships happen in a numbered week.
    pub fn is_week_bearing(self) -> bool {
        matches!(
            self,
            EventType::Regional
                | EventType::District
                | EventType::DistrictChampionship
                | EventType::DistrictChampionshipDivision
        )
    }

    pub fn is_championship(self) -> bool {
        matches!(
            self,
            EventType::ChampionshipDivision | EventType::ChampionshipFinals
        )
    }

    pub fn is_district_championship(self) -> bool {
        matches!(
            self,
            EventType::DistrictChampionship | EventType::DistrictChampionshipDivision
        )
    }

    /// Name used when the service didn't send an `event_type_string`.
    pub fn display_name(self) -> &'static str {
        match self {
            EventType::Regional => "Regional",
            EventType::District => "District",
            EventType::DistrictChampionship => "District Championship",
            EventType::ChampionshipDivision => "Championship Division",
            EventType::ChampionshipFinals => "Championship Finals",
            EventType::DistrictChampionshipDivision => "District Championship Division",
            EventType::Offseason => "Offseason",
            EventType::Preseason => "Preseason",
            EventType::Unlabeled => "--",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_back_to_themselves() {
        for event_type in EventType::ALL {
            assert_eq!(EventType::from_code(event_type.code()), event_type);
        }
    }

    #[test]
    fn unknown_code_is_unlabeled() {
        assert_eq!(EventType::from_code(6), EventType::Unlabeled);
        assert_eq!(EventType::from_code(-7), EventType::Unlabeled);
    }

    #[test]
    fn championship_flags_are_mutually_exclusive() {
        for event_type in EventType::ALL {
            assert!(
                !(event_type.is_championship() && event_type.is_district_championship()),
                "{:?} is both a championship and a district championship",
                event_type
            );
        }
    }

    #[test]
    fn week_bearing_types() {
        let week_bearing: Vec<EventType> = EventType::ALL
            .into_iter()
            .filter(|t| t.is_week_bearing())
            .collect();

        assert_eq!(
            week_bearing,
            vec![
                EventType::Regional,
                EventType::District,
                EventType::DistrictChampionship,
                EventType::DistrictChampionshipDivision,
            ]
        );
    }
}
