//! Ordering of events within a season.
//!
//! Within one year events run: preseason, the numbered weeks (regionals,
//! districts and district championships), championship divisions,
//! championship finals, offseason, and finally anything unlabeled.
//! Every tier is a named variant so the derived `Ord` is the whole rule table.

use std::cmp::Ordering;

use crate::event::EventRecord;
use crate::event_type::EventType;

/// Where an event sits in its season, independent of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventCategory {
    Preseason,
    Week(WeekSlot),
    ChampionshipDivision,
    ChampionshipFinals,
    Offseason,
    Unlabeled,
}

/// Position of a week-bearing event: its week first, then its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekSlot {
    pub week: EventWeek,
    pub kind: WeekKind,
}

/// Events missing a week go after every event that has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventWeek {
    Known(u32),
    Unknown,
}

/// Tie-break between week-bearing events in the same week.
///
/// District championship divisions play before the district championship
/// they feed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeekKind {
    Regional,
    District,
    DistrictChampionshipDivision,
    DistrictChampionship,
}

impl EventCategory {
    pub fn new(event_type: EventType, week: Option<u32>) -> Self {
        let kind = match event_type {
            EventType::Preseason => return EventCategory::Preseason,
            EventType::ChampionshipDivision => return EventCategory::ChampionshipDivision,
            EventType::ChampionshipFinals => return EventCategory::ChampionshipFinals,
            EventType::Offseason => return EventCategory::Offseason,
            EventType::Unlabeled => return EventCategory::Unlabeled,
            EventType::Regional => WeekKind::Regional,
            EventType::District => WeekKind::District,
            EventType::DistrictChampionshipDivision => WeekKind::DistrictChampionshipDivision,
            EventType::DistrictChampionship => WeekKind::DistrictChampionship,
        };

        EventCategory::Week(WeekSlot {
            week: week.map_or(EventWeek::Unknown, EventWeek::Known),
            kind,
        })
    }

    pub fn of(event: &EventRecord) -> Self {
        Self::new(event.event_type, event.week)
    }
}

/// Season order: year first, then category.
///
/// Event keys and names are ignored, so two distinct events can compare
/// equal. Sorting with this is stable over such ties.
pub fn compare_order(a: &EventRecord, b: &EventRecord) -> Ordering {
    a.year
        .cmp(&b.year)
        .then_with(|| EventCategory::of(a).cmp(&EventCategory::of(b)))
}
