//! Conversion from the data service's event payloads.
//!
//! `ApiEvent` mirrors the service's JSON field for field. Converting it into
//! an `EventRecord` validates the dates and maps the numeric event type.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{TbaError, TbaResult};
use crate::event::{District, EventRecord, Webcast};
use crate::event_type::EventType;

const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// An event as returned by the service
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEvent {
    pub key: String,
    pub name: String,
    pub event_code: String,
    pub event_type: i64,
    pub event_type_string: Option<String>,
    pub year: i32,
    pub week: Option<u32>,
    /// "yyyy-MM-dd"
    pub start_date: String,
    /// "yyyy-MM-dd"
    pub end_date: String,
    pub timezone: Option<String>,

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

    pub short_name: Option<String>,
    pub website: Option<String>,
    pub first_event_id: Option<String>,
    pub district: Option<District>,
    pub webcasts: Option<Vec<Webcast>>,
    pub division_keys: Option<Vec<String>>,
    pub parent_event_key: Option<String>,
    pub playoff_type: Option<i64>,
    pub playoff_type_string: Option<String>,
}

impl TryFrom<ApiEvent> for EventRecord {
    type Error = TbaError;

    fn try_from(api: ApiEvent) -> TbaResult<Self> {
        let end_date = parse_api_date(&api.end_date, "end_date")?;
        let start_date = parse_api_date(&api.start_date, "start_date")?;

        Ok(EventRecord {
            key: api.key,
            year: api.year,
            event_type: EventType::from_code(api.event_type),
            event_type_name: api.event_type_string,
            week: api.week,
            name: Some(api.name),
            short_name: api.short_name,
            event_code: Some(api.event_code),
            start_date: Some(start_date),
            end_date: Some(end_date),
            timezone: api.timezone,
            city: api.city,
            state_prov: api.state_prov,
            country: api.country,
            address: api.address,
            postal_code: api.postal_code,
            location_name: api.location_name,
            lat: api.lat,
            lng: api.lng,
            gmaps_place_id: api.gmaps_place_id,
            gmaps_url: api.gmaps_url,
            website: api.website,
            first_event_id: api.first_event_id,
            district: api.district,
            webcasts: api.webcasts.unwrap_or_default(),
            division_keys: api.division_keys.unwrap_or_default(),
            parent_event_key: api.parent_event_key,
            playoff_type: api.playoff_type,
            playoff_type_string: api.playoff_type_string,
        })
    }
}

fn parse_api_date(value: &str, field: &str) -> TbaResult<NaiveDate> {
    NaiveDate::parse_from_str(value, API_DATE_FORMAT)
        .map_err(|_| TbaError::InvalidField(field.to_string()))
}

/// Parse a JSON array of service events.
///
/// Events that fail validation are logged and skipped so one bad entry
/// doesn't drop the whole season.
pub fn parse_events(json: &str) -> TbaResult<Vec<EventRecord>> {
    let api_events: Vec<ApiEvent> =
        serde_json::from_str(json).map_err(|e| TbaError::Serialization(e.to_string()))?;
    let total = api_events.len();

    let records: Vec<EventRecord> = api_events
        .into_iter()
        .filter_map(|api| {
            let key = api.key.clone();
            match EventRecord::try_from(api) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(event = %key, error = %e, "Skipping invalid event");
                    None
                }
            }
        })
        .collect();

    tracing::debug!(total, loaded = records.len(), "Parsed events");
    Ok(records)
}

/// Read and parse a JSON file of service events.
pub fn load_events(path: &Path) -> TbaResult<Vec<EventRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_events(&content)
}
