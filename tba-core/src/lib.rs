//! Core types for tba.
//!
//! This crate holds everything that doesn't need a terminal:
//! - `EventRecord` and `EventType` for events reported by the data service
//! - `category` for the in-season ordering of events
//! - `date_label` for human-readable date ranges
//! - `api` for converting the service's JSON payloads into records

pub mod api;
pub mod category;
pub mod date_label;
pub mod error;
pub mod event;
pub mod event_type;

pub use api::{ApiEvent, load_events, parse_events};
pub use category::{EventCategory, compare_order};
pub use date_label::date_range_label;
pub use error::{TbaError, TbaResult};
pub use event::{District, EventRecord, Webcast};
pub use event_type::EventType;
