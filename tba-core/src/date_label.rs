//! Human-readable date ranges for event listings.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// "Apr 01, 2023"
const LONG_FORMAT: &str = "%b %d, %Y";
/// "Apr 01"
const SHORT_FORMAT: &str = "%b %d";

/// A value that lands on a calendar day once a time zone is known.
pub trait CalendarDay: Copy {
    fn day_in(self, tz: Tz) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    // Already a calendar day in the venue's zone
    fn day_in(self, _tz: Tz) -> NaiveDate {
        self
    }
}

impl CalendarDay for DateTime<Utc> {
    fn day_in(self, tz: Tz) -> NaiveDate {
        self.with_timezone(&tz).date_naive()
    }
}

/// Format an event's date range.
///
/// - same day: `Apr 01, 2023`
/// - same year: `Apr 01 to Apr 03`
/// - across years: `Dec 30, 2022 to Jan 02, 2023`
///
/// Returns `None` if either end is missing. Instants are placed on days in
/// `timezone`, falling back to UTC when it is absent or unknown.
pub fn date_range_label<D: CalendarDay>(
    start: Option<D>,
    end: Option<D>,
    timezone: Option<&str>,
) -> Option<String> {
    let (start, end) = (start?, end?);
    let tz = resolve_time_zone(timezone);

    Some(format_day_range(start.day_in(tz), end.day_in(tz)))
}

/// Look up an IANA time zone identifier, defaulting to UTC.
pub fn resolve_time_zone(identifier: Option<&str>) -> Tz {
    let Some(identifier) = identifier else {
        return Tz::UTC;
    };

    identifier.parse::<Tz>().unwrap_or_else(|_| {
        tracing::warn!(timezone = identifier, "Unknown time zone, falling back to UTC");
        Tz::UTC
    })
}

fn format_day_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        start.format(LONG_FORMAT).to_string()
    } else if start.year() == end.year() {
        format!("{} to {}", start.format(SHORT_FORMAT), end.format(SHORT_FORMAT))
    } else {
        format!("{} to {}", start.format(LONG_FORMAT), end.format(LONG_FORMAT))
    }
}
