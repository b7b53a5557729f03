//! Publish date parsing and formatting

use chrono::{DateTime, NaiveDate, TimeZone};

/// `January 3, 2024`: full month name, day without leading zero, four-digit year
pub const PUBLISH_DATE_FORMAT: &str = "%B %-d, %Y";

/// Parse a `publishDate` front-matter value into a calendar date
pub fn parse_publish_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), PUBLISH_DATE_FORMAT)
}

/// Format a calendar date the way authors write `publishDate`
pub fn format_publish_date(date: NaiveDate) -> String {
    date.format(PUBLISH_DATE_FORMAT).to_string()
}

/// Midnight at the start of `date` in `tz`.
///
/// Returns `None` when that midnight does not exist in the zone (a DST gap
/// starting at 00:00). Ambiguous midnights resolve to the earlier instant.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight).earliest()
}
