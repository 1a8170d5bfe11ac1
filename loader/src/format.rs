use crate::FetchError;
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Day, abbreviated month, two-digit year.
pub const PUBLISHED_AT_FORMAT: &str = "%-d %b %y";

/// `3723` becomes `"01:02:03"`. Hours do not wrap.
pub fn duration_to_time_string(duration: u64) -> String {
    let hours = duration / 3600;
    let minutes = (duration % 3600) / 60;
    let seconds = duration % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD`.
///
/// Offsets are dropped, keeping the wall-clock time the API wrote.
pub fn parse_published_at(published_at: &str) -> Result<NaiveDateTime, FetchError> {
    let text = published_at.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Ok(date.naive_local());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(date);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| FetchError::InvalidDate(published_at.to_owned()))
}

pub fn format_published_at(published_at: &str, locale: Locale) -> Result<String, FetchError> {
    let date = parse_published_at(published_at)?;

    Ok(Utc
        .from_utc_datetime(&date)
        .format_localized(PUBLISHED_AT_FORMAT, locale)
        .to_string())
}
