//! Conversion of "posted N units ago" labels into absolute timestamps.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::ScraperError;

/// Separator the results page renders in front of the time label.
const TIME_SEPARATOR: char = '·';

/// Parses a relative time label against the current instant.
///
/// See [`parse_relative_time_at`].
///
/// # Errors
///
/// Returns [`ScraperError::MalformedRelativeTime`] if the label is not three
/// words or the count is not an integer.
pub fn parse_relative_time(posted: &str) -> Result<Option<DateTime<Utc>>, ScraperError> {
    parse_relative_time_at(posted, Utc::now())
}

/// Parses `"<n> <unit> ago"` into `now - n units`.
///
/// The unit is matched by case-sensitive substring, checked in the order
/// `minute`, `hour`, `day`, so `"minutes"` and `"hours"` both work. Any other
/// unit (`"weeks"`, `"months"`) yields `Ok(None)`: the card is unusable but
/// the page is fine.
///
/// # Errors
///
/// Returns [`ScraperError::MalformedRelativeTime`] if, after removing the `·`
/// separator, the label does not split into exactly three words, if the
/// count is not an integer, or if the result falls outside the representable
/// range.
pub fn parse_relative_time_at(
    posted: &str,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, ScraperError> {
    let malformed = |reason: String| ScraperError::MalformedRelativeTime {
        text: posted.to_string(),
        reason,
    };

    let cleaned = posted.replace(TIME_SEPARATOR, "");
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let [value, unit, _] = words.as_slice() else {
        return Err(malformed(format!("expected 3 words, found {}", words.len())));
    };

    let value: i64 = value
        .parse()
        .map_err(|e| malformed(format!("count \"{value}\": {e}")))?;

    let delta = if unit.contains("minute") {
        TimeDelta::try_minutes(value)
    } else if unit.contains("hour") {
        TimeDelta::try_hours(value)
    } else if unit.contains("day") {
        TimeDelta::try_days(value)
    } else {
        return Ok(None);
    };

    delta
        .and_then(|d| now.checked_sub_signed(d))
        .map(Some)
        .ok_or_else(|| malformed("offset out of range".to_string()))
}
