use crate::error::{AccountError, Result};
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Formats a duration using its largest whole unit, from weeks down to
/// milliseconds, e.g. `3 weeks` or `1 hour`. The sign is ignored.
pub fn humanize(delta: TimeDelta) -> String {
    let delta = delta.abs();
    let units = [
        (delta.num_weeks(), "week"),
        (delta.num_days(), "day"),
        (delta.num_hours(), "hour"),
        (delta.num_minutes(), "minute"),
        (delta.num_seconds(), "second"),
        (delta.num_milliseconds(), "millisecond"),
    ];

    units
        .into_iter()
        .find(|(count, _)| *count > 0)
        .map(|(count, unit)| {
            if count == 1 {
                format!("1 {unit}")
            } else {
                format!("{count} {unit}s")
            }
        })
        .unwrap_or_else(|| "no time".to_string())
}

/// Parses a `YYYY-MM-DD` due date.
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| AccountError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Parses an RFC 3339 timestamp such as `2022-08-01T12:00:00Z`.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|source| AccountError::InvalidDate {
            input: input.to_string(),
            source,
        })
}

/// Message telling how far `now` is from midnight (UTC) of the due date.
pub fn due_notice(due: NaiveDate, now: DateTime<Utc>) -> String {
    let due = due.and_time(chrono::NaiveTime::MIN).and_utc();
    format!("Due in {}", humanize(now - due))
}
