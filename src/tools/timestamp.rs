use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::fmt::Display;
use thiserror::Error;

/// Accepted layouts for the date-to-timestamp direction.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Please enter a valid timestamp")]
    InvalidTimestamp,

    #[error("Please select a date and time")]
    MissingDate,

    #[error("Unrecognized date and time: {0}")]
    InvalidDate(String),

    #[error("Timestamp out of range: {0}")]
    OutOfRange(i64),

    #[error("{0} does not exist in the local time zone")]
    NonexistentLocalTime(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampReport {
    pub local: String,
    pub utc: String,
    pub iso: String,
    pub relative: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateReport {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub iso: String,
    pub utc: String,
}

/// Interpret `input` as Unix seconds and describe that instant.
pub fn describe_timestamp<Tz>(
    input: &str,
    tz: &Tz,
    now: DateTime<Utc>,
) -> Result<TimestampReport, TimestampError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let seconds: i64 = input
        .trim()
        .parse()
        .map_err(|_| TimestampError::InvalidTimestamp)?;
    let instant =
        DateTime::from_timestamp(seconds, 0).ok_or(TimestampError::OutOfRange(seconds))?;

    Ok(TimestampReport {
        local: format_local(&instant.with_timezone(tz)),
        utc: format_utc(&instant),
        iso: format_iso(&instant),
        relative: relative_time(instant, now),
    })
}

/// Interpret `input` as a wall-clock time in `tz`.
pub fn describe_datetime<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateReport, TimestampError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TimestampError::MissingDate);
    }

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| TimestampError::InvalidDate(input.to_string()))?;

    let instant = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TimestampError::NonexistentLocalTime(input.to_string()))?
        .with_timezone(&Utc);

    Ok(DateReport {
        unix_seconds: instant.timestamp(),
        unix_millis: instant.timestamp_millis(),
        iso: format_iso(&instant),
        utc: format_utc(&instant),
    })
}

/// "3 minutes ago", or "in 2 days" for instants after `now`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then).num_seconds();
    let magnitude = elapsed.unsigned_abs();

    let minutes = magnitude / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let phrase = if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        plural(magnitude, "second")
    };

    if elapsed < 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Unix seconds and a long-form description of `now`, for the live clock.
pub fn clock_banner<Tz>(now: &DateTime<Tz>) -> (i64, String)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    (
        now.timestamp(),
        now.format("%A, %B %-d, %Y at %I:%M:%S %p").to_string(),
    )
}

fn format_local<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn format_iso(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    #[test]
    fn describe_known_timestamp_in_utc() {
        let now = at(1_700_000_000 + 90);
        let report = describe_timestamp("1700000000", &Utc, now).unwrap();
        assert_eq!(report.local, "11/14/2023, 10:13:20 PM");
        assert_eq!(report.utc, "Tue, 14 Nov 2023 22:13:20 GMT");
        assert_eq!(report.iso, "2023-11-14T22:13:20.000Z");
        assert_eq!(report.relative, "1 minute ago");
    }

    #[test]
    fn local_time_follows_the_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let report = describe_timestamp(" 0 ", &tokyo, at(0)).unwrap();
        assert_eq!(report.local, "1/1/1970, 9:00:00 AM");
        assert_eq!(report.utc, "Thu, 01 Jan 1970 00:00:00 GMT");
        assert_eq!(report.relative, "0 seconds ago");
    }

    #[test]
    fn negative_timestamps_are_before_the_epoch() {
        let report = describe_timestamp("-86400", &Utc, at(0)).unwrap();
        assert_eq!(report.iso, "1969-12-31T00:00:00.000Z");
        assert_eq!(report.relative, "1 day ago");
    }

    #[test]
    fn reject_non_numeric_timestamp() {
        assert_eq!(
            describe_timestamp("soon", &Utc, at(0)),
            Err(TimestampError::InvalidTimestamp)
        );
        assert_eq!(
            describe_timestamp("", &Utc, at(0)),
            Err(TimestampError::InvalidTimestamp)
        );
    }

    #[test]
    fn reject_out_of_range_timestamp() {
        let huge = i64::MAX.to_string();
        assert!(matches!(
            describe_timestamp(&huge, &Utc, at(0)),
            Err(TimestampError::OutOfRange(_))
        ));
    }

    #[test]
    fn date_to_timestamp() {
        let report = describe_datetime("2023-11-14T22:13", &Utc).unwrap();
        assert_eq!(report.unix_seconds, 1_699_999_980);
        assert_eq!(report.unix_millis, 1_699_999_980_000);
        assert_eq!(report.iso, "2023-11-14T22:13:00.000Z");
        assert_eq!(report.utc, "Tue, 14 Nov 2023 22:13:00 GMT");

        let report = describe_datetime("2023-11-14 22:13:20", &Utc).unwrap();
        assert_eq!(report.unix_seconds, 1_700_000_000);
    }

    #[test]
    fn date_in_offset_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let report = describe_datetime("1970-01-01T02:00", &plus_two).unwrap();
        assert_eq!(report.unix_seconds, 0);
    }

    #[test]
    fn date_errors() {
        assert_eq!(describe_datetime("  ", &Utc), Err(TimestampError::MissingDate));
        assert_eq!(
            describe_datetime("yesterday", &Utc),
            Err(TimestampError::InvalidDate("yesterday".to_string()))
        );
    }

    #[test]
    fn relative_time_units() {
        let now = at(1_000_000);
        assert_eq!(relative_time(now - Duration::seconds(1), now), "1 second ago");
        assert_eq!(relative_time(now - Duration::seconds(59), now), "59 seconds ago");
        assert_eq!(relative_time(now - Duration::minutes(2), now), "2 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(relative_time(now - Duration::hours(49), now), "2 days ago");
        assert_eq!(relative_time(now + Duration::hours(3), now), "in 3 hours");
    }

    #[test]
    fn clock_banner_text() {
        let (seconds, text) = clock_banner(&at(1_700_000_000));
        assert_eq!(seconds, 1_700_000_000);
        assert_eq!(text, "Tuesday, November 14, 2023 at 10:13:20 PM");
    }
}
