//! Wall-clock time parsing and calendar-month arithmetic.
//!
//! All calendar times in this crate are naive local wall-clock values. The
//! source data carries no zone information and no conversion is performed
//! anywhere in the pipeline, so bookings and expanded occurrences share one
//! floating time axis.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::{SchedError, SchedResult};

/// ## Summary
/// Parses a 24h `HH:MM` wall-clock string into a `NaiveTime`.
///
/// Leading and trailing whitespace is tolerated; anything else is a
/// data-integrity fault on the slot record.
///
/// ## Errors
/// Returns `SchedError::InvalidTimeFormat` if the string does not parse.
pub fn parse_wall_time(value: &str) -> SchedResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| SchedError::InvalidTimeFormat(value.to_string()))
}

/// ## Summary
/// Validates a slot's `HH:MM` pair, requiring start strictly before end
/// within the same day.
///
/// ## Errors
/// Returns `SchedError::InvalidTimeFormat` for a malformed string and
/// `SchedError::InvertedTimeRange` when start is not before end.
pub fn parse_wall_time_range(start: &str, end: &str) -> SchedResult<(NaiveTime, NaiveTime)> {
    let start_time = parse_wall_time(start)?;
    let end_time = parse_wall_time(end)?;
    if start_time >= end_time {
        return Err(SchedError::InvertedTimeRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok((start_time, end_time))
}

/// ## Summary
/// Returns the number of days in the month containing `reference`,
/// honoring actual month lengths including leap years.
#[must_use]
pub fn days_in_month(reference: NaiveDate) -> u32 {
    let first = reference.with_day(1).unwrap_or(reference);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next_month.map_or(31, |next| {
        u32::try_from(next.signed_duration_since(first).num_days()).unwrap_or(31)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_wall_time() {
        assert_eq!(
            parse_wall_time("09:30").ok(),
            NaiveTime::from_hms_opt(9, 30, 0)
        );
        assert_eq!(
            parse_wall_time(" 14:05 ").ok(),
            NaiveTime::from_hms_opt(14, 5, 0)
        );
    }

    #[test]
    fn rejects_malformed_wall_time() {
        for bad in ["9.30", "25:00", "12:61", "noon", ""] {
            assert!(parse_wall_time(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            parse_wall_time_range("11:00", "09:00"),
            Err(SchedError::InvertedTimeRange { .. })
        ));
        assert!(matches!(
            parse_wall_time_range("11:00", "11:00"),
            Err(SchedError::InvertedTimeRange { .. })
        ));
    }

    #[test]
    fn month_lengths_honor_leap_years() {
        let feb_2024 = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let feb_2026 = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let apr_2026 = NaiveDate::from_ymd_opt(2026, 4, 30).unwrap();
        assert_eq!(days_in_month(feb_2024), 29);
        assert_eq!(days_in_month(feb_2026), 28);
        assert_eq!(days_in_month(apr_2026), 30);
    }
}
