use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::RedmanResult;
use crate::redman_error;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y"];

/// Parse the configured cadence start date. Accepts plain dates in a few
/// common layouts as well as full timestamps, whose time part is dropped.
pub fn parse_cadence_date(value: &str) -> RedmanResult<NaiveDate> {
    let value = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(stamp.date());
    }
    Err(redman_error!(ConfigError, "Unable to parse start date '{}'", value))
}

pub fn days_elapsed(start: NaiveDate, test: NaiveDate) -> i64 {
    (test - start).num_days()
}

/// True when `repeat_after` evenly divides the days between `start` and `test`.
///
/// A missing input means the run must not proceed. A non-positive interval is
/// a configuration error.
pub fn needs_to_run(
    start: Option<NaiveDate>,
    test: Option<NaiveDate>,
    repeat_after: Option<i64>,
) -> RedmanResult<bool> {
    if let Some(interval) = repeat_after {
        if interval <= 0 {
            return Err(redman_error!(
                ConfigError,
                "\"repeat_after\" must be a positive number of days, got {}",
                interval
            ));
        }
    }

    match (start, test, repeat_after) {
        (Some(start), Some(test), Some(interval)) => {
            Ok(days_elapsed(start, test).rem_euclid(interval) == 0)
        }
        _ => Ok(false),
    }
}
