use chrono::{Duration, NaiveDate};

use crate::error::RedmanError;
use crate::sprint::{days_elapsed, needs_to_run, parse_cadence_date};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_runs_on_start_day() {
    let start = date("2015-09-21");
    assert!(needs_to_run(Some(start), Some(start), Some(14)).unwrap());
}

#[test]
fn test_skips_day_after_start() {
    let start = date("2015-09-21");
    let test = start + Duration::days(1);
    assert!(!needs_to_run(Some(start), Some(test), Some(14)).unwrap());
}

#[test]
fn test_runs_on_every_interval() {
    let start = date("2015-09-21");
    for cycle in 1..5 {
        let test = start + Duration::days(14 * cycle);
        assert!(needs_to_run(Some(start), Some(test), Some(14)).unwrap());
    }
}

#[test]
fn test_runs_before_start_on_interval() {
    let start = date("2015-09-21");
    let test = start - Duration::days(14);
    assert!(needs_to_run(Some(start), Some(test), Some(14)).unwrap());
    assert!(!needs_to_run(Some(start), Some(start - Duration::days(3)), Some(14)).unwrap());
}

#[test]
fn test_missing_input_never_runs() {
    let start = date("2015-09-21");
    assert!(!needs_to_run(None, Some(start), Some(14)).unwrap());
    assert!(!needs_to_run(Some(start), None, Some(14)).unwrap());
    assert!(!needs_to_run(Some(start), Some(start), None).unwrap());
}

#[test]
fn test_non_positive_interval_is_rejected() {
    let start = date("2015-09-21");
    for interval in [0, -14] {
        match needs_to_run(Some(start), Some(start), Some(interval)) {
            Err(RedmanError::ConfigError(msg)) => assert!(msg.contains("repeat_after")),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }
    assert!(needs_to_run(None, None, Some(0)).is_err());
}

#[test]
fn test_days_elapsed() {
    assert_eq!(days_elapsed(date("2015-09-21"), date("2015-10-05")), 14);
    assert_eq!(days_elapsed(date("2015-09-21"), date("2015-09-20")), -1);
}

#[test]
fn test_parse_cadence_date_formats() {
    let expected = date("2015-09-21");
    assert_eq!(parse_cadence_date("2015-09-21").unwrap(), expected);
    assert_eq!(parse_cadence_date(" 2015/09/21 ").unwrap(), expected);
    assert_eq!(parse_cadence_date("09/21/2015").unwrap(), expected);
    assert_eq!(parse_cadence_date("21 September 2015").unwrap(), expected);
    assert_eq!(parse_cadence_date("2015-09-21T09:00:00Z").unwrap(), expected);
    assert_eq!(parse_cadence_date("2015-09-21 09:00:00").unwrap(), expected);
}

#[test]
fn test_parse_cadence_date_rejects_garbage() {
    assert!(matches!(
        parse_cadence_date("next monday"),
        Err(RedmanError::ConfigError(_))
    ));
}
