use chrono::{Datelike, Duration, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprintWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// First `weekday` on or after `date`.
fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let from = date.weekday().num_days_from_monday() as i64;
    let to = weekday.num_days_from_monday() as i64;
    date + Duration::days((to - from).rem_euclid(7))
}

/// Window of the sprint following `reference`: it starts on the first
/// Thursday on or after `reference` and ends on the third Wednesday on or
/// after `reference`.
pub fn sprint_window(reference: NaiveDate) -> SprintWindow {
    let start = next_weekday(reference, Weekday::Thu);
    let end = next_weekday(reference, Weekday::Wed) + Duration::weeks(2);
    SprintWindow { start, end }
}
