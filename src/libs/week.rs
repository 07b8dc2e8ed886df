//! Billing week boundaries.
//!
//! A billing week closes on a Friday; the export is bounded by that
//! week-ending date.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// Walks back from the given date to the nearest Friday. A Friday maps to
/// itself.
pub fn most_recent_friday(from: NaiveDate) -> NaiveDate {
    let mut date = from;
    while date.weekday() != Weekday::Fri {
        match date.checked_sub_days(Days::new(1)) {
            Some(prev) => date = prev,
            None => break,
        }
    }
    date
}

/// The week-ending Friday for today's local date.
pub fn current_week_ending() -> NaiveDate {
    most_recent_friday(Local::now().date_naive())
}
