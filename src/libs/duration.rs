//! ISO-8601 duration parsing for Clockify time intervals.
//!
//! Clockify reports entry durations as `PT[nH][nM][nS]` strings, e.g.
//! `PT8H30M`, `PT45M` or `PT30M50S`. The timesheet works in fractional
//! hours rounded to two decimal places.

use regex::Regex;
use std::sync::OnceLock;

static DURATION_RE: OnceLock<Regex> = OnceLock::new();

fn duration_re() -> &'static Regex {
    // The grammar is case-sensitive; each component is optional.
    DURATION_RE.get_or_init(|| Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").unwrap())
}

/// Converts an ISO-8601 duration string into fractional hours.
///
/// Missing components contribute zero, so `PT45M` parses to 0.75 and
/// `PT30S` to 0.01. Strings that do not match the grammar at all (including
/// the empty string) yield 0.0 rather than an error; running-timer
/// detection is handled separately by the entry transformer.
pub fn hours_from_duration(duration: &str) -> f64 {
    match duration_re().captures(duration) {
        Some(caps) => {
            let component = |i: usize| caps.get(i).map_or(0.0, |m| m.as_str().parse::<f64>().unwrap_or(0.0));
            let hours = component(1);
            let minutes = component(2);
            let seconds = component(3);
            round_hours(hours + minutes / 60.0 + seconds / 3600.0)
        }
        None => 0.0,
    }
}

/// Rounds fractional hours to two decimal places.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
