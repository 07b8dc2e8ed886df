//! Transformation of raw Clockify time entries into payroll billing rows.
//!
//! Billable entry descriptions follow a fixed `"<call number> - <text>"`
//! convention, e.g. `"net12345 - Fix invoice rounding"`. The call number
//! carries an alphabetic billing code prefix; non-billable work is booked
//! against the literal code `"net"` and the user's default call number.
//!
//! The pipeline runs in three pure stages: transform each raw entry into a
//! [`FormattedEntry`], merge rows that share the composite key
//! `(date, code, description, call number)`, then sort by call number and
//! date. Each stage consumes its input and produces a new value; nothing
//! here touches ambient state.

use crate::api::clockify::{Project, TimeEntry};
use crate::libs::duration::{hours_from_duration, round_hours};
use crate::libs::error::TimesheetError;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Billing code assigned to non-billable entries.
pub const NON_BILLABLE_CODE: &str = "net";

/// Separator between a call number and the task text in a description.
const CALL_NO_SEPARATOR: &str = " - ";

/// One payroll-style billing row.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedEntry {
    /// Three-letter payroll resource code of the person being billed
    pub resource: String,
    /// Day of the entry in DD/MM/YYYY
    pub date: String,
    /// Lower-cased billing code, or "net" for non-billable work
    pub code: String,
    /// Fractional hours, rounded to two decimal places
    pub hours: f64,
    /// Billing call number for the engagement
    pub call_no: String,
    /// Human-readable task text
    pub description: String,
}

/// Composite merge key. A typed struct rather than a concatenated string,
/// so a separator appearing inside a field can never collide two keys.
#[derive(Debug, Hash, PartialEq, Eq)]
struct MergeKey {
    date: String,
    code: String,
    description: String,
    call_no: String,
}

impl MergeKey {
    fn of(entry: &FormattedEntry) -> Self {
        Self {
            date: entry.date.clone(),
            code: entry.code.clone(),
            description: entry.description.clone(),
            call_no: entry.call_no.clone(),
        }
    }
}

/// Extracts the call number: everything before the first `" - "`, or the
/// whole description when no separator is present.
pub fn call_no(description: &str) -> &str {
    match description.split_once(CALL_NO_SEPARATOR) {
        Some((prefix, _)) => prefix,
        None => description,
    }
}

/// Extracts the billing code: the first alphabetic run inside the call
/// number, lower-cased. A call number without any alphabetic characters
/// (e.g. purely numeric) has no billing code and is rejected.
pub fn billing_code(description: &str) -> Result<String, TimesheetError> {
    let call_no = call_no(description);
    let start = call_no
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(|| TimesheetError::MalformedCallNumber(call_no.to_string()))?;
    let code: String = call_no[start..].chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    Ok(code.to_lowercase())
}

/// Extracts the task text: everything after the first `-`-delimited
/// segment, re-joined on `-` so inner dashes survive, trimmed of
/// surrounding whitespace. Empty when no separator exists.
pub fn task_description(description: &str) -> String {
    match description.split_once('-') {
        Some((_, rest)) => rest.trim().to_string(),
        None => String::new(),
    }
}

/// Resolves a project name from the workspace project list. A missing or
/// unknown project id resolves to the empty string.
pub fn project_name(projects: &[Project], project_id: Option<&str>) -> String {
    project_id
        .and_then(|id| projects.iter().find(|p| p.id == id))
        .map(|p| p.name.clone())
        .unwrap_or_default()
}

/// Maps one raw time entry into a billing row.
///
/// Billable entries derive code, call number and text from the description;
/// non-billable entries keep their description and fall back to the default
/// call number. When a project list is supplied the description is prefixed
/// with `"<project name> - "` even if the lookup misses, which leaves a
/// leading `" - "` for unknown projects (the upstream behavior, kept
/// deliberately).
///
/// An entry whose duration is empty belongs to a still-running timer and
/// aborts the export instead of producing a zero-hour row.
pub fn transform_entry(
    entry: &TimeEntry,
    resource: &str,
    default_call_no: &str,
    projects: Option<&[Project]>,
) -> Result<FormattedEntry, TimesheetError> {
    let duration = entry.time_interval.duration.as_deref().unwrap_or("");
    if duration.is_empty() {
        return Err(TimesheetError::ActiveTimer(entry.description.clone()));
    }

    let date = entry.time_interval.start.format("%d/%m/%Y").to_string();
    let hours = hours_from_duration(duration);

    let (code, call_no, mut description) = if entry.billable {
        (
            billing_code(&entry.description)?,
            call_no(&entry.description).to_string(),
            task_description(&entry.description),
        )
    } else {
        (
            NON_BILLABLE_CODE.to_string(),
            default_call_no.to_string(),
            entry.description.clone(),
        )
    };

    if let Some(projects) = projects {
        description = format!("{} - {}", project_name(projects, entry.project_id.as_deref()), description);
    }

    Ok(FormattedEntry {
        resource: resource.to_string(),
        date,
        code,
        hours,
        call_no,
        description,
    })
}

/// Collapses rows sharing the composite key into a single row with summed,
/// re-rounded hours. The first-seen entry keeps its non-hours fields.
/// Output preserves first-seen order; the sorter runs afterwards anyway.
pub fn merge_entries(entries: Vec<FormattedEntry>) -> Vec<FormattedEntry> {
    let mut merged: Vec<FormattedEntry> = Vec::new();
    let mut index: HashMap<MergeKey, usize> = HashMap::new();

    for entry in entries {
        match index.get(&MergeKey::of(&entry)) {
            Some(&i) => merged[i].hours = round_hours(merged[i].hours + entry.hours),
            None => {
                index.insert(MergeKey::of(&entry), merged.len());
                merged.push(entry);
            }
        }
    }

    merged
}

/// Orders rows by call number (byte-wise) and then by calendar date.
/// The date is parsed from DD/MM/YYYY rather than compared as a string, so
/// "02/12/2025" sorts after "28/11/2025".
pub fn sort_entries(mut entries: Vec<FormattedEntry>) -> Vec<FormattedEntry> {
    entries.sort_by(|a, b| {
        a.call_no
            .cmp(&b.call_no)
            .then_with(|| parse_row_date(&a.date).cmp(&parse_row_date(&b.date)))
    });
    entries
}

fn parse_row_date(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%d/%m/%Y").unwrap_or(NaiveDate::MIN)
}

/// The full pipeline: transform, merge, sort.
pub fn format_time_entries(
    resource: &str,
    default_call_no: &str,
    entries: &[TimeEntry],
    projects: Option<&[Project]>,
) -> Result<Vec<FormattedEntry>, TimesheetError> {
    let transformed = entries
        .iter()
        .map(|entry| transform_entry(entry, resource, default_call_no, projects))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(sort_entries(merge_entries(transformed)))
}
