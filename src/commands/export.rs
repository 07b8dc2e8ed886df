//! Timesheet export command.
//!
//! One export runs the complete pipeline: fetch the billing week (and,
//! when project-name prefixing is enabled, the project list in parallel),
//! transform the raw entries into billing rows, build the workbook in
//! memory, validate the artifact, and write it to disk. Any stage failure
//! aborts the export; no partial workbook is ever produced.

use crate::api::clockify::Clockify;
use crate::libs::{
    config::{Config, TimesheetConfig},
    entry::{format_time_entries, FormattedEntry},
    messages::Message,
    week::current_week_ending,
    workbook::{build_workbook, generate_file_name, validate_artifact},
};
use crate::{msg_debug, msg_error_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Week-ending date in YYYY-MM-DD format
    ///
    /// Bounds the fetched week. Defaults to the most recent Friday, the
    /// day that closes the billing week.
    #[arg(short, long)]
    date: Option<String>,

    /// Output directory for the generated timesheet
    ///
    /// The file name itself is always derived from the resource code and
    /// the week-ending date. Defaults to the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let week_ending = parse_week_ending(args.date.as_deref())?;
    let config = Config::read()?;
    let timesheet = config
        .timesheet
        .clone()
        .ok_or_else(|| msg_error_anyhow!(Message::TimesheetConfigMissing))?;

    msg_info!(Message::FetchingWeek(week_ending.to_string()));
    let entries = fetch_formatted_week(&config, &timesheet, week_ending).await?;

    if entries.is_empty() {
        msg_warning!(Message::NoEntriesForWeek(week_ending.to_string()));
        return Ok(());
    }

    let artifact = build_workbook(&entries)?;
    let file_name = generate_file_name(&timesheet.resource, week_ending);
    validate_artifact(&artifact, &file_name)?;

    let output_path = args.output.unwrap_or_else(|| PathBuf::from(".")).join(&file_name);
    fs::write(&output_path, &artifact.buffer)?;

    msg_success!(Message::TimesheetSaved(output_path.display().to_string()));
    Ok(())
}

/// Fetches and formats one billing week.
///
/// The entries fetch and the optional projects fetch run in parallel and
/// both must succeed before transformation starts.
pub(crate) async fn fetch_formatted_week(config: &Config, timesheet: &TimesheetConfig, week_ending: NaiveDate) -> Result<Vec<FormattedEntry>> {
    let clockify_config = config.clockify.clone().unwrap_or_default();
    let client = Clockify::new(&clockify_config)?;
    let user = client.current_user().await?;

    let (raw_entries, projects) = if timesheet.include_project_name {
        let (entries, projects) = tokio::try_join!(client.time_entries(&user, week_ending), client.projects(&user))?;
        (entries, Some(projects))
    } else {
        (client.time_entries(&user, week_ending).await?, None)
    };

    msg_debug!(format!("fetched {} raw entries for {}", raw_entries.len(), week_ending));
    msg_info!(Message::EntriesFetched(raw_entries.len()));

    let formatted = format_time_entries(&timesheet.resource, &timesheet.call_no, &raw_entries, projects.as_deref())?;
    Ok(formatted)
}

/// Parses the week-ending argument, falling back to the most recent
/// Friday when none is given. An explicit date is used as entered.
pub(crate) fn parse_week_ending(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(date_str) => Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?),
        None => Ok(current_week_ending()),
    }
}
