//! Terminal preview of the formatted billing week.
//!
//! Runs the same fetch-and-format pipeline as the export command but
//! renders the rows as a table instead of writing a workbook, so the week
//! can be inspected before exporting.

use super::export::{fetch_formatted_week, parse_week_ending};
use crate::libs::{config::Config, messages::Message, view::View};
use crate::{msg_error_anyhow, msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Week-ending date in YYYY-MM-DD format; defaults to the most recent Friday
    #[arg(short, long)]
    date: Option<String>,
}

pub async fn cmd(args: PreviewArgs) -> Result<()> {
    let week_ending = parse_week_ending(args.date.as_deref())?;
    let config = Config::read()?;
    let timesheet = config
        .timesheet
        .clone()
        .ok_or_else(|| msg_error_anyhow!(Message::TimesheetConfigMissing))?;

    let entries = fetch_formatted_week(&config, &timesheet, week_ending).await?;

    if entries.is_empty() {
        msg_warning!(Message::NoEntriesForWeek(week_ending.to_string()));
        return Ok(());
    }

    msg_print!(Message::PreviewHeader(week_ending.to_string()), true);
    View::entries(&entries);

    let total: f64 = entries.iter().map(|entry| entry.hours).sum();
    msg_info!(Message::WeekTotalHours(total));

    Ok(())
}
