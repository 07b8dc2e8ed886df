//! Excel workbook layout for the payroll timesheet.
//!
//! The worksheet carries one header row, one row per billing row, a `SUM`
//! subtotal formula in the Totals column on the last row of every
//! contiguous call-number block, and a grand-total row summing both the
//! Hours and the Totals columns. Hours and Totals render as two-decimal
//! fixed-point cells.
//!
//! The builder produces an in-memory buffer rather than writing a file, so
//! the artifact can be validated before anything touches disk.

use crate::libs::entry::FormattedEntry;
use crate::libs::error::TimesheetError;
use anyhow::Result;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Formula, Workbook};

/// MIME type of an Office Open XML spreadsheet.
pub const EXCEL_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const HEADERS: [&str; 7] = ["Resource", "Date", "Code", "Hours", "Totals", "CallNo", "Description"];

/// Column widths in character units, one per header column.
const COLUMN_WIDTHS: [f64; 7] = [10.0, 12.0, 10.0, 10.0, 10.0, 12.0, 80.0];

const COL_RESOURCE: u16 = 0;
const COL_DATE: u16 = 1;
const COL_CODE: u16 = 2;
const COL_HOURS: u16 = 3;
const COL_TOTALS: u16 = 4;
const COL_CALL_NO: u16 = 5;
const COL_DESCRIPTION: u16 = 6;

/// A generated workbook buffer together with its declared content type.
#[derive(Debug, Clone)]
pub struct WorkbookArtifact {
    pub buffer: Vec<u8>,
    pub content_type: &'static str,
}

/// A maximal contiguous run of rows sharing one call number. Indices are
/// zero-based positions into the entry slice.
#[derive(Debug, PartialEq)]
struct CallNoBlock {
    start: usize,
    end: usize,
}

/// Splits sorted entries into contiguous call-number blocks.
fn call_no_blocks(entries: &[FormattedEntry]) -> Vec<CallNoBlock> {
    let mut blocks: Vec<CallNoBlock> = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        match blocks.last_mut() {
            Some(block) if entries[block.start].call_no == entry.call_no => block.end = i,
            _ => blocks.push(CallNoBlock { start: i, end: i }),
        }
    }

    blocks
}

/// Lays out the sorted, merged billing rows and serializes the workbook to
/// a buffer.
///
/// Input must already be sorted by call number; the subtotal blocks are
/// derived from contiguous runs. Multi-row blocks show their call number
/// only on the last row, next to the subtotal formula.
pub fn build_workbook(entries: &[FormattedEntry]) -> Result<WorkbookArtifact> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1")?;

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("0.00");

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let blocks = call_no_blocks(entries);

    for (i, entry) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, COL_RESOURCE, &entry.resource)?;
        worksheet.write_string(row, COL_DATE, &entry.date)?;
        worksheet.write_string(row, COL_CODE, &entry.code)?;
        worksheet.write_number_with_format(row, COL_HOURS, entry.hours, &number_format)?;
        worksheet.write_string(row, COL_DESCRIPTION, &entry.description)?;
    }

    // Subtotal formula on the last row of each block; the call number is
    // written once per block, on that same row.
    for block in &blocks {
        let first_sheet_row = block.start as u32 + 2;
        let last_sheet_row = block.end as u32 + 2;
        worksheet.write_formula_with_format(
            last_sheet_row - 1,
            COL_TOTALS,
            Formula::new(format!("=SUM(D{}:D{})", first_sheet_row, last_sheet_row)),
            &number_format,
        )?;
        worksheet.write_string(last_sheet_row - 1, COL_CALL_NO, &entries[block.end].call_no)?;
    }

    // Grand-total row over both the Hours and the Totals columns.
    if !entries.is_empty() {
        let last_data_row = entries.len() as u32 + 1;
        let total_row = last_data_row;
        worksheet.write_formula_with_format(
            total_row,
            COL_HOURS,
            Formula::new(format!("=SUM(D2:D{})", last_data_row)),
            &number_format,
        )?;
        worksheet.write_formula_with_format(
            total_row,
            COL_TOTALS,
            Formula::new(format!("=SUM(E2:E{})", last_data_row)),
            &number_format,
        )?;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    let buffer = workbook.save_to_buffer()?;

    Ok(WorkbookArtifact {
        buffer,
        content_type: EXCEL_MIME_TYPE,
    })
}

/// Derives the output file name from the resource code and the week-ending
/// date: `"<resource> Timesheet<YY><MM><DD>.xlsx"`.
pub fn generate_file_name(resource: &str, week_ending: NaiveDate) -> String {
    format!("{} Timesheet{}.xlsx", resource, week_ending.format("%y%m%d"))
}

/// Consistency checks on the artifact before it is handed to delivery.
/// A failure here indicates a bug in the builder, not bad user input.
pub fn validate_artifact(artifact: &WorkbookArtifact, file_name: &str) -> Result<(), TimesheetError> {
    if artifact.content_type != EXCEL_MIME_TYPE {
        return Err(TimesheetError::InvalidFileType(artifact.content_type.to_string()));
    }
    if artifact.buffer.is_empty() {
        return Err(TimesheetError::EmptyBuffer);
    }
    if !file_name.ends_with(".xlsx") {
        return Err(TimesheetError::InvalidExtension(file_name.to_string()));
    }
    Ok(())
}
