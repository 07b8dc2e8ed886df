//! Error taxonomy for the timesheet pipeline.
//!
//! Every failure a caller may want to react to individually gets its own
//! variant; everything else propagates as `anyhow::Error` at the command
//! layer. None of the pipeline stages retry: the first error aborts the
//! export and no partial workbook is produced.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimesheetError {
    /// The upstream API rejected the stored key.
    #[error("Clockify rejected the API key ({0})")]
    Authentication(StatusCode),

    /// A billable entry's call number contains no alphabetic billing code.
    /// This is a data-quality problem in the source entry and must not be
    /// silently defaulted.
    #[error("call number '{0}' contains no billing code")]
    MalformedCallNumber(String),

    /// An entry has no recorded duration because its timer is still running.
    #[error("entry '{0}' has no recorded duration; stop the running timer and export again")]
    ActiveTimer(String),

    /// The generated artifact declares a content type other than the
    /// spreadsheet MIME type.
    #[error("workbook has unexpected content type '{0}'")]
    InvalidFileType(String),

    /// The generated workbook buffer is empty.
    #[error("workbook buffer is empty")]
    EmptyBuffer,

    /// The target file name does not carry the .xlsx extension.
    #[error("file name '{0}' does not end in .xlsx")]
    InvalidExtension(String),
}
