//! # Clocksheet - Clockify to Payroll Timesheet Exporter
//!
//! A command-line utility that pulls a billing week of time entries from a
//! Clockify-compatible time-tracking API and exports them as a payroll-style
//! Excel timesheet.
//!
//! ## Features
//!
//! - **API Integration**: Authenticated access to the Clockify REST API
//! - **Billing Rows**: Derives billing codes and call numbers from entry descriptions
//! - **Merge & Sort**: Collapses duplicate entries, orders rows by call number and date
//! - **Excel Export**: Workbook with per-call-number subtotals and a grand total
//! - **Preview**: Terminal table view of the formatted week before exporting
//! - **Secure Credentials**: Encrypted at-rest storage for the API key
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clocksheet::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
