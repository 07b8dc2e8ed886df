//! Console rendering of formatted billing rows.

use super::entry::FormattedEntry;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders billing rows as a terminal table, mirroring the workbook
    /// column order.
    pub fn entries(entries: &[FormattedEntry]) {
        let mut table = Table::new();

        table.add_row(row!["RESOURCE", "DATE", "CODE", "HOURS", "CALL NO", "DESCRIPTION"]);
        for entry in entries {
            table.add_row(row![
                entry.resource,
                entry.date,
                entry.code,
                format!("{:.2}", entry.hours),
                entry.call_no,
                entry.description
            ]);
        }
        table.printstd();
    }
}
