#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clocksheet::libs::entry::FormattedEntry;
    use clocksheet::libs::error::TimesheetError;
    use clocksheet::libs::workbook::{build_workbook, generate_file_name, validate_artifact, WorkbookArtifact, EXCEL_MIME_TYPE};

    fn row(call_no: &str, date: &str, hours: f64) -> FormattedEntry {
        FormattedEntry {
            resource: "USR".to_string(),
            date: date.to_string(),
            code: "abc".to_string(),
            hours,
            call_no: call_no.to_string(),
            description: "Task".to_string(),
        }
    }

    #[test]
    fn test_file_name_from_resource_and_week_ending() {
        let week_ending = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
        assert_eq!(generate_file_name("USR", week_ending), "USR Timesheet251124.xlsx");
    }

    #[test]
    fn test_file_name_zero_pads_date_parts() {
        let week_ending = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(generate_file_name("ABC", week_ending), "ABC Timesheet260102.xlsx");
    }

    #[test]
    fn test_build_workbook_produces_nonempty_xlsx_buffer() {
        let entries = vec![
            row("abc12345", "24/11/2025", 8.0),
            row("abc12345", "25/11/2025", 4.0),
            row("xyz99999", "26/11/2025", 2.5),
        ];
        let artifact = build_workbook(&entries).unwrap();

        assert_eq!(artifact.content_type, EXCEL_MIME_TYPE);
        assert!(!artifact.buffer.is_empty());
        // xlsx files are zip archives
        assert_eq!(&artifact.buffer[..2], b"PK");
    }

    #[test]
    fn test_build_workbook_accepts_empty_input() {
        let artifact = build_workbook(&[]).unwrap();
        assert!(!artifact.buffer.is_empty());
    }

    #[test]
    fn test_validate_accepts_built_artifact() {
        let artifact = build_workbook(&[row("abc12345", "24/11/2025", 8.0)]).unwrap();
        assert!(validate_artifact(&artifact, "USR Timesheet251124.xlsx").is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_content_type() {
        let artifact = WorkbookArtifact {
            buffer: vec![1, 2, 3],
            content_type: "text/plain",
        };
        let err = validate_artifact(&artifact, "USR Timesheet251124.xlsx").unwrap_err();
        assert!(matches!(err, TimesheetError::InvalidFileType(_)));
    }

    #[test]
    fn test_validate_rejects_empty_buffer() {
        let artifact = WorkbookArtifact {
            buffer: Vec::new(),
            content_type: EXCEL_MIME_TYPE,
        };
        let err = validate_artifact(&artifact, "USR Timesheet251124.xlsx").unwrap_err();
        assert!(matches!(err, TimesheetError::EmptyBuffer));
    }

    #[test]
    fn test_validate_rejects_wrong_extension() {
        let artifact = build_workbook(&[row("abc12345", "24/11/2025", 8.0)]).unwrap();
        let err = validate_artifact(&artifact, "USR Timesheet251124.csv").unwrap_err();
        assert!(matches!(err, TimesheetError::InvalidExtension(_)));
    }
}
