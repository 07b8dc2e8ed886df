#[cfg(test)]
mod tests {
    use clocksheet::api::clockify::{Project, TimeEntry, TimeInterval};
    use clocksheet::libs::entry::{
        billing_code, call_no, format_time_entries, merge_entries, sort_entries, task_description, transform_entry,
    };
    use clocksheet::libs::error::TimesheetError;

    const RESOURCE: &str = "USR";
    const DEFAULT_CALL_NO: &str = "net00000";

    fn raw_entry(billable: bool, description: &str, start: &str, duration: Option<&str>) -> TimeEntry {
        TimeEntry {
            billable,
            description: description.to_string(),
            project_id: None,
            time_interval: TimeInterval {
                start: start.parse().unwrap(),
                end: None,
                duration: duration.map(|d| d.to_string()),
            },
        }
    }

    #[test]
    fn test_call_no_before_separator() {
        assert_eq!(call_no("abc12345 - Task"), "abc12345");
    }

    #[test]
    fn test_call_no_without_separator_is_whole_string() {
        assert_eq!(call_no("NoSeparator"), "NoSeparator");
    }

    #[test]
    fn test_billing_code_leading_alphabetic_run() {
        assert_eq!(billing_code("abc12345 - Task").unwrap(), "abc");
    }

    #[test]
    fn test_billing_code_is_lowercased() {
        assert_eq!(billing_code("NET12345 - Task").unwrap(), "net");
    }

    #[test]
    fn test_billing_code_rejects_numeric_call_no() {
        let err = billing_code("12345 - Task").unwrap_err();
        assert!(matches!(err, TimesheetError::MalformedCallNumber(_)));
    }

    #[test]
    fn test_task_description_rejoins_inner_dashes() {
        assert_eq!(task_description("abc12345 - Part-1 - More"), "Part-1 - More");
    }

    #[test]
    fn test_task_description_without_separator_is_empty() {
        assert_eq!(task_description("NoSeparator"), "");
    }

    #[test]
    fn test_transform_billable_entry() {
        let entry = raw_entry(true, "net12345 - Fix invoice rounding", "2025-11-24T09:00:00Z", Some("PT8H30M"));
        let row = transform_entry(&entry, RESOURCE, DEFAULT_CALL_NO, None).unwrap();

        assert_eq!(row.resource, "USR");
        assert_eq!(row.date, "24/11/2025");
        assert_eq!(row.code, "net");
        assert_eq!(row.hours, 8.5);
        assert_eq!(row.call_no, "net12345");
        assert_eq!(row.description, "Fix invoice rounding");
    }

    #[test]
    fn test_transform_non_billable_entry() {
        let entry = raw_entry(false, "Team meeting", "2025-11-24T14:00:00Z", Some("PT1H"));
        let row = transform_entry(&entry, RESOURCE, DEFAULT_CALL_NO, None).unwrap();

        assert_eq!(row.code, "net");
        assert_eq!(row.call_no, DEFAULT_CALL_NO);
        assert_eq!(row.description, "Team meeting");
        assert_eq!(row.hours, 1.0);
    }

    #[test]
    fn test_transform_rejects_running_timer() {
        let entry = raw_entry(true, "abc12345 - Still running", "2025-11-24T09:00:00Z", None);
        let err = transform_entry(&entry, RESOURCE, DEFAULT_CALL_NO, None).unwrap_err();
        assert!(matches!(err, TimesheetError::ActiveTimer(_)));

        let entry = raw_entry(true, "abc12345 - Still running", "2025-11-24T09:00:00Z", Some(""));
        let err = transform_entry(&entry, RESOURCE, DEFAULT_CALL_NO, None).unwrap_err();
        assert!(matches!(err, TimesheetError::ActiveTimer(_)));
    }

    #[test]
    fn test_transform_prefixes_project_name() {
        let projects = vec![Project {
            id: "p1".to_string(),
            name: "Billing Portal".to_string(),
        }];
        let mut entry = raw_entry(true, "abc12345 - Task", "2025-11-24T09:00:00Z", Some("PT1H"));
        entry.project_id = Some("p1".to_string());

        let row = transform_entry(&entry, RESOURCE, DEFAULT_CALL_NO, Some(projects.as_slice())).unwrap();
        assert_eq!(row.description, "Billing Portal - Task");
    }

    #[test]
    fn test_transform_unknown_project_keeps_leading_separator() {
        // An unresolved project id prefixes an empty name; the leading
        // " - " is the documented upstream behavior.
        let projects: Vec<Project> = Vec::new();
        let mut entry = raw_entry(true, "abc12345 - Task", "2025-11-24T09:00:00Z", Some("PT1H"));
        entry.project_id = Some("missing".to_string());

        let row = transform_entry(&entry, RESOURCE, DEFAULT_CALL_NO, Some(projects.as_slice())).unwrap();
        assert_eq!(row.description, " - Task");
    }

    #[test]
    fn test_merge_sums_and_rerounds_hours() {
        let entries = vec![
            raw_entry(true, "xyz99999 - Task A", "2025-11-24T09:00:00Z", Some("PT4H")),
            raw_entry(true, "xyz99999 - Task A", "2025-11-24T14:00:00Z", Some("PT4H")),
        ];
        let rows = format_time_entries(RESOURCE, DEFAULT_CALL_NO, &entries, None).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hours, 8.0);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let entries = vec![
            raw_entry(true, "xyz99999 - Task A", "2025-11-24T09:00:00Z", Some("PT4H")),
            raw_entry(true, "xyz99999 - Task A", "2025-11-24T14:00:00Z", Some("PT2H")),
            raw_entry(true, "abc12345 - Task B", "2025-11-25T09:00:00Z", Some("PT1H")),
        ];
        let rows: Vec<_> = entries
            .iter()
            .map(|entry| transform_entry(entry, RESOURCE, DEFAULT_CALL_NO, None).unwrap())
            .collect();

        let once = merge_entries(rows.clone());
        let twice = merge_entries(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_keeps_distinct_keys_apart() {
        // Same day and call number but different descriptions must not merge.
        let entries = vec![
            raw_entry(true, "xyz99999 - Task A", "2025-11-24T09:00:00Z", Some("PT4H")),
            raw_entry(true, "xyz99999 - Task B", "2025-11-24T14:00:00Z", Some("PT4H")),
        ];
        let rows = format_time_entries(RESOURCE, DEFAULT_CALL_NO, &entries, None).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_sort_by_call_no_then_date() {
        let entries = vec![
            raw_entry(true, "xyz99999 - Task", "2025-12-02T09:00:00Z", Some("PT1H")),
            raw_entry(true, "abc12345 - Task", "2025-12-02T09:00:00Z", Some("PT1H")),
            raw_entry(true, "xyz99999 - Task", "2025-11-28T09:00:00Z", Some("PT1H")),
        ];
        let rows = format_time_entries(RESOURCE, DEFAULT_CALL_NO, &entries, None).unwrap();

        assert_eq!(rows[0].call_no, "abc12345");
        // Chronological, not string, comparison: 28/11 before 02/12
        assert_eq!(rows[1].date, "28/11/2025");
        assert_eq!(rows[2].date, "02/12/2025");
    }

    #[test]
    fn test_sort_is_stable_on_sorted_input() {
        let entries = vec![
            raw_entry(true, "abc12345 - Task", "2025-11-24T09:00:00Z", Some("PT1H")),
            raw_entry(true, "xyz99999 - Task", "2025-11-25T09:00:00Z", Some("PT1H")),
        ];
        let rows = format_time_entries(RESOURCE, DEFAULT_CALL_NO, &entries, None).unwrap();
        assert_eq!(sort_entries(rows.clone()), rows);
    }

    #[test]
    fn test_week_end_to_end() {
        // Two mergeable billable entries, one non-billable entry, one
        // billable entry under a different call number.
        let entries = vec![
            raw_entry(true, "xyz99999 - Task A", "2025-11-24T09:00:00Z", Some("PT4H")),
            raw_entry(false, "Non-billable work", "2025-11-25T09:00:00Z", Some("PT2H")),
            raw_entry(true, "abc12345 - Task B", "2025-11-26T09:00:00Z", Some("PT6H")),
            raw_entry(true, "xyz99999 - Task A", "2025-11-24T14:00:00Z", Some("PT4H")),
        ];
        let rows = format_time_entries(RESOURCE, DEFAULT_CALL_NO, &entries, None).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].call_no, "abc12345");
        assert_eq!(rows[1].call_no, DEFAULT_CALL_NO);
        assert_eq!(rows[2].call_no, "xyz99999");
        assert_eq!(rows[2].hours, 8.0);
    }
}
