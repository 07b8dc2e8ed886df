#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clocksheet::libs::week::most_recent_friday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_friday_maps_to_itself() {
        let friday = date(2025, 11, 21);
        assert_eq!(most_recent_friday(friday), friday);
    }

    #[test]
    fn test_weekend_maps_to_preceding_friday() {
        let friday = date(2025, 11, 21);
        assert_eq!(most_recent_friday(date(2025, 11, 22)), friday);
        assert_eq!(most_recent_friday(date(2025, 11, 23)), friday);
    }

    #[test]
    fn test_weekdays_map_to_preceding_friday() {
        let friday = date(2025, 11, 21);
        assert_eq!(most_recent_friday(date(2025, 11, 24)), friday);
        assert_eq!(most_recent_friday(date(2025, 11, 27)), friday);
    }

    #[test]
    fn test_next_friday_starts_a_new_week() {
        let next_friday = date(2025, 11, 28);
        assert_eq!(most_recent_friday(next_friday), next_friday);
    }

    #[test]
    fn test_walks_back_across_month_boundary() {
        assert_eq!(most_recent_friday(date(2025, 12, 1)), date(2025, 11, 28));
    }
}
