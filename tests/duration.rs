#[cfg(test)]
mod tests {
    use clocksheet::libs::duration::{hours_from_duration, round_hours};

    #[test]
    fn test_full_duration() {
        // 8h 30m 15s = 8.504166... rounds to 8.50
        assert_eq!(hours_from_duration("PT8H30M15S"), 8.5);
    }

    #[test]
    fn test_hours_only() {
        assert_eq!(hours_from_duration("PT4H"), 4.0);
        assert_eq!(hours_from_duration("PT8H"), 8.0);
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(hours_from_duration("PT45M"), 0.75);
        assert_eq!(hours_from_duration("PT30M"), 0.5);
    }

    #[test]
    fn test_seconds_only() {
        // 30 seconds = 0.00833... rounds to 0.01
        assert_eq!(hours_from_duration("PT30S"), 0.01);
    }

    #[test]
    fn test_minutes_and_seconds() {
        // 30m 50s = 0.51388... rounds to 0.51
        assert_eq!(hours_from_duration("PT30M50S"), 0.51);
    }

    #[test]
    fn test_empty_string_is_zero() {
        assert_eq!(hours_from_duration(""), 0.0);
    }

    #[test]
    fn test_non_matching_string_is_zero() {
        assert_eq!(hours_from_duration("eight hours"), 0.0);
        assert_eq!(hours_from_duration("8H30M"), 0.0);
    }

    #[test]
    fn test_grammar_is_case_sensitive() {
        assert_eq!(hours_from_duration("pt8h"), 0.0);
    }

    #[test]
    fn test_round_hours_two_decimals() {
        assert_eq!(round_hours(0.1 + 0.2), 0.3);
        assert_eq!(round_hours(8.504166), 8.5);
        assert_eq!(round_hours(0.513888), 0.51);
    }
}
