use super::Duration;

/// Short human text shown in the dropdown, e.g. `3h 15m`, `15m`, `3h`.
///
/// A zero duration renders as `0h`.
pub fn format_suggestion(d: &Duration) -> String {
    if d.hours == 0 && d.minutes > 0 {
        return format!("{}m", d.minutes);
    }
    if d.minutes != 0 {
        format!("{}h {}m", d.hours, d.minutes)
    } else {
        format!("{}h", d.hours)
    }
}

/// Zero-padded `HH:MM:SS`. Fields wider than two digits are not truncated.
pub fn format_canonical(d: &Duration) -> String {
    format!("{:02}:{:02}:{:02}", d.hours, d.minutes, d.seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_hours_and_mins() {
        assert_eq!(format_suggestion(&Duration::new(3, 15, 11700)), "3h 15m");
    }

    #[test]
    fn test_suggestion_only_mins() {
        assert_eq!(format_suggestion(&Duration::new(0, 15, 900)), "15m");
    }

    #[test]
    fn test_suggestion_only_hours() {
        assert_eq!(format_suggestion(&Duration::new(3, 0, 10800)), "3h");
    }

    #[test]
    fn test_suggestion_zero() {
        assert_eq!(format_suggestion(&Duration::default()), "0h");
    }

    #[test]
    fn test_canonical_pads_and_widens() {
        assert_eq!(format_canonical(&Duration::new(1, 5, 0)), "01:05:00");
        assert_eq!(format_canonical(&Duration::new(120, 7, 0)), "120:07:00");
    }

    #[test]
    fn test_canonical_keeps_literal_seconds() {
        assert_eq!(format_canonical(&Duration::new(1, 30, 45)), "01:30:45");
        assert_eq!(format_canonical(&Duration::new(0, 0, 75)), "00:00:15");
    }
}
