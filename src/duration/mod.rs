//! Free-form duration input: parsing, suggestion text and the canonical
//! `HH:MM:SS` form written to the hidden field.

pub mod format;
pub mod grammar;
pub mod validity;

pub use format::{format_canonical, format_suggestion};
pub use grammar::{Grammar, normalize, parse, parse_with_grammar};
pub use validity::{Validity, classify};

use serde::Serialize;
use std::fmt;

/// A parsed duration.
///
/// `seconds` depends on which grammar produced the value: for `hh:mm:ss`
/// input it is the literal seconds component, for every other grammar it is
/// the total `hours * 3600 + minutes * 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Duration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Duration {
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Build a duration whose `seconds` is the total implied by hours and
    /// minutes. Returns `None` when the total does not fit in a `u64`.
    pub fn from_hours_minutes(hours: u64, minutes: u64) -> Option<Self> {
        let seconds = hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?;
        Some(Self::new(hours, minutes, seconds))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_canonical(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hours_minutes_totals_seconds() {
        let d = Duration::from_hours_minutes(3, 15).unwrap();
        assert_eq!(d, Duration::new(3, 15, 11700));
    }

    #[test]
    fn test_from_hours_minutes_overflow() {
        assert!(Duration::from_hours_minutes(u64::MAX, 0).is_none());
        assert!(Duration::from_hours_minutes(0, u64::MAX).is_none());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Duration::new(1, 30, 0).to_string(), "01:30:00");
    }
}
