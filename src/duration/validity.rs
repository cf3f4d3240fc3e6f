use super::{Duration, parse};
use crate::error::ParseError;

/// Outcome of checking a field's text against its `required` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// Nothing typed in an optional field. The stored value is cleared.
    Empty,
    Valid(Duration),
    Invalid(ParseError),
}

impl Validity {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid(_))
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            Validity::Valid(d) => Some(*d),
            _ => None,
        }
    }
}

pub fn classify(raw: &str, required: bool) -> Validity {
    match parse(raw) {
        Ok(d) => Validity::Valid(d),
        Err(e) if e.is_empty() && !required => Validity::Empty,
        Err(e) => Validity::Invalid(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optional_is_valid_empty() {
        assert_eq!(classify("   ", false), Validity::Empty);
    }

    #[test]
    fn test_empty_required_is_invalid() {
        assert_eq!(classify("", true), Validity::Invalid(ParseError::Empty));
    }

    #[test]
    fn test_garbage_is_invalid_regardless_of_required() {
        assert!(classify("abc", false).is_invalid());
        assert!(classify("abc", true).is_invalid());
    }

    #[test]
    fn test_valid_carries_duration() {
        assert_eq!(
            classify("3h", true).duration(),
            Some(Duration::new(3, 0, 10800))
        );
    }
}
