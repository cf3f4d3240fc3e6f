use crate::duration::Grammar;
use thiserror::Error;

/// Rejection returned by the duration parser.
///
/// Malformed input is an expected outcome, so callers match on this rather
/// than treating it as a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no duration given")]
    Empty,
    #[error("'{input}' is not a valid {grammar} duration")]
    Unparseable { input: String, grammar: Grammar },
}

impl ParseError {
    pub fn is_empty(&self) -> bool {
        matches!(self, ParseError::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field '{name}': {message}")]
    Invalid { name: String, message: String },
    #[error("no field named '{0}'")]
    UnknownField(String),
    #[error("field '{0}' is bound more than once")]
    DuplicateField(String),
}
