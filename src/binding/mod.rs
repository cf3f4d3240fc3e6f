//! Event-dispatch boundary between input fields and the duration parser.

pub mod field;
pub mod form;

pub use field::{DropdownView, DurationField, FieldView};
pub use form::{Form, Input, Submission};
