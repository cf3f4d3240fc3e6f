use super::field::DurationField;
use crate::config::WidgetConfig;
use crate::error::FieldError;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// An input element as seen by the binding layer.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pub name: String,
    /// Space-separated class list
    pub class: String,
    pub required: bool,
    pub value: String,
}

impl Input {
    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Submission {
    /// Canonical value per field; `None` for an empty optional field
    Allowed { values: BTreeMap<String, Option<String>> },
    Blocked {
        #[serde(serialize_with = "serialize_errors")]
        errors: Vec<FieldError>,
    },
}

fn serialize_errors<S: serde::Serializer>(
    errors: &[FieldError],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(errors.iter().map(|e| e.to_string()))
}

/// Bindings for every duration input on one form. Fields never share state.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<DurationField>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every input carrying the configured selector class and run its
    /// load step. Other inputs are left alone.
    pub fn attach(inputs: &[Input], config: &WidgetConfig) -> Result<Self, FieldError> {
        let mut form = Self::new();
        for input in inputs.iter().filter(|i| i.has_class(&config.selector_class)) {
            form.bind(&input.name, input.required, config)?
                .load(&input.value);
        }
        debug!(bound = form.fields.len(), total = inputs.len(), "attached form");
        Ok(form)
    }

    /// Field names key the submitted values, so each may be bound once.
    pub fn bind(
        &mut self,
        name: &str,
        required: bool,
        config: &WidgetConfig,
    ) -> Result<&mut DurationField, FieldError> {
        if self.field(name).is_some() {
            return Err(FieldError::DuplicateField(name.to_string()));
        }
        self.fields.push(DurationField::new(name, required, config));
        let last = self.fields.len() - 1;
        Ok(&mut self.fields[last])
    }

    pub fn fields(&self) -> &[DurationField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&DurationField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Result<&mut DurationField, FieldError> {
        self.fields
            .iter_mut()
            .find(|f| f.name() == name)
            .ok_or_else(|| FieldError::UnknownField(name.to_string()))
    }

    /// Re-validate every field; any invalid field vetoes the submission.
    pub fn submit(&mut self) -> Submission {
        let mut errors = Vec::new();
        let mut values = BTreeMap::new();

        for field in &mut self.fields {
            field.validate();
            if field.is_invalid() {
                errors.push(FieldError::Invalid {
                    name: field.name().to_string(),
                    message: field.validation_message().unwrap_or_default().to_string(),
                });
            } else {
                values.insert(field.name().to_string(), field.hidden().map(str::to_string));
            }
        }

        if errors.is_empty() {
            info!(fields = values.len(), "form submission allowed");
            Submission::Allowed { values }
        } else {
            info!(invalid = errors.len(), "form submission blocked");
            Submission::Blocked { errors }
        }
    }
}
