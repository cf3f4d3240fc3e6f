use crate::config::WidgetConfig;
use crate::duration::{Validity, classify, format_canonical, format_suggestion};
use serde::Serialize;
use tracing::debug;

pub const INVALID_CLASS: &str = "invalid";

/// One visible input bound to its hidden canonical-value field.
#[derive(Debug, Clone)]
pub struct DurationField {
    name: String,
    required: bool,
    config: WidgetConfig,
    visible: String,
    hidden: Option<String>,
    suggestion: Option<String>,
    dropdown_open: bool,
    invalid: bool,
    validation_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub visible: String,
    pub hidden: Option<String>,
    pub invalid: bool,
    pub validation_message: Option<String>,
    pub input_classes: Vec<String>,
    pub dropdown: Option<DropdownView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownView {
    pub container_class: String,
    pub menu_class: String,
    pub item_class: String,
    pub item_text: String,
}

impl DurationField {
    pub fn new(name: impl Into<String>, required: bool, config: &WidgetConfig) -> Self {
        Self {
            name: name.into(),
            required,
            config: config.clone(),
            visible: String::new(),
            hidden: None,
            suggestion: None,
            dropdown_open: false,
            invalid: false,
            validation_message: None,
        }
    }

    /// Initial value present when the binding is created.
    pub fn load(&mut self, initial: &str) -> Option<Validity> {
        self.visible = initial.to_string();
        if self.config.auto_parse_on_load && !initial.trim().is_empty() {
            return Some(self.blur());
        }
        None
    }

    /// Keystroke: re-parse and refresh the suggestion and hidden value.
    pub fn input(&mut self, text: &str) -> Validity {
        self.visible = text.to_string();
        let validity = self.validate();
        self.dropdown_open = self.suggestion.is_some();
        validity
    }

    /// Click on the dropdown item.
    pub fn select_suggestion(&mut self) -> bool {
        let Some(suggestion) = self.suggestion.clone() else {
            return false;
        };
        debug!(field = %self.name, %suggestion, "suggestion selected");
        self.visible = suggestion;
        self.dropdown_open = false;
        true
    }

    /// Focus lost: the visible text is replaced by the suggestion when valid.
    pub fn blur(&mut self) -> Validity {
        let validity = self.validate();
        if let Some(suggestion) = &self.suggestion {
            self.visible = suggestion.clone();
        }
        self.dropdown_open = false;
        validity
    }

    /// Classify the current text and update hidden value and invalid state.
    pub fn validate(&mut self) -> Validity {
        let validity = classify(&self.visible, self.required);
        match &validity {
            Validity::Valid(d) => {
                self.hidden = Some(format_canonical(d));
                self.suggestion = Some(format_suggestion(d));
                self.set_invalid(false);
            }
            Validity::Empty => {
                self.hidden = None;
                self.suggestion = None;
                self.set_invalid(false);
            }
            Validity::Invalid(err) => {
                debug!(field = %self.name, error = %err, "invalid duration");
                self.hidden = None;
                self.suggestion = None;
                self.set_invalid(true);
            }
        }
        validity
    }

    fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
        self.validation_message = invalid.then(|| self.config.invalid_message.clone());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visible(&self) -> &str {
        &self.visible
    }

    pub fn hidden(&self) -> Option<&str> {
        self.hidden.as_deref()
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn view(&self) -> FieldView {
        let mut input_classes = vec![self.config.selector_class.clone()];
        if self.invalid {
            input_classes.push(INVALID_CLASS.to_string());
        }

        let dropdown = match (&self.suggestion, self.dropdown_open) {
            (Some(text), true) => Some(DropdownView {
                container_class: self.config.dropdown_container_class.clone(),
                menu_class: self.config.dropdown_menu_class.clone(),
                item_class: self.config.suggestion_class.clone(),
                item_text: text.clone(),
            }),
            _ => None,
        };

        FieldView {
            name: self.name.clone(),
            visible: self.visible.clone(),
            hidden: self.hidden.clone(),
            invalid: self.invalid,
            validation_message: self.validation_message.clone(),
            input_classes,
            dropdown,
        }
    }
}
