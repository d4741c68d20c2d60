//! Modal form state
//!
//! A form is an ordered list of fields edited in place. Typed forms
//! (`StaffForm`, `MenuItemForm`) convert to and from a [`FormState`] through
//! [`FormFields`]; parsing collects per-field messages, then `validator`
//! rules run on the typed value.

mod menu;
mod staff;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use crossterm::event::{Event, KeyCode, KeyEvent};
use rust_decimal::Decimal;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use validator::{Validate, ValidationErrors};

/// Field name -> message
pub type FieldErrors = BTreeMap<&'static str, String>;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Free text; `hint` describes the expected format
    Text { input: Input, hint: Option<&'static str> },
    Choice { options: Vec<&'static str>, index: usize },
    Toggle(bool),
}

#[derive(Debug, Clone)]
pub struct Field {
    /// Struct field name, used to attach validation messages
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
}

impl Field {
    pub fn text(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text {
                input: Input::new(value.into()),
                hint: None,
            },
        }
    }

    pub fn date(name: &'static str, label: &'static str, value: NaiveDate) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text {
                input: Input::new(value.format(DATE_FORMAT).to_string()),
                hint: Some("YYYY-MM-DD"),
            },
        }
    }

    pub fn number(name: &'static str, label: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text {
                input: Input::new(value.to_string()),
                hint: Some("number"),
            },
        }
    }

    pub fn choice(name: &'static str, label: &'static str, options: Vec<&'static str>, selected: &str) -> Self {
        let index = options.iter().position(|o| *o == selected).unwrap_or(0);
        Self {
            name,
            label,
            value: FieldValue::Choice { options, index },
        }
    }

    pub fn toggle(name: &'static str, label: &'static str, on: bool) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Toggle(on),
        }
    }

    /// Display text of the current value
    pub fn display(&self) -> String {
        match &self.value {
            FieldValue::Text { input, .. } => input.value().to_string(),
            FieldValue::Choice { options, index } => {
                options.get(*index).copied().unwrap_or_default().to_string()
            }
            FieldValue::Toggle(on) => if *on { "[x]" } else { "[ ]" }.to_string(),
        }
    }
}

/// Conversion between a typed form and its editable fields
pub trait FormFields: Sized + Validate {
    fn to_fields(&self) -> Vec<Field>;
    fn from_state(state: &FormState) -> Result<Self, FieldErrors>;
}

/// Editable form shown in a modal
#[derive(Debug, Clone)]
pub struct FormState {
    pub title: String,
    pub fields: Vec<Field>,
    pub focus: usize,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn new<F: FormFields>(title: impl Into<String>, form: &F) -> Self {
        Self {
            title: title.into(),
            fields: form.to_fields(),
            focus: 0,
            errors: FieldErrors::new(),
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Edit the focused field
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return;
        };
        match &mut field.value {
            FieldValue::Text { input, .. } => {
                input.handle_event(&Event::Key(key));
            }
            FieldValue::Choice { options, index } => match key.code {
                KeyCode::Left => *index = (*index + options.len() - 1) % options.len().max(1),
                KeyCode::Right | KeyCode::Char(' ') => *index = (*index + 1) % options.len().max(1),
                _ => {}
            },
            FieldValue::Toggle(on) => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) {
                    *on = !*on;
                }
            }
        }
        self.errors.remove(field.name);
    }

    /// Replace the text of a text field (tests, prefill)
    pub fn set_text(&mut self, name: &str, value: &str) {
        if let Some(Field {
            value: FieldValue::Text { input, .. },
            ..
        }) = self.fields.iter_mut().find(|f| f.name == name)
        {
            *input = Input::new(value.to_string());
        }
    }

    pub fn set_toggle(&mut self, name: &str, on: bool) {
        if let Some(Field {
            value: FieldValue::Toggle(v),
            ..
        }) = self.fields.iter_mut().find(|f| f.name == name)
        {
            *v = on;
        }
    }

    pub fn text(&self, name: &str) -> &str {
        match self.field(name).map(|f| &f.value) {
            Some(FieldValue::Text { input, .. }) => input.value(),
            _ => "",
        }
    }

    pub fn choice(&self, name: &str) -> usize {
        match self.field(name).map(|f| &f.value) {
            Some(FieldValue::Choice { index, .. }) => *index,
            _ => 0,
        }
    }

    pub fn toggle(&self, name: &str) -> bool {
        matches!(self.field(name).map(|f| &f.value), Some(FieldValue::Toggle(true)))
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Parse and validate into `F`, recording messages in `errors` on failure
    pub fn submit<F: FormFields>(&mut self) -> Option<F> {
        let parsed = F::from_state(self).and_then(|form| match form.validate() {
            Ok(()) => Ok(form),
            Err(errors) => Err(validation_messages(&errors, &self.fields)),
        });
        match parsed {
            Ok(form) => {
                self.errors.clear();
                Some(form)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

/// First message per failing field, keyed by the matching form field name
fn validation_messages(errors: &ValidationErrors, fields: &[Field]) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (name, errs) in errors.field_errors() {
        let Some(field) = fields.iter().find(|f| f.name == name.as_ref()) else {
            continue;
        };
        let message = errs
            .first()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field.label))
            })
            .unwrap_or_default();
        out.insert(field.name, message);
    }
    out
}

// ========== Parse helpers ==========

pub(crate) fn parse_date(
    state: &FormState,
    name: &'static str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(state.text(name).trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(name, format!("{label} must be a date (YYYY-MM-DD)"));
            None
        }
    }
}

pub(crate) fn parse_decimal(
    state: &FormState,
    name: &'static str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<Decimal> {
    match state.text(name).trim().parse::<Decimal>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.insert(name, format!("{label} must be a number"));
            None
        }
    }
}

pub(crate) fn parse_u32(
    state: &FormState,
    name: &'static str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<u32> {
    match state.text(name).trim().parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.insert(name, format!("{label} must be a whole number"));
            None
        }
    }
}
