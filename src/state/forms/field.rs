//! Form field value objects

use super::validate::{is_valid_email, is_valid_name};

/// Which syntactic rule a field's value is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Name,
    Email,
}

impl FieldRule {
    /// Run the pure predicate for this rule
    pub fn check(&self, raw: &str) -> bool {
        match self {
            FieldRule::Name => is_valid_name(raw),
            FieldRule::Email => is_valid_email(raw),
        }
    }
}

/// A single form field: its wire name, current text, and validity marker
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub rule: FieldRule,
    /// None until the field has been validated at least once (no marker shown)
    pub validity: Option<bool>,
}

impl FormField {
    pub fn new(name: &str, label: &str, rule: FieldRule) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            rule,
            validity: None,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value and its marker
    pub fn clear(&mut self) {
        self.value.clear();
        self.validity = None;
    }

    /// Recompute validity from the current value and record the marker.
    /// Editing the value does not touch the marker; only this does.
    pub fn validate(&mut self) -> bool {
        let ok = self.rule.check(&self.value);
        self.validity = Some(ok);
        ok
    }

    /// True when the last validation pass marked this field invalid
    pub fn is_marked_invalid(&self) -> bool {
        self.validity == Some(false)
    }
}
