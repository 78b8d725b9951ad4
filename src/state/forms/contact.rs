//! Contact form state

use super::field::{FieldRule, FormField};
use serde::Serialize;

/// Index of the buttons row (one past the last text field)
pub const BUTTONS_ROW: usize = 3;

/// JSON body sent to the submission endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// The contact form: three tracked fields plus a buttons row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::new("firstName", "First Name", FieldRule::Name),
            last_name: FormField::new("lastName", "Last Name", FieldRule::Name),
            email: FormField::new("email", "Email", FieldRule::Email),
            active_field_index: 0,
        }
    }

    /// Total focusable rows: three fields plus the buttons row
    pub fn field_count(&self) -> usize {
        4
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }

    /// Move focus forward (wraps around), validating the field being left
    pub fn next_field(&mut self) {
        self.blur_active();
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    /// Move focus backward (wraps around), validating the field being left
    pub fn prev_field(&mut self) {
        self.blur_active();
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Revalidate the active field as focus leaves it (no-op on the buttons row)
    pub fn blur_active(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.validate();
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            _ => None,
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            _ => None,
        }
    }

    /// Freshly revalidate every field, updating markers. Returns true only if
    /// all three pass; stale markers are never trusted for this.
    pub fn validate_all(&mut self) -> bool {
        let first = self.first_name.validate();
        let last = self.last_name.validate();
        let email = self.email.validate();
        first && last && email
    }

    /// Snapshot the current raw values for submission
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            email: self.email.value.clone(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    #[test]
    fn test_new_has_correct_defaults() {
        let form = ContactForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.first_name.name, "firstName");
        assert_eq!(form.last_name.name, "lastName");
        assert_eq!(form.email.name, "email");
        assert!(form.first_name.validity.is_none());
    }

    #[test]
    fn test_field_count() {
        let form = ContactForm::new();
        assert_eq!(form.field_count(), 4);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = ContactForm::new();
        for _ in 0..4 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_buttons_row() {
        let mut form = ContactForm::new();
        form.prev_field();
        assert_eq!(form.active_field_index, BUTTONS_ROW);
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = ContactForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, BUTTONS_ROW);
    }

    #[test]
    fn test_leaving_a_field_validates_it() {
        let mut form = ContactForm::new();
        type_into(&mut form.first_name, "J4ne");
        assert!(form.first_name.validity.is_none());
        form.next_field();
        assert!(form.first_name.is_marked_invalid());
    }

    #[test]
    fn test_blur_on_buttons_row_is_noop() {
        let mut form = ContactForm::new();
        form.set_active_field(BUTTONS_ROW);
        form.blur_active();
        assert!(form.first_name.validity.is_none());
        assert!(form.email.validity.is_none());
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = ContactForm::new();
        assert_eq!(form.get_field(0).unwrap().name, "firstName");
        assert_eq!(form.get_field(1).unwrap().name, "lastName");
        assert_eq!(form.get_field(2).unwrap().name, "email");
        assert!(form.get_field(3).is_none());
    }

    #[test]
    fn test_validate_all_requires_every_field() {
        let mut form = ContactForm::new();
        type_into(&mut form.first_name, "Jane");
        type_into(&mut form.last_name, "Doe");
        type_into(&mut form.email, "jane.doe@example.com");
        assert!(form.validate_all());

        let mut bad = ContactForm::new();
        type_into(&mut bad.first_name, "J4ne");
        type_into(&mut bad.last_name, "Doe");
        type_into(&mut bad.email, "jane.doe@example.com");
        assert!(!bad.validate_all());
        assert!(bad.first_name.is_marked_invalid());
        assert_eq!(bad.last_name.validity, Some(true));
        assert_eq!(bad.email.validity, Some(true));
    }

    #[test]
    fn test_validate_all_recomputes_stale_markers() {
        let mut form = ContactForm::new();
        type_into(&mut form.first_name, "Jane");
        type_into(&mut form.last_name, "Doe");
        type_into(&mut form.email, "jane@example.com");
        assert!(form.validate_all());

        // Corrupt a field after the pass; the old marker must not be trusted.
        form.email.push_char('!');
        assert!(!form.validate_all());
        assert!(form.email.is_marked_invalid());
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let mut form = ContactForm::new();
        type_into(&mut form.first_name, "Jane");
        type_into(&mut form.last_name, "Doe");
        type_into(&mut form.email, "jane.doe@example.com");

        let json = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane.doe@example.com"
            })
        );
    }
}
