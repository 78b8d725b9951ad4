//! Form domain layer
//!
//! Type-safe contact form handling: pure validation predicates, field value
//! objects with validity markers, and the form itself.

mod contact;
mod field;
mod validate;

pub use contact::{ContactForm, ContactPayload, BUTTONS_ROW};
pub use field::{FieldRule, FormField};
pub use validate::{is_valid_email, is_valid_name};
