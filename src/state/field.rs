//! Form field identifiers and values

use crate::validate::ValidationError;
use std::fmt;

/// The fixed set of contact form fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldId {
    /// All fields in tab order
    pub const ALL: [FieldId; 4] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Message,
    ];

    /// Key used in validation messages
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }

    /// Label shown next to the input box
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
        }
    }

    /// Whether the field must be non-empty to submit
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldId::Message)
    }

    /// Whether Enter inserts a newline instead of submitting
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldId::Message)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single form field: its current text and at most one error
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
    pub error: Option<ValidationError>,
}

impl FormField {
    /// Create an empty field
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            error: None,
        }
    }

    /// Get the current text
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value and its error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }
}
