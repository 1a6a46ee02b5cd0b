//! Contact form state machine: values, per-field errors, submission gating

use super::field::{FieldId, FormField};
use crate::validate::{self, ValidationError};

/// Tab-order index of the submit button row
pub const SUBMIT_ROW: usize = FieldId::ALL.len();

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

/// Values captured at the moment of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl SubmittedSnapshot {
    /// Whether the optional message was provided
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}

/// The contact form
///
/// Owns the four field values with their error state, the active-field
/// index (fields 0-3, submit row 4), and the last accepted snapshot.
/// The snapshot is written only by an error-free submit and is never
/// cleared by a rejected one.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    pub submitted: Option<SubmittedSnapshot>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::new(FieldId::FirstName),
            last_name: FormField::new(FieldId::LastName),
            email: FormField::new(FieldId::Email),
            message: FormField::new(FieldId::Message),
            active_field_index: 0,
            submitted: None,
        }
    }

    /// Get a field by id
    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    /// Get a field by id, mutably
    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }

    /// Id of the active field, or None when on the submit row
    pub fn active_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    /// Returns true when the submit button row is active
    pub fn is_on_submit_row(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Append a character to the active field and re-run its live rules
    pub fn input_char(&mut self, c: char) {
        if let Some(id) = self.active_id() {
            self.field_mut(id).push_char(c);
            self.revalidate_live(id);
        }
    }

    /// Remove the last character of the active field and re-run its live rules
    pub fn backspace(&mut self) {
        if let Some(id) = self.active_id() {
            self.field_mut(id).pop_char();
            self.revalidate_live(id);
        }
    }

    /// Re-evaluate one field against the live rule set, so its error
    /// always reflects the most recent value
    fn revalidate_live(&mut self, id: FieldId) {
        let error = validate::validate_live(id, self.field(id).as_text());
        self.field_mut(id).error = error;
    }

    /// Errors currently shown, in field order
    pub fn errors(&self) -> Vec<&ValidationError> {
        FieldId::ALL
            .iter()
            .filter_map(|id| self.field(*id).error.as_ref())
            .collect()
    }

    /// Number of fields currently showing an error
    pub fn error_count(&self) -> usize {
        self.errors().len()
    }

    /// Run a submit attempt.
    ///
    /// Every field is re-validated with the full rule set against its
    /// value at this moment. Any error rejects the attempt, leaving the
    /// error set populated and the values intact. An error-free attempt
    /// captures the snapshot (message included even if empty); the
    /// inputs are retained and the form stays ready for the next attempt.
    pub fn submit(&mut self) -> SubmitOutcome {
        for id in FieldId::ALL {
            let error = validate::validate_submit(id, self.field(id).as_text());
            self.field_mut(id).error = error;
        }

        if self.error_count() > 0 {
            return SubmitOutcome::Rejected;
        }

        self.submitted = Some(SubmittedSnapshot {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            email: self.email.value.clone(),
            message: self.message.value.clone(),
        });
        SubmitOutcome::Accepted
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FieldId::ALL.len() + 1 // four fields plus the submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldId::ALL.get(index).map(|id| self.field(*id))
    }
}
