//! Form state container shared by every form

use super::field::{FieldErrors, Form};
use super::validators::FieldError;

/// Current values of a form together with their validation errors
///
/// Each update re-validates only the field that changed (and its linked
/// field, if any). Validity is recomputed from the error map on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState<F: Form> {
    values: F,
    errors: FieldErrors<F::Field>,
}

impl<F: Form> Default for FormState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Form> FormState<F> {
    /// Empty form with no errors shown
    pub fn new() -> Self {
        Self {
            values: F::default(),
            errors: FieldErrors::default(),
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors<F::Field> {
        &self.errors
    }

    /// Error currently shown for a field
    pub fn error(&self, field: F::Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    /// Store a keystroke-level change and re-validate that field
    pub fn update(&mut self, field: F::Field, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.revalidate(field);
    }

    /// Toggle a multi-select item and re-validate the resulting set
    pub fn toggle(&mut self, field: F::Field, choice: F::Choice) {
        self.values.toggle(field, choice);
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: F::Field) {
        self.validate_field(field);
        if let Some(linked) = self.values.linked_field(field) {
            self.validate_field(linked);
        }
    }

    /// Recompute the error of a single field
    pub fn validate_field(&mut self, field: F::Field) -> Option<FieldError> {
        let error = self.values.validate(field);
        self.errors.set(field, error);
        error
    }

    /// Run every validator; returns whether the form is valid afterwards
    pub fn validate_all(&mut self) -> bool {
        for field in F::FIELDS {
            self.validate_field(*field);
        }
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.has_no_field_errors()
    }

    /// Replace every value and validate all fields (used to edit an existing record)
    pub fn load(&mut self, values: F) {
        self.values = values;
        self.errors = FieldErrors::default();
        self.validate_all();
    }

    /// Back to an empty form with no errors
    pub fn reset(&mut self) {
        self.values = F::default();
        self.errors = FieldErrors::default();
    }

    pub fn general_error(&self) -> Option<&str> {
        self.errors.general()
    }

    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.errors.set_general(message);
    }

    pub fn clear_general_error(&mut self) {
        self.errors.clear_general();
    }
}
