//! Form abstraction and per-field error bookkeeping

use std::collections::BTreeMap;
use std::fmt;

use super::validators::FieldError;

/// A form whose fields are identified by a closed enum
///
/// Implementors own the raw field values and know which validator applies
/// to each field. [`super::FormState`] drives them.
pub trait Form: Clone + Default + fmt::Debug + Send + Sync + 'static {
    /// Field identifiers, matched exhaustively by the form
    type Field: Copy + Ord + fmt::Debug + Send + Sync + 'static;
    /// Item type for multi-select fields (uninhabited when the form has none)
    type Choice: Copy + fmt::Debug;

    /// Every field, in display order
    const FIELDS: &'static [Self::Field];

    /// Store a new raw value for a text field
    fn set(&mut self, field: Self::Field, value: String);

    /// Toggle membership of `choice` in a multi-select field
    fn toggle(&mut self, field: Self::Field, choice: Self::Choice);

    /// Run the validator for one field against the current values
    fn validate(&self, field: Self::Field) -> Option<FieldError>;

    /// Another field whose error depends on `field` and must be refreshed with it
    fn linked_field(&self, _field: Self::Field) -> Option<Self::Field> {
        None
    }
}

/// Per-field error messages plus one general (form-wide) message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<K: Ord> {
    fields: BTreeMap<K, FieldError>,
    general: Option<String>,
}

impl<K: Ord> Default for FieldErrors<K> {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            general: None,
        }
    }
}

impl<K: Ord + Copy> FieldErrors<K> {
    /// Error currently shown for a field
    pub fn get(&self, field: K) -> Option<FieldError> {
        self.fields.get(&field).copied()
    }

    /// Replace the error of one field; `None` clears it
    pub fn set(&mut self, field: K, error: Option<FieldError>) {
        match error {
            Some(message) => {
                self.fields.insert(field, message);
            }
            None => {
                self.fields.remove(&field);
            }
        }
    }

    /// True when no field carries an error (the general message is not a field error)
    pub fn has_no_field_errors(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields currently in error, in field order
    pub fn fields_in_error(&self) -> impl Iterator<Item = (K, FieldError)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, *v))
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.general = Some(message.into());
    }

    pub fn clear_general(&mut self) {
        self.general = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Key {
        A,
        B,
    }

    #[test]
    fn test_default_is_empty() {
        let errors = FieldErrors::<Key>::default();
        assert!(errors.has_no_field_errors());
        assert!(errors.general().is_none());
    }

    #[test]
    fn test_set_and_clear_field() {
        let mut errors = FieldErrors::default();
        errors.set(Key::A, Some("bad"));
        assert_eq!(errors.get(Key::A), Some("bad"));
        assert_eq!(errors.get(Key::B), None);
        assert!(!errors.has_no_field_errors());

        errors.set(Key::A, None);
        assert!(errors.has_no_field_errors());
    }

    #[test]
    fn test_general_is_independent_of_fields() {
        let mut errors = FieldErrors::default();
        errors.set(Key::B, Some("field"));
        errors.set_general("Error: timeout");
        errors.clear_general();
        assert_eq!(errors.get(Key::B), Some("field"));

        errors.set(Key::B, None);
        errors.set_general("Error: timeout");
        assert!(errors.has_no_field_errors());
        assert_eq!(errors.general(), Some("Error: timeout"));
    }

    #[test]
    fn test_fields_in_error_are_ordered() {
        let mut errors = FieldErrors::default();
        errors.set(Key::B, Some("b"));
        errors.set(Key::A, Some("a"));
        let keys: Vec<_> = errors.fields_in_error().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![Key::A, Key::B]);
    }
}
