//! Account registration form

use super::field::Form;
use super::validators::{self, FieldError};
use crate::state::{Genre, UserRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Genres,
    /// URI of a photo captured elsewhere; not validated
    ProfilePhoto,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    /// Selected genres, in selection order
    pub genres: Vec<Genre>,
    pub profile_photo_uri: Option<String>,
}

impl RegistrationForm {
    /// Record sent to the backend; an empty phone is sent as absent
    pub fn to_user(&self) -> UserRecord {
        UserRecord {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            favorite_genres: self.genres.clone(),
            profile_photo_uri: self.profile_photo_uri.clone(),
        }
    }
}

impl Form for RegistrationForm {
    type Field = RegistrationField;
    type Choice = Genre;

    const FIELDS: &'static [RegistrationField] = &[
        RegistrationField::FullName,
        RegistrationField::Email,
        RegistrationField::Password,
        RegistrationField::ConfirmPassword,
        RegistrationField::Phone,
        RegistrationField::Genres,
        RegistrationField::ProfilePhoto,
    ];

    fn set(&mut self, field: RegistrationField, value: String) {
        match field {
            RegistrationField::FullName => self.full_name = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Password => self.password = value,
            RegistrationField::ConfirmPassword => self.confirm_password = value,
            RegistrationField::Phone => self.phone = value,
            RegistrationField::ProfilePhoto => {
                self.profile_photo_uri = (!value.is_empty()).then_some(value);
            }
            RegistrationField::Genres => {
                tracing::debug!("Ignoring text input for multi-select field {field:?}");
            }
        }
    }

    fn toggle(&mut self, field: RegistrationField, choice: Genre) {
        if field != RegistrationField::Genres {
            tracing::debug!("Ignoring toggle on single-value field {field:?}");
            return;
        }
        if let Some(pos) = self.genres.iter().position(|g| *g == choice) {
            self.genres.remove(pos);
        } else {
            self.genres.push(choice);
        }
    }

    fn validate(&self, field: RegistrationField) -> Option<FieldError> {
        match field {
            RegistrationField::FullName => validators::full_name(&self.full_name),
            RegistrationField::Email => validators::registration_email(&self.email),
            RegistrationField::Password => validators::password(&self.password),
            RegistrationField::ConfirmPassword => {
                validators::confirm_password(&self.confirm_password, &self.password)
            }
            RegistrationField::Phone => validators::phone(&self.phone),
            RegistrationField::Genres => validators::genres(&self.genres),
            RegistrationField::ProfilePhoto => None,
        }
    }

    fn linked_field(&self, field: RegistrationField) -> Option<RegistrationField> {
        // A mismatch only becomes visible once the confirmation was typed
        (field == RegistrationField::Password && !self.confirm_password.is_empty())
            .then_some(RegistrationField::ConfirmPassword)
    }
}
