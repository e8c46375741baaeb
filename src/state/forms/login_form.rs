//! Login and password-recovery forms

use std::convert::Infallible;

use super::field::Form;
use super::validators::{self, FieldError};
use crate::state::Credentials;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

impl Form for LoginForm {
    type Field = LoginField;
    type Choice = Infallible;

    const FIELDS: &'static [LoginField] = &[LoginField::Email, LoginField::Password];

    fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    fn toggle(&mut self, _field: LoginField, choice: Infallible) {
        match choice {}
    }

    fn validate(&self, field: LoginField) -> Option<FieldError> {
        match field {
            LoginField::Email => validators::login_email(&self.email),
            LoginField::Password => validators::required_password(&self.password),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecoveryField {
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryForm {
    pub email: String,
}

impl Form for RecoveryForm {
    type Field = RecoveryField;
    type Choice = Infallible;

    const FIELDS: &'static [RecoveryField] = &[RecoveryField::Email];

    fn set(&mut self, field: RecoveryField, value: String) {
        match field {
            RecoveryField::Email => self.email = value,
        }
    }

    fn toggle(&mut self, _field: RecoveryField, choice: Infallible) {
        match choice {}
    }

    fn validate(&self, field: RecoveryField) -> Option<FieldError> {
        match field {
            RecoveryField::Email => validators::login_email(&self.email),
        }
    }
}
