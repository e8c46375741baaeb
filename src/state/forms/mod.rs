//! Form domain layer
//!
//! Field validators, the generic form state container, and the concrete
//! forms of the application (book, login, recovery, registration).

mod book_form;
mod field;
mod form_state;
mod login_form;
mod registration_form;
pub mod validators;

pub use book_form::{BookField, BookForm};
pub use field::{FieldErrors, Form};
pub use form_state::FormState;
pub use login_form::{LoginField, LoginForm, RecoveryField, RecoveryForm};
pub use registration_form::{RegistrationField, RegistrationForm};
pub use validators::FieldError;
