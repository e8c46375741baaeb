//! Field validators
//!
//! Every validator is a pure function from a raw input value to an optional
//! error message. Rules are checked in order and the first failing rule
//! decides the message.

use std::sync::LazyLock;

use regex::Regex;

use crate::state::{Genre, CATEGORIES, LANGUAGES};

/// Error message shown next to a field
pub type FieldError = &'static str;

/// Institutional email domain accepted for accounts
pub const INSTITUTIONAL_DOMAIN: &str = "duoc.cl";

/// Symbols of which a password must contain at least one
pub const PASSWORD_SYMBOLS: &str = "@#$%&*!?";

pub const MAX_PAGES_EXCLUSIVE: i32 = 10_000;

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[a-zA-Z0-9áéíóúÁÉÍÓÚñÑ.,;:()¿?¡!'" -]+$"#).expect("Invalid title regex")
});

static AUTHOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ -]+$").expect("Invalid author regex"));

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ ]+$").expect("Invalid name regex"));

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@duoc\.cl$").expect("Invalid institutional email regex")
});

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]+$").expect("Invalid phone regex"));

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn has_institutional_suffix(value: &str) -> bool {
    value
        .strip_suffix(INSTITUTIONAL_DOMAIN)
        .is_some_and(|rest| rest.ends_with('@'))
}

pub fn title(value: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some("El título es obligatorio")
    } else if char_len(value) < 3 {
        Some("El título debe tener al menos 3 caracteres")
    } else if char_len(value) > 200 {
        Some("El título no puede exceder 200 caracteres")
    } else if !TITLE_REGEX.is_match(value) {
        Some("El título contiene caracteres no permitidos")
    } else {
        None
    }
}

pub fn author(value: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some("El autor es obligatorio")
    } else if char_len(value) < 3 {
        Some("El autor debe tener al menos 3 caracteres")
    } else if char_len(value) > 100 {
        Some("El autor no puede exceder 100 caracteres")
    } else if !AUTHOR_REGEX.is_match(value) {
        Some("El autor solo puede contener letras, espacios y guiones")
    } else {
        None
    }
}

pub fn language(value: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some("El idioma es obligatorio")
    } else if !LANGUAGES.contains(&value) {
        Some("Debe seleccionar un idioma válido")
    } else {
        None
    }
}

pub fn category(value: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some("La categoría es obligatoria")
    } else if !CATEGORIES.contains(&value) {
        Some("Debe seleccionar una categoría válida")
    } else {
        None
    }
}

pub fn pages(value: &str) -> Option<FieldError> {
    if is_blank(value) {
        return Some("Las páginas son obligatorias");
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some("Solo se permiten números");
    }
    match value.parse::<i32>() {
        Err(_) => Some("Número inválido"),
        Ok(n) if n < 1 => Some("Debe tener al menos 1 página"),
        Ok(n) if n >= MAX_PAGES_EXCLUSIVE => Some("No puede tener 10,000 o más páginas"),
        Ok(_) => None,
    }
}

pub fn full_name(value: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some("El nombre es obligatorio")
    } else if char_len(value) > 100 {
        Some("El nombre no puede exceder 100 caracteres")
    } else if !NAME_REGEX.is_match(value) {
        Some("El nombre solo puede contener letras y espacios")
    } else {
        None
    }
}

/// Email check used by the login and recovery forms
pub fn login_email(value: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some("El correo es obligatorio")
    } else if !has_institutional_suffix(value) {
        Some("Debe usar un correo @duoc.cl")
    } else if !EMAIL_REGEX.is_match(value) {
        Some("Formato de correo inválido")
    } else {
        None
    }
}

/// Email check used when creating an account
pub fn registration_email(value: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some("El correo es obligatorio")
    } else if !has_institutional_suffix(value) {
        Some("Solo se permiten correos @duoc.cl")
    } else if char_len(value) > 60 {
        Some("El correo no puede exceder 60 caracteres")
    } else if !EMAIL_REGEX.is_match(value) {
        Some("Formato de correo inválido")
    } else {
        None
    }
}

/// Full password policy for new accounts
pub fn password(value: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some("La contraseña es obligatoria")
    } else if char_len(value) < 10 {
        Some("La contraseña debe tener al menos 10 caracteres")
    } else if !value.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Debe contener al menos una mayúscula")
    } else if !value.chars().any(|c| c.is_ascii_lowercase()) {
        Some("Debe contener al menos una minúscula")
    } else if !value.chars().any(|c| c.is_ascii_digit()) {
        Some("Debe contener al menos un número")
    } else if !value.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        Some("Debe contener un carácter especial (@#$%&*!?)")
    } else {
        None
    }
}

/// Login only requires a password to be present; the policy was enforced at sign-up
pub fn required_password(value: &str) -> Option<FieldError> {
    is_blank(value).then_some("La contraseña es obligatoria")
}

pub fn confirm_password(value: &str, password: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some("Debe confirmar la contraseña")
    } else if value != password {
        Some("Las contraseñas no coinciden")
    } else {
        None
    }
}

/// Phone is optional; only checked when something was typed. A `+` may
/// only lead.
pub fn phone(value: &str) -> Option<FieldError> {
    (!is_blank(value) && !PHONE_REGEX.is_match(value))
        .then_some("El teléfono solo puede contener números")
}

pub fn genres(value: &[Genre]) -> Option<FieldError> {
    value
        .is_empty()
        .then_some("Debe seleccionar al menos un género favorito")
}
