//! Account entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literary genres a user can mark as favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Ficcion,
    NoFiccion,
    Misterio,
    Terror,
    Suspenso,
    Historia,
}

impl Genre {
    /// All genres in display order
    pub const ALL: [Genre; 6] = [
        Genre::Ficcion,
        Genre::NoFiccion,
        Genre::Misterio,
        Genre::Terror,
        Genre::Suspenso,
        Genre::Historia,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ficcion => "Ficción",
            Self::NoFiccion => "No Ficción",
            Self::Misterio => "Misterio",
            Self::Terror => "Terror",
            Self::Suspenso => "Suspenso",
            Self::Historia => "Historia",
        }
    }
}

/// A registered user as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "contrasena")]
    pub password: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "generosFavoritos")]
    pub favorite_genres: Vec<Genre>,
    /// Reference to a locally captured profile photo
    #[serde(rename = "fotoPerfil", default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_uri: Option<String>,
}

/// Login credentials, only held for the duration of a login request
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "contrasena")]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user", &self.user.email)
            .finish()
    }
}
