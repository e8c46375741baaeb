//! Book catalog entities

use serde::{Deserialize, Serialize};

/// Languages a book can be catalogued in
pub const LANGUAGES: [&str; 10] = [
    "Español",
    "Inglés",
    "Italiano",
    "Portugués",
    "Francés",
    "Alemán",
    "Ruso",
    "Japonés",
    "Chino",
    "Coreano",
];

/// Categories a book can be filed under
pub const CATEGORIES: [&str; 10] = [
    "Ficción",
    "No Ficción",
    "Misterio",
    "Terror",
    "Suspenso",
    "Historia",
    "Romance",
    "Ciencia Ficción",
    "Fantasía",
    "Biografía",
];

/// A book as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier, absent until the book is persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "idioma")]
    pub language: String,
    #[serde(rename = "paginas")]
    pub pages: u32,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl Book {
    /// Returns a copy of this book carrying the given id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// One-line summary used in listings
    pub fn summary(&self) -> String {
        format!(
            "{} - {} ({}, {} págs., {})",
            self.title, self.author, self.language, self.pages, self.category
        )
    }
}
