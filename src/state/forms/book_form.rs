//! Book create/edit form

use std::convert::Infallible;

use super::field::Form;
use super::validators::{self, FieldError};
use crate::state::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookField {
    Title,
    Author,
    Language,
    Pages,
    Category,
}

/// Raw values typed into the book form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub language: String,
    pub pages: String,
    pub category: String,
}

impl BookForm {
    /// Prefill the form from an existing book
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            language: book.language.clone(),
            pages: book.pages.to_string(),
            category: book.category.clone(),
        }
    }

    /// Build the record to send; `None` if the page count does not parse
    ///
    /// Only meaningful after the form validated.
    pub fn to_book(&self, id: Option<i64>) -> Option<Book> {
        Some(Book {
            id,
            title: self.title.clone(),
            author: self.author.clone(),
            language: self.language.clone(),
            pages: self.pages.parse().ok()?,
            category: self.category.clone(),
        })
    }
}

impl Form for BookForm {
    type Field = BookField;
    type Choice = Infallible;

    const FIELDS: &'static [BookField] = &[
        BookField::Title,
        BookField::Author,
        BookField::Language,
        BookField::Pages,
        BookField::Category,
    ];

    fn set(&mut self, field: BookField, value: String) {
        match field {
            BookField::Title => self.title = value,
            BookField::Author => self.author = value,
            BookField::Language => self.language = value,
            BookField::Pages => self.pages = value,
            BookField::Category => self.category = value,
        }
    }

    fn toggle(&mut self, _field: BookField, choice: Infallible) {
        match choice {}
    }

    fn validate(&self, field: BookField) -> Option<FieldError> {
        match field {
            BookField::Title => validators::title(&self.title),
            BookField::Author => validators::author(&self.author),
            BookField::Language => validators::language(&self.language),
            BookField::Pages => validators::pages(&self.pages),
            BookField::Category => validators::category(&self.category),
        }
    }
}
