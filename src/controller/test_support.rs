//! Shared fixtures for controller tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::gateway::{GatewayError, RemoteGateway};
use crate::state::{Book, Credentials, Session, UserRecord};

pub fn book(id: i64, title: &str) -> Book {
    Book {
        id: Some(id),
        title: title.to_string(),
        author: "Miguel de Cervantes".to_string(),
        language: "Español".to_string(),
        pages: 500,
        category: "Ficción".to_string(),
    }
}

pub fn books() -> Vec<Book> {
    vec![
        book(1, "El Quijote"),
        Book {
            id: Some(2),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            language: "Inglés".to_string(),
            pages: 328,
            category: "Ciencia Ficción".to_string(),
        },
    ]
}

/// Gateway whose calls never complete; counts how many were started
#[derive(Default)]
pub struct PendingGateway {
    calls: AtomicUsize,
}

impl PendingGateway {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn hang<T>(&self) -> Result<T, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

#[async_trait]
impl RemoteGateway for PendingGateway {
    async fn login(&self, _credentials: &Credentials) -> Result<Session, GatewayError> {
        self.hang().await
    }

    async fn register(&self, _user: &UserRecord) -> Result<UserRecord, GatewayError> {
        self.hang().await
    }

    async fn list_books(&self) -> Result<Vec<Book>, GatewayError> {
        self.hang().await
    }

    async fn create_book(&self, _book: &Book) -> Result<Book, GatewayError> {
        self.hang().await
    }

    async fn update_book(&self, _id: i64, _book: &Book) -> Result<Book, GatewayError> {
        self.hang().await
    }

    async fn delete_book(&self, _id: i64) -> Result<(), GatewayError> {
        self.hang().await
    }
}
