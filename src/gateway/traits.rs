//! Trait abstraction for the remote gateway to enable mocking in tests

use async_trait::async_trait;

use super::GatewayError;
use crate::state::{Book, Credentials, Session, UserRecord};

/// Remote operations the controllers depend on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Authenticate with institutional credentials
    async fn login(&self, credentials: &Credentials) -> Result<Session, GatewayError>;

    /// Create a new account
    async fn register(&self, user: &UserRecord) -> Result<UserRecord, GatewayError>;

    /// Fetch the whole catalog
    async fn list_books(&self) -> Result<Vec<Book>, GatewayError>;

    /// Persist a new book; the returned book carries its id
    async fn create_book(&self, book: &Book) -> Result<Book, GatewayError>;

    /// Replace an existing book
    async fn update_book(&self, id: i64, book: &Book) -> Result<Book, GatewayError>;

    /// Delete a book
    async fn delete_book(&self, id: i64) -> Result<(), GatewayError>;
}
