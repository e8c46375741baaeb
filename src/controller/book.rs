//! Book catalog controller: list loading plus create/update/delete

use std::sync::Arc;

use tokio::sync::watch;

use super::{ControllerError, Flow, FormController, SubmitOutcome};
use crate::gateway::{GatewayError, RemoteGateway};
use crate::state::forms::BookForm;
use crate::state::Book;

/// Drives the book form and keeps the in-memory catalog in sync with the backend
pub struct BookController {
    form: FormController<BookForm>,
    gateway: Arc<dyn RemoteGateway>,
    books: watch::Sender<Vec<Book>>,
    /// Id of the book loaded into the form for editing
    editing: watch::Sender<Option<i64>>,
}

impl BookController {
    /// Create a controller with an empty catalog; call [`Self::load_books`] to fill it
    pub fn new(gateway: Arc<dyn RemoteGateway>) -> Self {
        let (books, _) = watch::channel(Vec::new());
        let (editing, _) = watch::channel(None);
        Self {
            form: FormController::new(),
            gateway,
            books,
            editing,
        }
    }

    pub fn form(&self) -> &FormController<BookForm> {
        &self.form
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.borrow().clone()
    }

    pub fn subscribe_books(&self) -> watch::Receiver<Vec<Book>> {
        self.books.subscribe()
    }

    pub fn editing_id(&self) -> Option<i64> {
        *self.editing.borrow()
    }

    /// Replace the catalog with the server's list
    ///
    /// On failure the current list is kept and the general error is set.
    pub async fn load_books(&self) -> SubmitOutcome<usize> {
        let outcome = self
            .form
            .submit_with(Flow::LoadBooks, false, move |_| self.gateway.list_books())
            .await;
        outcome.map(|books| {
            let count = books.len();
            tracing::debug!("Loaded {count} books");
            self.books.send_replace(books);
            count
        })
    }

    /// Load a persisted book into the form; the next submit updates it
    pub fn edit(&self, book: &Book) -> Result<(), ControllerError> {
        let id = book.id.ok_or_else(|| ControllerError::MissingBookId {
            title: book.title.clone(),
        })?;
        self.form.load(BookForm::from_book(book));
        self.editing.send_replace(Some(id));
        Ok(())
    }

    /// Leave edit mode and empty the form
    pub fn cancel_edit(&self) {
        self.editing.send_replace(None);
        self.form.reset();
    }

    /// Create or update depending on whether a book is being edited
    pub async fn submit(&self) -> SubmitOutcome<Book> {
        match self.editing_id() {
            Some(id) => self.update_book(id).await,
            None => self.create_book().await,
        }
    }

    pub async fn create_book(&self) -> SubmitOutcome<Book> {
        let outcome = self
            .form
            .submit_with(Flow::CreateBook, true, move |values| async move {
                let book = book_from_form(&values, None)?;
                self.gateway.create_book(&book).await
            })
            .await;
        self.after_save(outcome).await
    }

    pub async fn update_book(&self, id: i64) -> SubmitOutcome<Book> {
        let outcome = self
            .form
            .submit_with(Flow::UpdateBook, true, move |values| async move {
                let book = book_from_form(&values, Some(id))?;
                self.gateway.update_book(id, &book).await
            })
            .await;
        self.after_save(outcome).await
    }

    /// Delete without validation; confirmation is the caller's job
    pub async fn delete_book(&self, id: i64) -> SubmitOutcome<()> {
        let outcome = self
            .form
            .submit_with(Flow::DeleteBook, false, move |_| self.gateway.delete_book(id))
            .await;
        if outcome.is_success() {
            if self.editing_id() == Some(id) {
                self.cancel_edit();
            }
            self.load_books().await;
        }
        outcome
    }

    async fn after_save(&self, outcome: SubmitOutcome<Book>) -> SubmitOutcome<Book> {
        if outcome.is_success() {
            self.editing.send_replace(None);
            self.form.reset();
            self.load_books().await;
        }
        outcome
    }

    /// Clear success and general error messages
    pub fn clear_messages(&self) {
        self.form.clear_messages();
    }

    pub fn dispose(&self) {
        self.form.dispose();
    }
}

fn book_from_form(values: &BookForm, id: Option<i64>) -> Result<Book, GatewayError> {
    values
        .to_book(id)
        .ok_or_else(|| GatewayError::Decode(format!("Número de páginas inválido: {}", values.pages)))
}
