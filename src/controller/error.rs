//! Caller contract violations

use thiserror::Error;

/// Errors returned when a controller is driven in a way it does not support
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("book '{title}' has no id; only persisted books can be edited")]
    MissingBookId { title: String },
}
