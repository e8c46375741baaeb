//! Application state module

mod book;
pub mod forms;
mod user;

pub use book::*;
pub use user::*;
