//! Submission controllers
//!
//! One controller per screen. Each owns its form state, runs validation
//! before any remote call, and publishes snapshots for the presenting
//! surface to render.

mod book;
mod error;
mod flow;
mod login;
mod recovery;
mod registration;
mod submission;

#[cfg(test)]
mod test_support;

pub use book::BookController;
pub use error::ControllerError;
pub use flow::Flow;
pub use login::LoginController;
pub use recovery::RecoveryController;
pub use registration::RegistrationController;
pub use submission::{FormController, FormSnapshot, Phase, SubmitOutcome};
