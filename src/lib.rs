//! ZONALIBROS client core
//!
//! Form validation, submission controllers and the REST gateway behind the
//! ZONALIBROS book catalog: registration, login, password recovery and
//! book CRUD. Rendering is left to whatever subscribes to the controllers.

pub mod config;
pub mod controller;
pub mod gateway;
pub mod state;

pub use config::ClientConfig;
pub use controller::{
    BookController, ControllerError, FormController, FormSnapshot, LoginController, Phase,
    RecoveryController, RegistrationController, SubmitOutcome,
};
pub use gateway::{GatewayError, HttpGateway, RemoteGateway};
