//! Login controller

use std::sync::Arc;

use tokio::sync::watch;

use super::{Flow, FormController, SubmitOutcome};
use crate::gateway::RemoteGateway;
use crate::state::forms::LoginForm;
use crate::state::Session;

pub struct LoginController {
    form: FormController<LoginForm>,
    gateway: Arc<dyn RemoteGateway>,
    session: watch::Sender<Option<Session>>,
}

impl LoginController {
    pub fn new(gateway: Arc<dyn RemoteGateway>) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            form: FormController::new(),
            gateway,
            session,
        }
    }

    pub fn form(&self) -> &FormController<LoginForm> {
        &self.form
    }

    /// Session of the last successful login
    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn subscribe_session(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }

    /// Validate, authenticate, and hand the session to `on_success`
    pub async fn submit(&self, on_success: impl FnOnce(&Session)) -> SubmitOutcome<Session> {
        let outcome = self
            .form
            .submit_with(Flow::Login, true, move |values| async move {
                let credentials = values.credentials();
                self.gateway.login(&credentials).await
            })
            .await;

        if let SubmitOutcome::Succeeded(session) = &outcome {
            tracing::info!("Logged in as {}", session.user.email);
            self.session.send_replace(Some(session.clone()));
            on_success(session);
        }
        outcome
    }

    /// Forget the current session and empty the form
    pub fn logout(&self) {
        self.session.send_replace(None);
        self.form.reset();
    }

    pub fn clear_messages(&self) {
        self.form.clear_messages();
    }

    pub fn dispose(&self) {
        self.form.dispose();
    }
}
