//! Account registration controller

use std::sync::Arc;

use tokio::sync::watch;

use super::{Flow, FormController, SubmitOutcome};
use crate::gateway::RemoteGateway;
use crate::state::forms::RegistrationForm;
use crate::state::UserRecord;

pub struct RegistrationController {
    form: FormController<RegistrationForm>,
    gateway: Arc<dyn RemoteGateway>,
    succeeded: watch::Sender<bool>,
}

impl RegistrationController {
    pub fn new(gateway: Arc<dyn RemoteGateway>) -> Self {
        let (succeeded, _) = watch::channel(false);
        Self {
            form: FormController::new(),
            gateway,
            succeeded,
        }
    }

    pub fn form(&self) -> &FormController<RegistrationForm> {
        &self.form
    }

    pub fn registration_succeeded(&self) -> bool {
        *self.succeeded.borrow()
    }

    pub fn subscribe_succeeded(&self) -> watch::Receiver<bool> {
        self.succeeded.subscribe()
    }

    /// Acknowledge the success flag once the caller has navigated away
    pub fn reset_registration_succeeded(&self) {
        self.succeeded.send_replace(false);
    }

    /// Validate every field, create the account, then hand the stored record to `on_success`
    pub async fn submit(&self, on_success: impl FnOnce(&UserRecord)) -> SubmitOutcome<UserRecord> {
        let outcome = self
            .form
            .submit_with(Flow::Register, true, move |values| async move {
                let user = values.to_user();
                self.gateway.register(&user).await
            })
            .await;

        if let SubmitOutcome::Succeeded(user) = &outcome {
            tracing::info!("Registered account {}", user.email);
            self.succeeded.send_replace(true);
            on_success(user);
        }
        outcome
    }

    pub fn clear_messages(&self) {
        self.form.clear_messages();
    }

    pub fn dispose(&self) {
        self.form.dispose();
    }
}
