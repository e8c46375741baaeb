//! Password recovery controller
//!
//! The backend exposes no recovery endpoint yet, so a valid request only
//! flips the `sent` flag.

use tokio::sync::watch;

use super::FormController;
use crate::state::forms::RecoveryForm;

pub struct RecoveryController {
    form: FormController<RecoveryForm>,
    sent: watch::Sender<bool>,
}

impl Default for RecoveryController {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryController {
    pub fn new() -> Self {
        let (sent, _) = watch::channel(false);
        Self {
            form: FormController::new(),
            sent,
        }
    }

    pub fn form(&self) -> &FormController<RecoveryForm> {
        &self.form
    }

    pub fn was_sent(&self) -> bool {
        *self.sent.borrow()
    }

    pub fn subscribe_sent(&self) -> watch::Receiver<bool> {
        self.sent.subscribe()
    }

    /// Validate the email and mark the recovery as sent; returns whether it was
    pub fn send(&self) -> bool {
        if !self.form.validate() {
            return false;
        }
        tracing::info!("Password recovery requested");
        self.sent.send_replace(true);
        true
    }

    pub fn reset_sent(&self) {
        self.sent.send_replace(false);
    }
}
