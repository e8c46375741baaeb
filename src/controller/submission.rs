//! Form controller: owns one form and runs its submissions
//!
//! State is published through a `watch` channel; the controller is the only
//! writer. A submission goes `Idle -> Validating -> Submitting ->
//! Succeeded | Failed`. The completion phase is held until the next
//! submission or [`FormController::clear_messages`].

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::Flow;
use crate::gateway::GatewayError;
use crate::state::forms::{Form, FormState};

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Published while validators run; always settles to `Idle` or `Submitting`
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Everything a presenting surface needs to render a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot<F: Form> {
    pub form: FormState<F>,
    /// A remote call is in flight; editing and submitting should be disabled
    pub busy: bool,
    pub phase: Phase,
    /// One-shot success message, cleared by `clear_messages`
    pub success: Option<String>,
}

impl<F: Form> Default for FormSnapshot<F> {
    fn default() -> Self {
        Self {
            form: FormState::new(),
            busy: false,
            phase: Phase::Idle,
            success: None,
        }
    }
}

impl<F: Form> FormSnapshot<F> {
    pub fn general_error(&self) -> Option<&str> {
        self.form.general_error()
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// Validation failed; no remote call was made
    Invalid,
    /// Another submission was in flight; no remote call was made
    Busy,
    Succeeded(T),
    /// The general error message has been published
    Failed(GatewayError),
    /// The controller was disposed before the call completed
    Cancelled,
}

impl<T> SubmitOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SubmitOutcome<U> {
        match self {
            Self::Invalid => SubmitOutcome::Invalid,
            Self::Busy => SubmitOutcome::Busy,
            Self::Succeeded(value) => SubmitOutcome::Succeeded(f(value)),
            Self::Failed(err) => SubmitOutcome::Failed(err),
            Self::Cancelled => SubmitOutcome::Cancelled,
        }
    }
}

/// Owns a form's state and serializes its submissions
pub struct FormController<F: Form> {
    state: watch::Sender<FormSnapshot<F>>,
    busy: AtomicBool,
    cancel: CancellationToken,
}

impl<F: Form> Default for FormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Form> FormController<F> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(FormSnapshot::default());
        Self {
            state,
            busy: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    /// Observe every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot<F>> {
        self.state.subscribe()
    }

    /// Copy of the current snapshot
    pub fn snapshot(&self) -> FormSnapshot<F> {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn update_field(&self, field: F::Field, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.form.update(field, value));
    }

    pub fn toggle(&self, field: F::Field, choice: F::Choice) {
        self.state.send_modify(|s| s.form.toggle(field, choice));
    }

    /// Empty the form and drop every field error and the general error
    pub fn reset(&self) {
        self.state.send_modify(|s| s.form.reset());
    }

    /// Replace all values at once and validate them
    pub fn load(&self, values: F) {
        self.state.send_modify(|s| s.form.load(values));
    }

    /// Dismiss the success and general error messages; field errors stay
    pub fn clear_messages(&self) {
        self.state.send_modify(|s| {
            s.success = None;
            s.form.clear_general_error();
            if matches!(s.phase, Phase::Succeeded | Phase::Failed) {
                s.phase = Phase::Idle;
            }
        });
    }

    /// Run every validator, then settle back to `Idle` whatever the result
    pub fn validate(&self) -> bool {
        self.state.send_modify(|s| s.phase = Phase::Validating);
        let mut valid = false;
        self.state.send_modify(|s| {
            valid = s.form.validate_all();
            s.phase = Phase::Idle;
        });
        valid
    }

    /// Cancel any in-flight submission; later submissions end as `Cancelled`
    pub fn dispose(&self) {
        tracing::debug!("Disposing form controller");
        self.cancel.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Validate (when `validate` is set), then run `call` exactly once
    ///
    /// `call` receives a copy of the form values taken after validation.
    pub async fn submit_with<T, C, Fut>(&self, flow: Flow, validate: bool, call: C) -> SubmitOutcome<T>
    where
        C: FnOnce(F) -> Fut,
        Fut: Future<Output = Result<T, GatewayError>>,
    {
        if self.is_disposed() {
            return SubmitOutcome::Cancelled;
        }
        if self.is_busy() {
            tracing::warn!("Ignoring {} submit: another submission is in flight", flow.name());
            return SubmitOutcome::Busy;
        }
        if validate && !self.validate() {
            tracing::debug!("{} form invalid, not submitting", flow.name());
            return SubmitOutcome::Invalid;
        }
        let Some(_guard) = BusyGuard::acquire(self) else {
            tracing::warn!("Ignoring {} submit: another submission is in flight", flow.name());
            return SubmitOutcome::Busy;
        };

        let mut values = None;
        self.state.send_modify(|s| {
            s.busy = true;
            s.phase = Phase::Submitting;
            s.form.clear_general_error();
            // A reload keeps the message of the save that triggered it
            if flow != Flow::LoadBooks {
                s.success = None;
            }
            values = Some(s.form.values().clone());
        });
        let values = values.unwrap_or_default();

        tracing::info!("Submitting {}", flow.name());
        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::info!("{} cancelled", flow.name());
                return SubmitOutcome::Cancelled;
            }
            result = call(values) => result,
        };

        match result {
            Ok(value) => {
                tracing::info!("{} succeeded", flow.name());
                self.state.send_modify(|s| {
                    s.phase = Phase::Succeeded;
                    if let Some(message) = flow.success_message() {
                        s.success = Some(message.to_string());
                    }
                });
                SubmitOutcome::Succeeded(value)
            }
            Err(err) => {
                let message = flow.failure_message(&err);
                tracing::warn!("{} failed: {message}", flow.name());
                self.state.send_modify(|s| {
                    s.phase = Phase::Failed;
                    s.form.set_general_error(message);
                });
                SubmitOutcome::Failed(err)
            }
        }
    }
}

/// Holds the busy flag for one submission and releases it on every exit path
struct BusyGuard<'a, F: Form> {
    controller: &'a FormController<F>,
}

impl<'a, F: Form> BusyGuard<'a, F> {
    fn acquire(controller: &'a FormController<F>) -> Option<Self> {
        controller
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { controller })
    }
}

impl<F: Form> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        self.controller.busy.store(false, Ordering::Release);
        self.controller.state.send_modify(|s| {
            s.busy = false;
            // Cancelled mid-call: nothing was reported
            if s.phase == Phase::Submitting {
                s.phase = Phase::Idle;
            }
        });
    }
}
