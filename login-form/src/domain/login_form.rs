//! Sign-in form controller.
//!
//! [`LoginForm`] owns the credentials, the error map and the submission
//! state. Views feed it edits, blurs and submits, then re-render from its
//! state or from the [`FormEvent`]s it emits after every transition.
//!
//! State lives behind a mutex that is never held across an await or while
//! observers run, so a second `submit()` issued while the first one is
//! waiting on the backend sees `Submitting` and backs off.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::domain::credentials::{Credentials, FieldUpdate, InputField};
use crate::domain::events::{FormEvent, FormObserver};
use crate::domain::field_errors::{ErrorField, FieldErrors};
use crate::domain::ports::{AuthClient, AuthError};
use crate::domain::validation::validate_field;

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Accepting edits and submits.
    #[default]
    Idle,
    /// Waiting on the authentication client.
    Submitting,
}

/// Result of a [`LoginForm::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; the backend was not contacted.
    Invalid,
    /// Another submission is still in flight; nothing changed.
    AlreadySubmitting,
    /// The backend accepted the credentials.
    Authenticated,
    /// The backend or the transport rejected the attempt.
    Rejected(AuthError),
}

/// Point-in-time copy of the form for views that poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Values bound to the inputs.
    pub credentials: Credentials,
    /// Messages to render.
    pub errors: FieldErrors,
    /// Whether the submit control should be disabled.
    pub submission: SubmissionState,
}

#[derive(Debug, Default)]
struct FormState {
    credentials: Credentials,
    errors: FieldErrors,
    submission: SubmissionState,
}

/// Controller for an email/password sign-in form.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use login_form::domain::ports::FixtureAuthClient;
/// use login_form::domain::{InputField, LoginForm};
///
/// let form = LoginForm::new(Arc::new(FixtureAuthClient::default()));
/// form.set_email("not-an-email");
/// form.validate_field(InputField::Email);
/// assert_eq!(form.errors().email(), Some("Enter a valid email address"));
///
/// form.set_email("ada@example.com");
/// assert_eq!(form.errors().email(), None);
/// ```
pub struct LoginForm<A: ?Sized> {
    auth_client: Arc<A>,
    state: Mutex<FormState>,
    observers: Mutex<Vec<Arc<dyn FormObserver>>>,
}

impl<A: ?Sized> LoginForm<A> {
    /// Create an empty, idle form backed by `auth_client`.
    pub fn new(auth_client: Arc<A>) -> Self {
        Self {
            auth_client,
            state: Mutex::new(FormState::default()),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Register an observer for every subsequent transition.
    pub fn subscribe(&self, observer: Arc<dyn FormObserver>) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Copy of the whole form state.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock_state();
        FormSnapshot {
            credentials: state.credentials.clone(),
            errors: state.errors.clone(),
            submission: state.submission,
        }
    }

    /// Current input values.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.lock_state().credentials.clone()
    }

    /// Current error messages.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.lock_state().errors.clone()
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn submission_state(&self) -> SubmissionState {
        self.lock_state().submission
    }

    /// Apply a user edit.
    ///
    /// Editing the email or password clears that input's inline error. The
    /// global error survives edits; only a fresh submit attempt clears it.
    pub fn set_field(&self, update: FieldUpdate) {
        let field = update.field();
        self.transition(|state, events| {
            state.credentials.apply(update);
            if let Some(input) = field.input() {
                state.errors.clear(input.into());
            }
            events.push(FormEvent::FieldUpdated { field });
        });
    }

    /// Replace the email value.
    pub fn set_email(&self, value: impl Into<String>) {
        self.set_field(FieldUpdate::Email(value.into()));
    }

    /// Replace the password value.
    pub fn set_password(&self, value: impl Into<String>) {
        self.set_field(FieldUpdate::Password(value.into()));
    }

    /// Set the "remember me" flag.
    pub fn set_remember(&self, value: bool) {
        self.set_field(FieldUpdate::Remember(value));
    }

    /// Validate one input against its current value, as on blur.
    ///
    /// Sets or clears that input's inline error and leaves every other entry,
    /// including the global error, untouched.
    pub fn validate_field(&self, field: InputField) {
        self.transition(|state, _| {
            let message =
                validate_field(field, &state.credentials).map(|error| error.message());
            debug!(%field, valid = message.is_none(), "field validated");
            state.errors.set(field.into(), message);
        });
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate the state under the lock, then notify observers with the
    /// events pushed by `apply` followed by the resulting error diff.
    fn transition<R>(&self, apply: impl FnOnce(&mut FormState, &mut Vec<FormEvent>) -> R) -> R {
        let mut events = Vec::new();
        let result = {
            let mut state = self.lock_state();
            let before = state.errors.clone();
            let result = apply(&mut *state, &mut events);
            events.extend(FieldErrors::diff(&before, &state.errors));
            result
        };
        self.notify(&events);
        result
    }

    fn notify(&self, events: &[FormEvent]) {
        if events.is_empty() {
            return;
        }
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for event in events {
            for observer in &observers {
                observer.on_event(event);
            }
        }
    }

    /// Validate both inputs and, when they pass, move to `Submitting`.
    ///
    /// Returns the credentials to send, or the outcome that ends the attempt.
    fn begin_submission(&self) -> Result<Credentials, SubmitOutcome> {
        self.transition(|state, events| {
            if state.submission == SubmissionState::Submitting {
                warn!("submit ignored: a submission is already in flight");
                return Err(SubmitOutcome::AlreadySubmitting);
            }

            state.errors.clear(ErrorField::Global);
            for field in InputField::ALL {
                let message =
                    validate_field(field, &state.credentials).map(|error| error.message());
                state.errors.set(field.into(), message);
            }
            if state.errors.has_field_errors() {
                debug!("submit blocked by field validation");
                return Err(SubmitOutcome::Invalid);
            }

            state.submission = SubmissionState::Submitting;
            events.push(FormEvent::SubmissionStarted);
            Ok(state.credentials.clone())
        })
    }

    /// Record the backend's answer and return to `Idle` before observers
    /// hear about it.
    fn complete_submission(&self, result: Result<(), AuthError>) -> SubmitOutcome {
        self.transition(|state, events| {
            state.submission = SubmissionState::Idle;
            match result {
                Ok(()) => {
                    info!("login succeeded");
                    state.credentials = Credentials::default();
                    events.push(FormEvent::LoginSucceeded);
                    SubmitOutcome::Authenticated
                }
                Err(error) => {
                    warn!(status = ?error.status(), reason = %error, "login rejected");
                    state
                        .errors
                        .set(ErrorField::Global, Some(error.message().to_owned()));
                    SubmitOutcome::Rejected(error)
                }
            }
        })
    }
}

impl<A> LoginForm<A>
where
    A: AuthClient + ?Sized,
{
    /// Attempt to sign in with the current credentials.
    ///
    /// Both inputs are validated first and their inline errors replaced by
    /// the results; any failure ends the attempt without contacting the
    /// backend. Otherwise the form enters `Submitting`, calls the
    /// authentication client once, and records the outcome. The form is back
    /// in `Idle` before observers see the outcome, and stays recoverable if
    /// the client panics or the future is dropped.
    /// Authentication failures are returned as data, never propagated.
    pub async fn submit(&self) -> SubmitOutcome {
        let credentials = match self.begin_submission() {
            Ok(credentials) => credentials,
            Err(outcome) => return outcome,
        };

        let guard = SubmittingGuard { state: &self.state };
        let result = self.auth_client.login(&credentials).await;
        drop(credentials);
        guard.disarm();
        let outcome = self.complete_submission(result);

        debug!("submission settled");
        self.notify(&[FormEvent::SubmissionSettled]);
        outcome
    }
}

/// Returns the form to `Idle` when a submission ends without completing,
/// such as a dropped `submit` future or a panic inside the client.
struct SubmittingGuard<'a> {
    state: &'a Mutex<FormState>,
}

impl SubmittingGuard<'_> {
    /// Hand the reset over to `complete_submission`, so a submission begun
    /// after it is never knocked back to `Idle`.
    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .submission = SubmissionState::Idle;
    }
}

#[cfg(test)]
#[path = "login_form_tests.rs"]
mod tests;
