//! Transition notifications emitted by the sign-in form.
//!
//! Events are edge-triggered: each one describes a change that just
//! happened, never the steady state. Views subscribe through
//! [`FormObserver`] and re-render or move focus in response.

use crate::domain::credentials::{CredentialField, InputField};

/// A single state transition of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A credential value changed.
    FieldUpdated {
        /// Credential that was edited.
        field: CredentialField,
    },
    /// An inline error appeared or its message changed.
    FieldErrorSet {
        /// Input the message belongs to.
        field: InputField,
        /// Message to render next to the input.
        message: String,
    },
    /// An inline error went away.
    FieldErrorCleared {
        /// Input whose message was removed.
        field: InputField,
    },
    /// The global error went from unset to set.
    ///
    /// Emitted exactly once per occurrence; views move assistive-technology
    /// focus to the announcement region when they see it.
    GlobalErrorRaised {
        /// Message to announce.
        message: String,
    },
    /// The global error went away.
    GlobalErrorCleared,
    /// A valid submission was handed to the authentication client.
    SubmissionStarted,
    /// The authentication client accepted the credentials.
    ///
    /// The form has discarded the credentials by the time this is observed.
    LoginSucceeded,
    /// The in-flight submission finished and the form is idle again.
    SubmissionSettled,
}

impl FormEvent {
    /// Whether the view should move focus to the global error region.
    #[must_use]
    pub const fn moves_focus(&self) -> bool {
        matches!(self, Self::GlobalErrorRaised { .. })
    }
}

/// Receives form events after each transition.
///
/// Observers are invoked after the form's internal lock is released, so they
/// may read the form's state. Any `Fn(&FormEvent) + Send + Sync` closure is an
/// observer.
pub trait FormObserver: Send + Sync {
    /// Handle one event.
    fn on_event(&self, event: &FormEvent);
}

impl<F> FormObserver for F
where
    F: Fn(&FormEvent) + Send + Sync,
{
    fn on_event(&self, event: &FormEvent) {
        self(event);
    }
}
