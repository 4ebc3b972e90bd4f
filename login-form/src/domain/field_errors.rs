//! Error messages currently shown by the form.

use std::fmt;

use crate::domain::credentials::InputField;
use crate::domain::events::FormEvent;

/// Keys of the form's error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorField {
    /// Inline error under the email input.
    Email,
    /// Inline error under the password input.
    Password,
    /// Submission-time error announced above the form.
    Global,
}

impl ErrorField {
    /// Stable key shared with the view layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Global => "global",
        }
    }
}

impl From<InputField> for ErrorField {
    fn from(value: InputField) -> Self {
        match value {
            InputField::Email => Self::Email,
            InputField::Password => Self::Password,
        }
    }
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Messages keyed by [`ErrorField`].
///
/// ## Invariants
/// - A key holds a message only while that field fails validation or the
///   last submission failed; absence means valid or not yet checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    email: Option<String>,
    password: Option<String>,
    global: Option<String>,
}

impl FieldErrors {
    /// Message for any key.
    #[must_use]
    pub fn get(&self, field: ErrorField) -> Option<&str> {
        match field {
            ErrorField::Email => self.email.as_deref(),
            ErrorField::Password => self.password.as_deref(),
            ErrorField::Global => self.global.as_deref(),
        }
    }

    /// Inline message for a validated input.
    #[must_use]
    pub fn field(&self, field: InputField) -> Option<&str> {
        self.get(field.into())
    }

    /// Inline email message.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Inline password message.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Submission-time message.
    #[must_use]
    pub fn global(&self) -> Option<&str> {
        self.global.as_deref()
    }

    /// True when no key holds a message.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.global.is_none()
    }

    /// True when an inline error blocks submission.
    #[must_use]
    pub const fn has_field_errors(&self) -> bool {
        self.email.is_some() || self.password.is_some()
    }

    /// Present entries as `(key, message)` pairs, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorField, &str)> {
        [ErrorField::Global, ErrorField::Email, ErrorField::Password]
            .into_iter()
            .filter_map(move |field| self.get(field).map(|message| (field, message)))
    }

    pub(crate) fn set(&mut self, field: ErrorField, message: Option<String>) {
        let slot = match field {
            ErrorField::Email => &mut self.email,
            ErrorField::Password => &mut self.password,
            ErrorField::Global => &mut self.global,
        };
        *slot = message;
    }

    pub(crate) fn clear(&mut self, field: ErrorField) {
        self.set(field, None);
    }

    /// Events describing how `current` differs from `previous`.
    ///
    /// A global message replacing another global message produces no
    /// event: the controller always clears `global` before a submission
    /// can set it again.
    pub(crate) fn diff(previous: &Self, current: &Self) -> Vec<FormEvent> {
        let mut events = Vec::new();
        for field in InputField::ALL {
            match (previous.field(field), current.field(field)) {
                (before, Some(message)) if before != Some(message) => {
                    events.push(FormEvent::FieldErrorSet {
                        field,
                        message: message.to_owned(),
                    });
                }
                (Some(_), None) => events.push(FormEvent::FieldErrorCleared { field }),
                _ => {}
            }
        }
        match (previous.global(), current.global()) {
            (None, Some(message)) => events.push(FormEvent::GlobalErrorRaised {
                message: message.to_owned(),
            }),
            (Some(_), None) => events.push(FormEvent::GlobalErrorCleared),
            _ => {}
        }
        events
    }
}
