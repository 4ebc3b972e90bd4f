//! Domain primitives and the sign-in form state machine.
//!
//! Purpose: keep every rule the form enforces (validation messages, error
//! lifetimes, submission lifecycle) free of rendering and transport concerns.
//!
//! Public surface:
//! - `Credentials` / `FieldUpdate`: what the user typed.
//! - `FieldErrors`: per-field and global messages shown by the view.
//! - `FormEvent` / `FormObserver`: transition notifications.
//! - `LoginForm`: the controller owning all of the above.

pub mod credentials;
pub mod events;
pub mod field_errors;
pub mod login_form;
pub mod ports;
pub mod validation;

pub use self::credentials::{CredentialField, Credentials, FieldUpdate, InputField};
pub use self::events::{FormEvent, FormObserver};
pub use self::field_errors::{ErrorField, FieldErrors};
pub use self::login_form::{FormSnapshot, LoginForm, SubmissionState, SubmitOutcome};
pub use self::validation::{
    FieldValidationError, PASSWORD_MIN_LENGTH, validate_email, validate_field, validate_password,
};
