//! Field validation rules for the sign-in form.
//!
//! Every rule is pure and synchronous: called with the raw field value, it
//! either accepts it or returns the message shown next to the input.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::credentials::{Credentials, InputField};

/// Minimum number of characters a password must contain.
pub const PASSWORD_MIN_LENGTH: usize = 8;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local-part@domain.tld with no whitespace or extra `@` in any segment.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Reasons a field value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldValidationError {
    /// The email input is empty.
    #[error("Email is required")]
    EmailRequired,
    /// The email input is not shaped like `local@domain.tld`.
    #[error("Enter a valid email address")]
    EmailInvalid,
    /// The password input is empty.
    #[error("Password is required")]
    PasswordRequired,
    /// The password is shorter than the minimum length.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },
}

impl FieldValidationError {
    /// Machine-readable rejection code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmailRequired | Self::PasswordRequired => "required",
            Self::EmailInvalid => "invalid_format",
            Self::PasswordTooShort { .. } => "too_short",
        }
    }

    /// Input the error belongs to.
    #[must_use]
    pub const fn field(&self) -> InputField {
        match self {
            Self::EmailRequired | Self::EmailInvalid => InputField::Email,
            Self::PasswordRequired | Self::PasswordTooShort { .. } => InputField::Password,
        }
    }

    /// Human-readable message rendered inline by the view.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Check an email value, returning the typed rejection on failure.
///
/// # Errors
/// Returns [`FieldValidationError::EmailRequired`] for an empty value and
/// [`FieldValidationError::EmailInvalid`] when the value is not an address.
pub fn check_email(value: &str) -> Result<(), FieldValidationError> {
    if value.is_empty() {
        return Err(FieldValidationError::EmailRequired);
    }
    if !email_regex().is_match(value) {
        return Err(FieldValidationError::EmailInvalid);
    }
    Ok(())
}

/// Check a password value, returning the typed rejection on failure.
///
/// Length is counted in Unicode scalar values.
///
/// # Errors
/// Returns [`FieldValidationError::PasswordRequired`] for an empty value and
/// [`FieldValidationError::PasswordTooShort`] below [`PASSWORD_MIN_LENGTH`].
pub fn check_password(value: &str) -> Result<(), FieldValidationError> {
    if value.is_empty() {
        return Err(FieldValidationError::PasswordRequired);
    }
    if value.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(FieldValidationError::PasswordTooShort {
            min: PASSWORD_MIN_LENGTH,
        });
    }
    Ok(())
}

/// Validate an email value, returning the inline message when it fails.
///
/// # Examples
/// ```
/// use login_form::domain::validate_email;
///
/// assert_eq!(validate_email("").as_deref(), Some("Email is required"));
/// assert_eq!(validate_email("ada@example.com"), None);
/// ```
#[must_use]
pub fn validate_email(value: &str) -> Option<String> {
    check_email(value).err().map(|error| error.message())
}

/// Validate a password value, returning the inline message when it fails.
///
/// # Examples
/// ```
/// use login_form::domain::validate_password;
///
/// assert_eq!(
///     validate_password("short").as_deref(),
///     Some("Password must be at least 8 characters")
/// );
/// assert_eq!(validate_password("long enough"), None);
/// ```
#[must_use]
pub fn validate_password(value: &str) -> Option<String> {
    check_password(value).err().map(|error| error.message())
}

/// Run the rule matching `field` against the current credentials.
#[must_use]
pub fn validate_field(field: InputField, credentials: &Credentials) -> Option<FieldValidationError> {
    let value = credentials.value(field);
    let result = match field {
        InputField::Email => check_email(value),
        InputField::Password => check_password(value),
    };
    result.err()
}
