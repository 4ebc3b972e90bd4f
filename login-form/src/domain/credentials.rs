//! Credentials captured by the sign-in form.
//!
//! Values are stored exactly as typed. Validation happens on blur and submit
//! (see [`crate::domain::validation`]), never on construction, because the
//! form must be able to hold half-typed input.

use std::fmt;

use zeroize::Zeroizing;

/// Inputs that carry validation rules and inline error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// The email address input.
    Email,
    /// The password input.
    Password,
}

impl InputField {
    /// Every validated input, in display order.
    pub const ALL: [Self; 2] = [Self::Email, Self::Password];

    /// Stable field name shared with the view layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every editable credential, including the unvalidated "remember me" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    /// The email address input.
    Email,
    /// The password input.
    Password,
    /// The "remember me" checkbox.
    Remember,
}

impl CredentialField {
    /// The validated input backing this credential, if any.
    #[must_use]
    pub const fn input(self) -> Option<InputField> {
        match self {
            Self::Email => Some(InputField::Email),
            Self::Password => Some(InputField::Password),
            Self::Remember => None,
        }
    }
}

impl From<InputField> for CredentialField {
    fn from(value: InputField) -> Self {
        match value {
            InputField::Email => Self::Email,
            InputField::Password => Self::Password,
        }
    }
}

/// A single edit applied to the form's credentials.
#[derive(Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Replace the email value.
    Email(String),
    /// Replace the password value.
    Password(String),
    /// Toggle "remember me".
    Remember(bool),
}

impl FieldUpdate {
    /// Credential touched by this update.
    #[must_use]
    pub const fn field(&self) -> CredentialField {
        match self {
            Self::Email(_) => CredentialField::Email,
            Self::Password(_) => CredentialField::Password,
            Self::Remember(_) => CredentialField::Remember,
        }
    }
}

impl fmt::Debug for FieldUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(value) => f.debug_tuple("Email").field(value).finish(),
            Self::Password(_) => f.debug_tuple("Password").field(&"<redacted>").finish(),
            Self::Remember(value) => f.debug_tuple("Remember").field(value).finish(),
        }
    }
}

/// Raw credentials as currently entered in the form.
///
/// ## Invariants
/// - The password buffer is zeroed when replaced or dropped.
/// - `Debug` output never contains the password.
///
/// # Examples
/// ```
/// use login_form::domain::{Credentials, FieldUpdate};
///
/// let mut creds = Credentials::default();
/// creds.apply(FieldUpdate::Email("ada@example.com".to_owned()));
/// creds.apply(FieldUpdate::Password("hunter2hunter2".to_owned()));
/// assert_eq!(creds.email(), "ada@example.com");
/// assert_eq!(creds.password(), "hunter2hunter2");
/// assert!(!format!("{creds:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: Zeroizing<String>,
    remember: bool,
}

impl Credentials {
    /// Build credentials from raw parts.
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember: bool) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            remember,
        }
    }

    /// Email exactly as typed.
    #[must_use]
    pub const fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password exactly as typed.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Whether the user asked to be remembered.
    #[must_use]
    pub const fn remember(&self) -> bool {
        self.remember
    }

    /// Current value of a validated input.
    #[must_use]
    pub fn value(&self, field: InputField) -> &str {
        match field {
            InputField::Email => self.email(),
            InputField::Password => self.password(),
        }
    }

    /// Apply a single field edit.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Email(value) => self.email = value,
            FieldUpdate::Password(value) => self.password = Zeroizing::new(value),
            FieldUpdate::Remember(value) => self.remember = value,
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(String::new(), String::new(), false)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember", &self.remember)
            .finish()
    }
}
