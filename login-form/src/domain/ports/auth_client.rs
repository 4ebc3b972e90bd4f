//! Driven port for the remote sign-in call.
//!
//! The form only needs to know whether the backend accepted the credentials
//! and, if not, which message to show. URL, headers and serialisation belong
//! to adapters such as [`crate::outbound::HttpAuthClient`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::Credentials;

use super::define_port_error;

/// Message shown when the backend rejects the email/password pair.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

define_port_error! {
    /// Failures reported by an [`AuthClient`].
    ///
    /// Every variant carries a display message; the form shows it verbatim
    /// as the global error.
    pub enum AuthError {
        /// The backend rejected the credentials (HTTP 401).
        InvalidCredentials {
            /// Message to display.
            message: String,
        } => "{message}",
        /// The backend answered with another non-success status.
        Rejected {
            /// HTTP status code returned by the backend.
            status: u16,
            /// Message to display.
            message: String,
        } => "{message}",
        /// The request never produced a response.
        Transport {
            /// Message to display.
            message: String,
        } => "{message}",
        /// The request did not complete in time.
        Timeout {
            /// Message to display.
            message: String,
        } => "{message}",
    }
}

impl AuthError {
    /// Rejection used for a wrong email/password pair.
    #[must_use]
    pub fn invalid_email_or_password() -> Self {
        Self::invalid_credentials(INVALID_CREDENTIALS_MESSAGE)
    }

    /// Message shown to the user.
    #[must_use]
    pub const fn message(&self) -> &str {
        match self {
            Self::InvalidCredentials { message }
            | Self::Rejected { message, .. }
            | Self::Transport { message }
            | Self::Timeout { message } => message.as_str(),
        }
    }

    /// HTTP status associated with the failure, when there was a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidCredentials { .. } => Some(401),
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Timeout { .. } => None,
        }
    }
}

/// Port performing the remote sign-in call.
///
/// Implementations must not retain or alter the credentials; they receive a
/// shared reference for the duration of the call only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Authenticate the credentials against the backend.
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// In-memory authenticator standing in for a real backend.
///
/// Accepts exactly one email/password pair after a fixed delay, mimicking
/// network latency. Defaults to `demo@example.com` / `password123` and 700 ms.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use login_form::domain::ports::FixtureAuthClient;
///
/// let client = FixtureAuthClient::new("ops@example.com", "correct horse")
///     .with_latency(Duration::ZERO);
/// assert_eq!(client.latency(), Duration::ZERO);
/// ```
#[derive(Clone)]
pub struct FixtureAuthClient {
    email: String,
    password: Zeroizing<String>,
    latency: Duration,
}

impl FixtureAuthClient {
    /// Email accepted by the default fixture.
    pub const DEMO_EMAIL: &'static str = "demo@example.com";
    /// Password accepted by the default fixture.
    pub const DEMO_PASSWORD: &'static str = "password123";
    /// Delay applied before answering.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(700);

    /// Accept `email` / `password` after the default latency.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Replace the simulated latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Simulated latency applied to every call.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

impl fmt::Debug for FixtureAuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureAuthClient")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("latency", &self.latency)
            .finish()
    }
}

impl Default for FixtureAuthClient {
    fn default() -> Self {
        Self::new(Self::DEMO_EMAIL, Self::DEMO_PASSWORD)
    }
}

#[async_trait]
impl AuthClient for FixtureAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if credentials.email() == self.email && credentials.password() == self.password.as_str() {
            Ok(())
        } else {
            Err(AuthError::invalid_email_or_password())
        }
    }
}
