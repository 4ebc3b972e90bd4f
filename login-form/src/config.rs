//! Sign-in backend configuration loaded via `OrthoConfig`.
#![allow(
    missing_docs,
    reason = "the OrthoConfig derive emits undocumented CLI and merge helpers"
)]

use std::ffi::OsString;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::domain::ports::{AuthClient, FixtureAuthClient};
use crate::outbound::HttpAuthClient;

/// Failures turning settings into a usable authentication client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings could not be read from the environment or config files.
    #[error("failed to load settings: {message}")]
    Load {
        /// Loader diagnostic.
        message: String,
    },
    /// `auth_url` is not an absolute URL.
    #[error("invalid auth url `{url}`: {message}")]
    InvalidAuthUrl {
        /// Offending value.
        url: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {message}")]
    HttpClient {
        /// Builder diagnostic.
        message: String,
    },
}

/// Configuration values selecting and tuning the authentication backend.
///
/// Only the request timeout carries a default; every other unset value
/// falls back to the in-memory demo authenticator and its defaults.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOGIN_FORM")]
pub struct LoginFormSettings {
    /// Sign-in endpoint. When unset the demo authenticator is used.
    pub auth_url: Option<String>,
    /// HTTP request timeout in milliseconds.
    #[ortho_config(default = 10_000)]
    pub request_timeout_ms: u64,
    /// Simulated latency of the demo authenticator in milliseconds.
    pub demo_latency_ms: Option<u64>,
    /// Email accepted by the demo authenticator.
    pub demo_email: Option<String>,
    /// Password accepted by the demo authenticator.
    pub demo_password: Option<String>,
}

impl fmt::Debug for LoginFormSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFormSettings")
            .field("auth_url", &self.auth_url)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("demo_latency_ms", &self.demo_latency_ms)
            .field("demo_email", &self.demo_email)
            .field(
                "demo_password",
                &self.demo_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl LoginFormSettings {
    /// Load settings from configuration files and `LOGIN_FORM_*` variables,
    /// ignoring the process's command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a source cannot be parsed.
    pub fn from_environment(program: &str) -> Result<Self, ConfigError> {
        Self::load_from_iter([OsString::from(program)]).map_err(|error| ConfigError::Load {
            message: error.to_string(),
        })
    }

    /// Return the configured request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Return the configured demo latency, falling back to the fixture default.
    #[must_use]
    pub fn demo_latency(&self) -> Duration {
        self.demo_latency_ms
            .map_or(FixtureAuthClient::DEFAULT_LATENCY, Duration::from_millis)
    }

    /// Build the authentication client these settings describe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAuthUrl`] when `auth_url` does not parse
    /// and [`ConfigError::HttpClient`] when reqwest cannot build a client.
    pub fn build_auth_client(&self) -> Result<Arc<dyn AuthClient>, ConfigError> {
        let Some(raw_url) = self.auth_url.as_deref() else {
            info!(latency_ms = self.demo_latency().as_millis(), "using demo authenticator");
            return Ok(Arc::new(self.demo_client()));
        };

        let endpoint = Url::parse(raw_url).map_err(|error| ConfigError::InvalidAuthUrl {
            url: raw_url.to_owned(),
            message: error.to_string(),
        })?;
        let client = HttpAuthClient::new(endpoint, self.request_timeout()).map_err(|error| {
            ConfigError::HttpClient {
                message: error.to_string(),
            }
        })?;
        info!(endpoint = %client.endpoint(), "using http authenticator");
        Ok(Arc::new(client))
    }

    fn demo_client(&self) -> FixtureAuthClient {
        let fixture = match (&self.demo_email, &self.demo_password) {
            (Some(email), Some(password)) => FixtureAuthClient::new(email, password),
            (Some(email), None) => FixtureAuthClient::new(email, FixtureAuthClient::DEMO_PASSWORD),
            (None, Some(password)) => FixtureAuthClient::new(FixtureAuthClient::DEMO_EMAIL, password),
            (None, None) => FixtureAuthClient::default(),
        };
        fixture.with_latency(self.demo_latency())
    }
}
