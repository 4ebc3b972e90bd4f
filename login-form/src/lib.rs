//! Validation and submission core for an email/password sign-in form.
//!
//! The crate owns the form's state machine: field validation, error-state
//! transitions, the submission lifecycle, and the one-shot "global error
//! appeared" edge views use to move focus. Rendering and the authentication
//! backend stay outside; the backend is reached through the
//! [`domain::ports::AuthClient`] port.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use login_form::domain::ports::FixtureAuthClient;
//! use login_form::domain::{LoginForm, SubmitOutcome};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let client = FixtureAuthClient::default().with_latency(std::time::Duration::ZERO);
//! let form = LoginForm::new(Arc::new(client));
//! form.set_email("demo@example.com");
//! form.set_password("password123");
//!
//! assert_eq!(form.submit().await, SubmitOutcome::Authenticated);
//! # });
//! ```

mod config;
pub mod domain;
pub mod outbound;

pub use config::{ConfigError, LoginFormSettings};
