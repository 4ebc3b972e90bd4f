//! Domain ports for the hexagonal boundary.
//!
//! The form drives exactly one outbound dependency: the remote sign-in call.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_client;

#[cfg(test)]
pub(crate) use auth_client::MockAuthClient;
pub use auth_client::{AuthClient, AuthError, FixtureAuthClient, INVALID_CREDENTIALS_MESSAGE};
