//! Sign-in backend adapters.
//!
//! This module provides a thin HTTP implementation of the `AuthClient` port.

mod dto;
mod http_client;

pub use http_client::HttpAuthClient;
