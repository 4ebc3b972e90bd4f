//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters translate between domain types and wire representations and
//! contain no form logic.

pub mod auth;

pub use auth::HttpAuthClient;
