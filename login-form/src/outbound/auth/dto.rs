//! Wire shapes for the sign-in endpoint.
//!
//! The request borrows from the domain credentials so the password is never
//! copied outside its zeroizing buffer.

use serde::{Deserialize, Serialize};

use crate::domain::Credentials;

#[derive(Serialize)]
pub(super) struct LoginRequestDto<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
    pub(super) remember: bool,
}

impl<'a> From<&'a Credentials> for LoginRequestDto<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: credentials.email(),
            password: credentials.password(),
            remember: credentials.remember(),
        }
    }
}

/// Error payload some backends return alongside a non-success status.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponseDto {
    #[serde(default)]
    pub(super) message: Option<String>,
}

impl ErrorResponseDto {
    /// Non-blank `message` field of a JSON error body, if any.
    pub(super) fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<Self>(body)
            .ok()
            .and_then(|dto| dto.message)
            .map(|message| message.trim().to_owned())
            .filter(|message| !message.is_empty())
    }
}
