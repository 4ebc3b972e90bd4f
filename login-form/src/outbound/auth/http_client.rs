//! Reqwest-backed sign-in adapter.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP status mapping. Every error it returns carries a message fit to
//! show the user; diagnostic detail goes to the log instead.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::{ErrorResponseDto, LoginRequestDto};
use crate::domain::Credentials;
use crate::domain::ports::{AuthClient, AuthError};

const UNREACHABLE_MESSAGE: &str = "Could not reach the sign-in service";
const TIMEOUT_MESSAGE: &str = "The sign-in service took too long to respond";
const RATE_LIMITED_MESSAGE: &str = "Too many sign-in attempts, try again later";

/// Sign-in adapter that POSTs JSON credentials to one endpoint.
pub struct HttpAuthClient {
    client: Client,
    endpoint: Url,
}

impl HttpAuthClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let client = HttpAuthClient::new(endpoint, Duration::from_secs(10));
    /// assert!(client.is_ok() || client.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Endpoint the credentials are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&LoginRequestDto::from(credentials))
            .send()
            .await
            .map_err(|error| map_transport_error(&error))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "sign-in endpoint accepted credentials");
            return Ok(());
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(&error))?;
        Err(map_status_error(status, body.as_ref()))
    }
}

fn map_transport_error(error: &reqwest::Error) -> AuthError {
    warn!(%error, timeout = error.is_timeout(), "sign-in request failed");
    if error.is_timeout() {
        AuthError::timeout(TIMEOUT_MESSAGE)
    } else {
        AuthError::transport(UNREACHABLE_MESSAGE)
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AuthError {
    warn!(
        status = status.as_u16(),
        body = %body_preview(body),
        "sign-in endpoint returned an error status"
    );

    match status {
        StatusCode::UNAUTHORIZED => AuthError::invalid_email_or_password(),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AuthError::timeout(TIMEOUT_MESSAGE)
        }
        StatusCode::TOO_MANY_REQUESTS => AuthError::rejected(
            status.as_u16(),
            ErrorResponseDto::message_from(body).unwrap_or_else(|| RATE_LIMITED_MESSAGE.to_owned()),
        ),
        _ => AuthError::rejected(
            status.as_u16(),
            ErrorResponseDto::message_from(body)
                .unwrap_or_else(|| format!("Sign-in failed (status {})", status.as_u16())),
        ),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network sign-in mapping helpers.

    use super::*;
    use rstest::rstest;

    #[test]
    fn unauthorized_maps_to_the_invalid_credentials_message() {
        let error = map_status_error(StatusCode::UNAUTHORIZED, b"{\"message\":\"nope\"}");
        assert_eq!(error, AuthError::invalid_email_or_password());
        assert_eq!(error.message(), "Invalid email or password");
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT)]
    fn timeout_statuses_map_to_timeout(#[case] status: StatusCode) {
        let error = map_status_error(status, b"");
        assert!(
            matches!(error, AuthError::Timeout { .. }),
            "timeout statuses should map to Timeout",
        );
        assert_eq!(error.message(), TIMEOUT_MESSAGE);
    }

    #[rstest]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>".as_slice(), "Sign-in failed (status 500)")]
    #[case::locked(StatusCode::FORBIDDEN, b"{\"message\":\"Account locked\"}".as_slice(), "Account locked")]
    #[case::blank_message(StatusCode::BAD_GATEWAY, b"{\"message\":\"  \"}".as_slice(), "Sign-in failed (status 502)")]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS, b"".as_slice(), RATE_LIMITED_MESSAGE)]
    fn other_statuses_keep_the_status_and_a_display_message(
        #[case] status: StatusCode,
        #[case] body: &[u8],
        #[case] expected_message: &str,
    ) {
        let error = map_status_error(status, body);
        assert_eq!(error.status(), Some(status.as_u16()));
        assert_eq!(error.message(), expected_message);
    }

    #[test]
    fn body_preview_compacts_whitespace_and_truncates() {
        assert_eq!(body_preview(b"  a \n\t b  "), "a b");

        let long = "x".repeat(200);
        let preview = body_preview(long.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn request_body_carries_every_credential_field() {
        let credentials = Credentials::new("ada@example.com", "correct horse", true);
        let value = serde_json::to_value(LoginRequestDto::from(&credentials))
            .expect("request should serialise");
        assert_eq!(
            value,
            serde_json::json!({
                "email": "ada@example.com",
                "password": "correct horse",
                "remember": true,
            })
        );
    }

    #[test]
    fn adapter_builds_without_network_access() {
        let endpoint = Url::parse("http://127.0.0.1:9/login").expect("valid url");
        let client = HttpAuthClient::new(endpoint.clone(), Duration::from_secs(1))
            .expect("client should build");
        assert_eq!(client.endpoint(), &endpoint);
    }
}
