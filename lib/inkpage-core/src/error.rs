//! Error types for inkpage.
//!
//! Every loader reports failure through [`Error`]; none of them folds a
//! failed response into its success value.

use derive_more::{Display, Error, From};

use crate::{ErrorPayload, status_text};

/// Main error type for loader operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The backend answered with a status other than `200 OK`.
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Human-readable message taken from the payload, or the status text.
        message: String,
        /// Decoded error body, or one synthesized from the status text.
        #[error(not(source))]
        payload: ErrorPayload,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request: bad route parameters, template or base URL.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// The backend kept redirecting.
    #[display("too many redirects ({count}, max {max})")]
    #[from(skip)]
    TooManyRedirects {
        /// Redirects followed before giving up.
        count: usize,
        /// Configured limit.
        max: usize,
    },

    /// A redirect without a usable `Location`.
    #[display("invalid redirect: {_0}")]
    #[from(skip)]
    InvalidRedirect(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// A `200 OK` body that is not JSON, has the wrong shape, or fails validation.
    #[display("malformed response payload at '{path}': {message}")]
    #[from(skip)]
    MalformedPayload {
        /// Path to the offending field (e.g. `pages[2].number`).
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP error from a status code and an already decoded payload.
    ///
    /// The message is the payload's own message when it has one, otherwise
    /// the status text.
    #[must_use]
    pub fn http(status: u16, payload: ErrorPayload) -> Self {
        let message = payload
            .message()
            .map_or_else(|| status_text(status).to_string(), str::to_string);
        Self::Http {
            status,
            message,
            payload,
        }
    }

    /// Create an HTTP error from a failed response's status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        Self::http(status, ErrorPayload::decode(status, body))
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a malformed payload error with path context.
    #[must_use]
    pub fn malformed_payload(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the response body could not be trusted.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPayload { .. })
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the error payload if this is an HTTP error.
    #[must_use]
    pub const fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Http { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Human-readable message for an error view.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Status code the page's error view should render.
    ///
    /// Backend statuses pass through; failures that never produced a usable
    /// backend answer map to gateway statuses.
    #[must_use]
    pub const fn page_status(&self) -> u16 {
        match self {
            Self::Http { status, .. } => *status,
            Self::Timeout => 504,
            Self::Connection(_)
            | Self::Tls(_)
            | Self::MalformedPayload { .. }
            | Self::TooManyRedirects { .. }
            | Self::InvalidRedirect(_) => 502,
            Self::InvalidRequest(_) | Self::InvalidUrl(_) => 500,
        }
    }
}

/// A failed payload validation, reported at its first offending field.
impl From<garde::Report> for Error {
    fn from(report: garde::Report) -> Self {
        report.iter().next().map_or_else(
            || Self::malformed_payload(".", "validation failed"),
            |(path, error)| {
                let path = path.to_string();
                let path = if path.is_empty() { ".".to_string() } else { path };
                Self::malformed_payload(path, error.to_string())
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn error_display() {
        insta::assert_snapshot!(
            Error::from_response(404, br#"{"error": "not found"}"#),
            @"HTTP error 404: not found"
        );
        insta::assert_snapshot!(Error::Timeout, @"request timeout");
        insta::assert_snapshot!(
            Error::connection("failed to connect"),
            @"connection error: failed to connect"
        );
        insta::assert_snapshot!(
            Error::malformed_payload("[0].name", "invalid type: integer `1`, expected a string"),
            @"malformed response payload at '[0].name': invalid type: integer `1`, expected a string"
        );
    }

    #[test]
    fn http_error_uses_payload_message() {
        let err = Error::from_response(404, br#"{"error": "not found"}"#);

        let_assert!(Error::Http { status, message, payload } = &err);
        check!(*status == 404);
        check!(message == "not found");
        check!(payload.message() == Some("not found"));
        check!(err.is_not_found());
    }

    #[test]
    fn http_error_falls_back_to_status_text() {
        let err = Error::from_response(500, b"Internal failure, see logs");

        check!(err.status() == Some(500));
        check!(err.message() == "Internal Server Error");
        let_assert!(Some(payload) = err.payload());
        check!(payload.message() == Some("Internal Server Error"));
    }

    #[test]
    fn http_error_without_message_key_uses_status_text() {
        let err = Error::from_response(422, br#"{"detail": "number out of range"}"#);

        check!(err.message() == "Unprocessable Entity");
        let_assert!(Some(payload) = err.payload());
        check!(payload.get("detail").is_some());
    }

    #[test]
    fn page_status_mapping() {
        check!(Error::from_response(403, b"").page_status() == 403);
        check!(Error::Timeout.page_status() == 504);
        check!(Error::connection("refused").page_status() == 502);
        check!(Error::tls("bad certificate").page_status() == 502);
        check!(Error::malformed_payload(".", "expected value").page_status() == 502);
        check!(Error::invalid_request("missing route parameter").page_status() == 500);
    }

    #[test]
    fn predicates() {
        check!(Error::Timeout.is_timeout());
        check!(!Error::from_response(404, b"").is_timeout());
        check!(Error::connection("failed").is_connection());
        check!(Error::malformed_payload(".", "eof").is_malformed());
        check!(Error::Timeout.status().is_none());
        check!(Error::Timeout.payload().is_none());
    }

    #[test]
    fn redirect_errors_are_gateway_failures() {
        insta::assert_snapshot!(
            Error::TooManyRedirects { count: 10, max: 10 },
            @"too many redirects (10, max 10)"
        );
        check!(Error::TooManyRedirects { count: 3, max: 3 }.page_status() == 502);
        check!(Error::InvalidRedirect("missing Location".into()).page_status() == 502);
    }

    #[test]
    fn validation_report_becomes_malformed_payload() {
        #[derive(garde::Validate)]
        struct Genre {
            #[garde(length(min = 1))]
            name: String,
        }

        let report = garde::Validate::validate(&Genre {
            name: String::new(),
        })
        .expect_err("empty name");

        let_assert!(Error::MalformedPayload { path, .. } = Error::from(report));
        check!(path == "name");
    }
}
