//! Error types for Cloud Controller operations.

use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};
use thiserror::Error;

use crate::transport::BoxError;

/// Errors that can occur during Cloud Controller operations.
///
/// Every variant falls into one of three disjoint kinds, see [`ErrorKind`].
#[derive(Debug, Error)]
pub enum CcError {
    /// Configuration is missing or incomplete.
    #[error("Cloud Controller configuration required: {0}")]
    ConfigMissing(String),

    /// The base URL or a request path could not be parsed.
    #[error("parsing url for path {path:?} failed: {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// The transport failed to perform the request.
    #[error("doing {operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    /// The call's context was cancelled while the operation was in flight.
    #[error("{operation} cancelled")]
    Cancelled { operation: &'static str },

    /// The call's deadline expired while the operation was in flight.
    #[error("{operation} deadline exceeded")]
    DeadlineExceeded { operation: &'static str },

    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response body could not be decoded.
    #[error("{context} failed: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Reading a response body failed.
    #[error("reading {operation} response body failed: {source}")]
    Body {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server kept handing out next-page locators past the page cap.
    #[error("pagination stopped after {limit} pages without reaching the last page")]
    PageLimitExceeded { limit: u32 },
}

/// Coarse classification of a [`CcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network, TLS, cancellation or deadline failures.
    Transport,
    /// A successfully transported non-success response.
    Api,
    /// Malformed bodies, URLs or configuration.
    Decode,
}

impl CcError {
    /// Which of the three error kinds this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Cancelled { .. } | Self::DeadlineExceeded { .. } => {
                ErrorKind::Transport
            }
            Self::Api(_) => ErrorKind::Api,
            Self::ConfigMissing(_)
            | Self::InvalidUrl { .. }
            | Self::Decode { .. }
            | Self::Body { .. }
            | Self::PageLimitExceeded { .. } => ErrorKind::Decode,
        }
    }

    /// The API error payload, if this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn decode(context: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Decode { context, source }
    }
}

/// A non-success response from the Cloud Controller.
///
/// `status_code` is always the HTTP status of the response, whatever the
/// body says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("API error (status {status_code}, error code {error_code:?}): {description}")]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Numeric Cloud Controller error code, informational only.
    pub code: Option<i64>,
    /// Symbolic or numeric error code, e.g. `"10001"` or `"CF-NotAuthorized"`.
    pub error_code: String,
    /// Human readable description.
    pub description: String,
}

#[serde_as]
#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    code: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    error_code: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    description: String,
}

impl ApiError {
    /// Build an API error from a response status and body.
    ///
    /// A body that is not a valid error envelope yields an error whose
    /// description is the decode failure and whose error code is empty.
    pub fn from_body(status_code: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Self {
                status_code,
                code: envelope.code,
                error_code: envelope.error_code,
                description: envelope.description,
            },
            Err(e) => Self {
                status_code,
                description: e.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == 401
    }

    pub fn is_forbidden(&self) -> bool {
        self.status_code == 403
    }
}

/// Result type alias for Cloud Controller operations.
pub type Result<T> = core::result::Result<T, CcError>;
