//! Error type for the sandbox API client.
//!
//! # Design
//! Every failure a call can hit (the transport, a non-2xx status, encoding the
//! request body, decoding the response) is surfaced as one `ApiError` so the
//! client's error callback sees them all through a single path. The variant
//! records where the failure came from and carries the underlying cause.

use thiserror::Error;

/// Errors returned by `ApiClient` operations and `Transport` implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, broken body stream).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be parsed or did not match the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// A GraphQL endpoint answered 200 but reported errors in its payload.
    #[error("graphql errors: {0}")]
    Graphql(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 401, the signal callers use to drop the current session.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
