//! Error types for the Linode API client.
//!
//! # Design
//! Exactly one error reaches the caller per failed call, and each variant
//! tells the caller which layer gave up: `MissingRequiredArgument` before any
//! I/O, `Transport` during the HTTP exchange, `MalformedResponse` and `Api`
//! while decoding the reply. Nothing is retried internally.

use std::fmt;

use serde_json::Value;

/// Errors returned by `LinodeClient` calls.
#[derive(Debug)]
pub enum ClientError {
    /// A required parameter was absent from the call. Raised by the
    /// validator; the request was never sent.
    MissingRequiredArgument(String),

    /// The HTTP exchange itself failed.
    Transport(TransportError),

    /// The response body was not the expected JSON envelope.
    MalformedResponse(String),

    /// The service reported one or more errors in `ERRORARRAY`. The
    /// descriptors are carried in full and left opaque; mapping provider
    /// error codes to anything richer is the caller's concern.
    Api(Vec<Value>),
}

/// Failure modes of the HTTP round-trip.
#[derive(Debug)]
pub enum TransportError {
    /// Connection, timeout, or read failure reported by the HTTP stack.
    Network(String),

    /// The server replied with a non-success status.
    Status { status: u16, body: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::MissingRequiredArgument(name) => {
                write!(f, "missing required argument: {name}")
            }
            ClientError::Transport(err) => write!(f, "transport failed: {err}"),
            ClientError::MalformedResponse(msg) => {
                write!(f, "malformed response: {msg}")
            }
            ClientError::Api(errors) => {
                write!(f, "api returned {} error(s): ", errors.len())?;
                let rendered = serde_json::to_string(errors).unwrap_or_default();
                f.write_str(&rendered)
            }
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "network error: {msg}"),
            TransportError::Status { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for TransportError {}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        ClientError::Transport(err)
    }
}
