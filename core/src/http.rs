//! HTTP transport layer for the Linode API client.
//!
//! # Design
//! Requests and responses are plain data: `LinodeClient` builds an
//! `HttpRequest`, a `Transport` executes it, and the client decodes the
//! resulting `HttpResponse`. Production code uses `UreqTransport`; tests
//! substitute doubles that record or fabricate traffic without a network.
//!
//! The transport never interprets the exchange beyond moving bytes: status
//! codes are returned as data, retries do not exist, and a timeout (if
//! configured) surfaces as `TransportError::Network`.

use std::time::Duration;

use crate::error::TransportError;

/// A single API request described as plain data. Every call is an HTTP POST
/// of a form-urlencoded body to the client's endpoint.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub body: String,
}

/// The raw reply to an `HttpRequest`, before any decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking executor for one HTTP round-trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by a blocking `ureq` agent.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with no global timeout. Status codes come back as data so the
    /// client can classify non-2xx replies itself.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Agent that fails the whole exchange after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = self
            .agent
            .post(&request.url)
            .content_type("application/x-www-form-urlencoded")
            .send(request.body.as_bytes())
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
