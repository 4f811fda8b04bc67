//! Synchronous client core for the Linode legacy API.
//!
//! # Overview
//! Encodes method calls as form-urlencoded HTTP POSTs with the account's
//! API key injected, executes them over a blocking transport, and decodes
//! the service's `ERRORARRAY`/`DATA` JSON envelope into a payload or a
//! typed failure.
//!
//! # Design
//! - `LinodeClient` is stateless between calls; it holds only the key, the
//!   endpoint URL, and a `Transport`.
//! - Every operation is one row in `registry::OPERATIONS` (wire name plus
//!   required parameters) dispatched through the generic `call`; facade
//!   methods add nothing but a name. Shells can iterate the table and
//!   dispatch by name without reflection.
//! - Required parameters are checked before a request is ever built; a
//!   failed call yields exactly one `ClientError`, never a retry.
//! - `build_request` / `parse_response` work on plain data, so the whole
//!   pipeline short of the socket is testable without a network.

pub mod client;
pub mod error;
pub mod http;
pub mod params;
pub mod registry;
pub mod types;

pub use client::{LinodeClient, DEFAULT_ENDPOINT};
pub use error::{ClientError, TransportError};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use params::Params;
pub use registry::{Operation, OPERATIONS};
pub use types::{Domain, Linode, Resource};
