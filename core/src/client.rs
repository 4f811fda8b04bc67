//! Request building, response decoding, and the per-operation facade.
//!
//! # Design
//! `LinodeClient` holds an API key, an endpoint URL, and a `Transport`, and
//! carries no other state between calls. Every operation funnels through
//! `call`: validate required parameters, build the form-urlencoded request,
//! execute it, decode the envelope. The split into `build_request` and
//! `parse_response` keeps both halves usable without a network, which is how
//! the unit tests drive them.
//!
//! Facade methods are one-line delegations to `call` with a name from the
//! operation registry; they contain no logic of their own.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::{ClientError, TransportError};
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::params::Params;
use crate::registry;

/// Production endpoint. All operations POST to this one URL.
pub const DEFAULT_ENDPOINT: &str = "https://api.linode.com/api/";

/// Fields the encoder injects into every request. Caller-supplied entries
/// under these names are discarded in favor of the injected values.
const RESERVED: &[&str] = &["action", "api_key", "resultFormat"];

/// Synchronous client for the Linode legacy API.
///
/// Cheap to clone and safe to share across threads: the key and endpoint are
/// immutable and each call builds its own request.
#[derive(Clone)]
pub struct LinodeClient {
    api_key: String,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl LinodeClient {
    /// Client against the production endpoint.
    pub fn new(api_key: &str) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Client against a custom endpoint, e.g. a local mock server.
    pub fn with_endpoint(api_key: &str, endpoint: &str) -> Self {
        Self::with_transport(api_key, endpoint, Arc::new(UreqTransport::new()))
    }

    /// Client with an injected transport. Tests use this to observe or
    /// fabricate traffic.
    pub fn with_transport(
        api_key: &str,
        endpoint: &str,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            transport,
        }
    }

    /// Encode one call as a transport-ready request.
    ///
    /// The body carries every caller parameter plus the injected `action`,
    /// `api_key`, and `resultFormat=json` fields. No validation happens
    /// here; `call` validates before encoding.
    pub fn build_request(&self, action: &str, params: &Params) -> HttpRequest {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in params.iter() {
            if !RESERVED.contains(&name) {
                serializer.append_pair(name, value);
            }
        }
        serializer.append_pair("action", action);
        serializer.append_pair("api_key", &self.api_key);
        serializer.append_pair("resultFormat", "json");

        HttpRequest {
            url: self.endpoint.clone(),
            body: serializer.finish(),
        }
    }

    /// Decode a raw reply into the call's result.
    ///
    /// Non-2xx statuses become `TransportError::Status`. A body that is not
    /// the JSON envelope becomes `MalformedResponse`. A non-empty
    /// `ERRORARRAY` becomes `ClientError::Api` and the `DATA` payload is
    /// never surfaced alongside it.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ClientError> {
        check_status(&response)?;

        let envelope: Envelope = serde_json::from_str(&response.body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        if !envelope.errors.is_empty() {
            return Err(ClientError::Api(envelope.errors));
        }
        Ok(envelope.data)
    }

    /// Validate, encode, execute, and decode one operation.
    ///
    /// `action` is sent verbatim; operations missing from the registry
    /// validate vacuously, so new service actions are callable before they
    /// grow a facade method.
    pub fn call(&self, action: &str, params: Params) -> Result<Value, ClientError> {
        registry::validate(action, &params)?;
        let request = self.build_request(action, &params);

        log::debug!("POST {} action={action}", self.endpoint);
        let response = self.transport.execute(&request).map_err(ClientError::from)?;

        let result = self.parse_response(response);
        if let Err(ClientError::Api(errors)) = &result {
            log::warn!("{action} rejected with {} provider error(s)", errors.len());
        }
        result
    }

    /// List every domain visible to the account. Returns an array of domain
    /// records; see [`crate::types::Domain`] for the fields.
    pub fn domain_list(&self) -> Result<Value, ClientError> {
        self.call(registry::DOMAIN_LIST, Params::new())
    }

    /// Fetch one domain record. Requires `DomainID`.
    pub fn domain_get(&self, params: Params) -> Result<Value, ClientError> {
        self.call(registry::DOMAIN_GET, params)
    }

    /// Create or update a domain; returns `{"DOMAINID": id}`.
    ///
    /// Requires `DomainID` (`0` inserts a new domain), `Domain`, `Type`
    /// (`master` or `slave`), `Status`, and `SOA_Email`. Optional:
    /// `Master_IPs` (semicolon-separated, slave domains only),
    /// `Refresh_Sec`, `Retry_Sec`, `TTL_Sec`. On update, omitted optional
    /// fields are reset to service defaults.
    pub fn domain_save(&self, params: Params) -> Result<Value, ClientError> {
        self.call(registry::DOMAIN_SAVE, params)
    }

    /// List a domain's resource records. Requires `DomainID`; returns an
    /// array of records, see [`crate::types::Resource`].
    pub fn domain_resource_list(&self, params: Params) -> Result<Value, ClientError> {
        self.call(registry::DOMAIN_RESOURCE_LIST, params)
    }

    /// Fetch one resource record. Requires `ResourceID`.
    pub fn domain_resource_get(&self, params: Params) -> Result<Value, ClientError> {
        self.call(registry::DOMAIN_RESOURCE_GET, params)
    }

    /// Create or update a resource record; returns `{"RESOURCEID": id}`.
    ///
    /// Requires `ResourceID` (`0` inserts a new record) and `DomainID`.
    /// Optional: `Name`, `Type`, `Target`, `Priority` (MX), `TTL_Sec`,
    /// `Weight` and `Port` (SRV).
    pub fn domain_resource_save(&self, params: Params) -> Result<Value, ClientError> {
        self.call(registry::DOMAIN_RESOURCE_SAVE, params)
    }

    /// List every virtual server visible to the account. Returns an array
    /// of server records, see [`crate::types::Linode`].
    pub fn linode_list(&self) -> Result<Value, ClientError> {
        self.call(registry::LINODE_LIST, Params::new())
    }
}

impl fmt::Debug for LinodeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinodeClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// The service's response envelope. The live API also echoes an `ACTION`
/// field; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "ERRORARRAY")]
    errors: Vec<Value>,
    #[serde(rename = "DATA")]
    data: Value,
}

fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(TransportError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
