//! Declarative operation registry.
//!
//! # Design
//! Every remote operation is one `Operation` entry: its wire name (sent
//! verbatim as the `action` field) and the parameter names the service
//! requires. Cross-cutting behavior lives in `LinodeClient::call`, so adding
//! an operation means adding one row here and a one-line facade method.
//!
//! The table is public: an interactive shell can iterate `OPERATIONS` to
//! enumerate what the client can do and dispatch any entry through
//! `LinodeClient::call` by name, with no reflection involved.

use crate::error::ClientError;
use crate::params::Params;

/// One remote operation: wire name plus required parameter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub required: &'static [&'static str],
}

pub const DOMAIN_LIST: &str = "domainList";
pub const DOMAIN_GET: &str = "domainGet";
pub const DOMAIN_SAVE: &str = "domainSave";
pub const DOMAIN_RESOURCE_LIST: &str = "domainResourceList";
pub const DOMAIN_RESOURCE_GET: &str = "domainResourceGet";
pub const DOMAIN_RESOURCE_SAVE: &str = "domainResourceSave";
pub const LINODE_LIST: &str = "linodeList";

/// Every operation the client exposes.
pub const OPERATIONS: &[Operation] = &[
    Operation { name: DOMAIN_LIST, required: &[] },
    Operation { name: DOMAIN_GET, required: &["DomainID"] },
    Operation {
        name: DOMAIN_SAVE,
        required: &["DomainID", "Domain", "Type", "Status", "SOA_Email"],
    },
    Operation { name: DOMAIN_RESOURCE_LIST, required: &["DomainID"] },
    Operation { name: DOMAIN_RESOURCE_GET, required: &["ResourceID"] },
    Operation {
        name: DOMAIN_RESOURCE_SAVE,
        required: &["ResourceID", "DomainID"],
    },
    Operation { name: LINODE_LIST, required: &[] },
];

/// Look up an operation by wire name.
pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// Check that every parameter the operation requires is present.
///
/// Operations absent from the table declare no required parameters and
/// validate vacuously. Only key presence is inspected, never values.
pub fn validate(name: &str, params: &Params) -> Result<(), ClientError> {
    let required = find(name).map(|op| op.required).unwrap_or(&[]);
    for &param in required {
        if !params.contains(param) {
            return Err(ClientError::MissingRequiredArgument(param.to_string()));
        }
    }
    Ok(())
}
