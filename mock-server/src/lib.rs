//! In-memory implementation of the Linode legacy API wire contract.
//!
//! # Design
//! One POST route receives every call as a form-urlencoded body and
//! dispatches on the `action` parameter, mirroring how the live service
//! works. Replies are always `200 OK` with the `ERRORARRAY`/`DATA` JSON
//! envelope; failures ride in `ERRORARRAY` with the service's error codes
//! (2 no action, 3 unknown action, 4 auth failed, 5 object not found,
//! 6 missing property, 7 invalid property). Record types are defined
//! independently from the core crate; integration tests catch schema drift.

use std::{collections::HashMap, sync::Arc};

use axum::{extract::State, routing::post, Form, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize)]
pub struct Domain {
    #[serde(rename = "DOMAINID")]
    pub domain_id: i64,
    #[serde(rename = "DOMAIN")]
    pub domain: String,
    #[serde(rename = "TYPE")]
    pub kind: String,
    #[serde(rename = "STATUS")]
    pub status: i64,
    #[serde(rename = "SOA_EMAIL")]
    pub soa_email: String,
    #[serde(rename = "REFRESH_SEC")]
    pub refresh_sec: i64,
    #[serde(rename = "RETRY_SEC")]
    pub retry_sec: i64,
    #[serde(rename = "TTL_SEC")]
    pub ttl_sec: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Resource {
    #[serde(rename = "RESOURCEID")]
    pub resource_id: i64,
    #[serde(rename = "DOMAINID")]
    pub domain_id: i64,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "TYPE")]
    pub kind: String,
    #[serde(rename = "TARGET")]
    pub target: String,
    #[serde(rename = "PRIORITY")]
    pub priority: i64,
    #[serde(rename = "TTL_SEC")]
    pub ttl_sec: i64,
    #[serde(rename = "WEIGHT")]
    pub weight: i64,
    #[serde(rename = "PORT")]
    pub port: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Linode {
    #[serde(rename = "LINODEID")]
    pub linode_id: i64,
    #[serde(rename = "STATUS")]
    pub status: i64,
    #[serde(rename = "HOSTHOSTNAME")]
    pub host_hostname: String,
    #[serde(rename = "LISHUSERNAME")]
    pub lish_username: String,
    #[serde(rename = "LABEL")]
    pub label: String,
    #[serde(rename = "TOTALRAM")]
    pub total_ram: i64,
    #[serde(rename = "TOTALHD")]
    pub total_hd: i64,
    #[serde(rename = "TOTALXFER")]
    pub total_xfer: i64,
}

/// One provider error descriptor for `ERRORARRAY`.
#[derive(Debug)]
pub struct Fault {
    pub code: i64,
    pub message: String,
}

impl Fault {
    fn new(code: i64, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }

    fn descriptor(&self) -> Value {
        json!({ "ERRORCODE": self.code, "ERRORMESSAGE": self.message })
    }
}

/// Account state behind the API: mutable domains and resource records plus
/// a fixed fleet of virtual servers.
#[derive(Debug, Default)]
pub struct Store {
    domains: HashMap<i64, Domain>,
    resources: HashMap<i64, Resource>,
    linodes: Vec<Linode>,
    next_domain_id: i64,
    next_resource_id: i64,
}

impl Store {
    /// Empty account with two seeded servers. Servers cannot be created
    /// through this API, so the seed is the only fleet there is.
    pub fn seeded() -> Self {
        Self {
            linodes: vec![
                Linode {
                    linode_id: 701,
                    status: 1,
                    host_hostname: "dallas-host17".to_string(),
                    lish_username: "linode701".to_string(),
                    label: "web01".to_string(),
                    total_ram: 2048,
                    total_hd: 49152,
                    total_xfer: 2000,
                },
                Linode {
                    linode_id: 702,
                    status: 1,
                    host_hostname: "newark-host04".to_string(),
                    lish_username: "linode702".to_string(),
                    label: "db01".to_string(),
                    total_ram: 4096,
                    total_hd: 98304,
                    total_xfer: 4000,
                },
            ],
            next_domain_id: 1,
            next_resource_id: 1,
            ..Self::default()
        }
    }

    fn domain_list(&self) -> Value {
        let mut domains: Vec<&Domain> = self.domains.values().collect();
        domains.sort_by_key(|d| d.domain_id);
        serde_json::to_value(domains).unwrap_or(Value::Null)
    }

    fn domain_get(&self, id: i64) -> Result<Value, Fault> {
        self.domains
            .get(&id)
            .map(|d| serde_json::to_value(d).unwrap_or(Value::Null))
            .ok_or_else(|| Fault::new(5, "Object not found"))
    }

    fn domain_save(&mut self, params: &HashMap<String, String>) -> Result<Value, Fault> {
        let id = required_i64(params, "DomainID")?;
        let domain = Domain {
            domain_id: id,
            domain: required_text(params, "Domain")?,
            kind: required_text(params, "Type")?,
            status: required_i64(params, "Status")?,
            soa_email: required_text(params, "SOA_Email")?,
            refresh_sec: optional_i64(params, "Refresh_Sec")?,
            retry_sec: optional_i64(params, "Retry_Sec")?,
            ttl_sec: optional_i64(params, "TTL_Sec")?,
        };

        let id = if id == 0 {
            let id = self.next_domain_id;
            self.next_domain_id += 1;
            id
        } else if self.domains.contains_key(&id) {
            id
        } else {
            return Err(Fault::new(5, "Object not found"));
        };

        self.domains.insert(id, Domain { domain_id: id, ..domain });
        Ok(json!({ "DOMAINID": id }))
    }

    fn resource_list(&self, domain_id: i64) -> Result<Value, Fault> {
        if !self.domains.contains_key(&domain_id) {
            return Err(Fault::new(5, "Object not found"));
        }
        let mut records: Vec<&Resource> = self
            .resources
            .values()
            .filter(|r| r.domain_id == domain_id)
            .collect();
        records.sort_by_key(|r| r.resource_id);
        Ok(serde_json::to_value(records).unwrap_or(Value::Null))
    }

    fn resource_get(&self, id: i64) -> Result<Value, Fault> {
        self.resources
            .get(&id)
            .map(|r| serde_json::to_value(r).unwrap_or(Value::Null))
            .ok_or_else(|| Fault::new(5, "Object not found"))
    }

    fn resource_save(&mut self, params: &HashMap<String, String>) -> Result<Value, Fault> {
        let id = required_i64(params, "ResourceID")?;
        let domain_id = required_i64(params, "DomainID")?;
        if !self.domains.contains_key(&domain_id) {
            return Err(Fault::new(5, "Object not found"));
        }

        let record = Resource {
            resource_id: id,
            domain_id,
            name: optional_text(params, "Name"),
            kind: optional_text(params, "Type"),
            target: optional_text(params, "Target"),
            priority: optional_i64(params, "Priority")?,
            ttl_sec: optional_i64(params, "TTL_Sec")?,
            weight: optional_i64(params, "Weight")?,
            port: optional_i64(params, "Port")?,
        };

        let id = if id == 0 {
            let id = self.next_resource_id;
            self.next_resource_id += 1;
            id
        } else if self.resources.contains_key(&id) {
            id
        } else {
            return Err(Fault::new(5, "Object not found"));
        };

        self.resources.insert(id, Resource { resource_id: id, ..record });
        Ok(json!({ "RESOURCEID": id }))
    }

    fn linode_list(&self) -> Value {
        serde_json::to_value(&self.linodes).unwrap_or(Value::Null)
    }
}

fn required_text(params: &HashMap<String, String>, name: &str) -> Result<String, Fault> {
    params
        .get(name)
        .cloned()
        .ok_or_else(|| Fault::new(6, &format!("A required property is missing: {name}")))
}

fn required_i64(params: &HashMap<String, String>, name: &str) -> Result<i64, Fault> {
    required_text(params, name)?
        .parse()
        .map_err(|_| Fault::new(7, &format!("Property is invalid: {name}")))
}

fn optional_text(params: &HashMap<String, String>, name: &str) -> String {
    params.get(name).cloned().unwrap_or_default()
}

fn optional_i64(params: &HashMap<String, String>, name: &str) -> Result<i64, Fault> {
    match params.get(name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| Fault::new(7, &format!("Property is invalid: {name}"))),
        None => Ok(0),
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new().route("/", post(dispatch)).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn dispatch(
    State(db): State<Db>,
    Form(params): Form<HashMap<String, String>>,
) -> Json<Value> {
    let action = params.get("action").cloned().unwrap_or_default();
    let result = handle(&db, &action, &params).await;
    Json(match result {
        Ok(data) => json!({ "ERRORARRAY": [], "ACTION": action, "DATA": data }),
        Err(fault) => json!({
            "ERRORARRAY": [fault.descriptor()],
            "ACTION": action,
            "DATA": [],
        }),
    })
}

async fn handle(
    db: &Db,
    action: &str,
    params: &HashMap<String, String>,
) -> Result<Value, Fault> {
    match params.get("api_key") {
        Some(key) if !key.is_empty() => {}
        _ => return Err(Fault::new(4, "Authentication failed")),
    }
    if action.is_empty() {
        return Err(Fault::new(2, "No action was requested"));
    }

    let mut store = db.write().await;
    match action {
        "domainList" => Ok(store.domain_list()),
        "domainGet" => store.domain_get(required_i64(params, "DomainID")?),
        "domainSave" => store.domain_save(params),
        "domainResourceList" => store.resource_list(required_i64(params, "DomainID")?),
        "domainResourceGet" => store.resource_get(required_i64(params, "ResourceID")?),
        "domainResourceSave" => store.resource_save(params),
        "linodeList" => Ok(store.linode_list()),
        _ => Err(Fault::new(3, "The requested action is unknown")),
    }
}
