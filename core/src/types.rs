//! Typed payloads for the records the API returns.
//!
//! # Design
//! The client itself hands back raw `serde_json::Value` payloads; these DTOs
//! are the documented shapes behind them, for callers that want
//! `serde_json::from_value` instead of indexing. Field names map to the
//! service's ALL-CAPS wire keys. The mock-server crate defines its own
//! copies; integration tests catch schema drift between the two.

use serde::{Deserialize, Serialize};

/// One domain, as returned by `domainList` / `domainGet`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Domain {
    #[serde(rename = "DOMAINID")]
    pub domain_id: i64,

    /// The domain's name, e.g. `example.com`.
    #[serde(rename = "DOMAIN")]
    pub domain: String,

    /// `master` or `slave`.
    #[serde(rename = "TYPE")]
    pub kind: String,

    /// 0 disabled, 1 active, 2 edit mode (changes not rendered),
    /// 3 rendered zonefile has errors.
    #[serde(rename = "STATUS")]
    pub status: i64,

    #[serde(rename = "SOA_EMAIL")]
    pub soa_email: String,

    /// Zero means the service default (2 hours).
    #[serde(rename = "REFRESH_SEC", default)]
    pub refresh_sec: i64,

    /// Zero means the service default (2 hours).
    #[serde(rename = "RETRY_SEC", default)]
    pub retry_sec: i64,

    /// Zero means the service default (1 day).
    #[serde(rename = "TTL_SEC", default)]
    pub ttl_sec: i64,
}

/// One resource record, as returned by `domainResourceList` /
/// `domainResourceGet`. `kind` is one of NS, MX, A, AAAA, CNAME, TXT, SRV.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    #[serde(rename = "RESOURCEID")]
    pub resource_id: i64,

    #[serde(rename = "DOMAINID")]
    pub domain_id: i64,

    /// May be empty.
    #[serde(rename = "NAME", default)]
    pub name: String,

    #[serde(rename = "TYPE")]
    pub kind: String,

    /// IP, name, or string this record resolves to.
    #[serde(rename = "TARGET", default)]
    pub target: String,

    /// MX records only.
    #[serde(rename = "PRIORITY", default)]
    pub priority: i64,

    /// Zero means the domain default.
    #[serde(rename = "TTL_SEC", default)]
    pub ttl_sec: i64,

    /// SRV records only.
    #[serde(rename = "WEIGHT", default)]
    pub weight: i64,

    /// SRV records only.
    #[serde(rename = "PORT", default)]
    pub port: i64,
}

/// One virtual server, as returned by `linodeList`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Linode {
    #[serde(rename = "LINODEID")]
    pub linode_id: i64,

    #[serde(rename = "STATUS")]
    pub status: i64,

    /// DNS name of the host machine this server runs on.
    #[serde(rename = "HOSTHOSTNAME", default)]
    pub host_hostname: String,

    #[serde(rename = "LISHUSERNAME", default)]
    pub lish_username: String,

    #[serde(rename = "LABEL")]
    pub label: String,

    /// MiB.
    #[serde(rename = "TOTALRAM", default)]
    pub total_ram: i64,

    /// MiB.
    #[serde(rename = "TOTALHD", default)]
    pub total_hd: i64,

    /// GiB.
    #[serde(rename = "TOTALXFER", default)]
    pub total_xfer: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_deserializes_from_wire_keys() {
        let raw = serde_json::json!({
            "DOMAINID": 5,
            "DOMAIN": "example.com",
            "TYPE": "master",
            "STATUS": 1,
            "SOA_EMAIL": "admin@example.com",
            "REFRESH_SEC": 0,
            "RETRY_SEC": 0,
            "TTL_SEC": 86400
        });
        let domain: Domain = serde_json::from_value(raw).unwrap();
        assert_eq!(domain.domain_id, 5);
        assert_eq!(domain.kind, "master");
        assert_eq!(domain.ttl_sec, 86400);
    }

    #[test]
    fn resource_timing_fields_default_to_zero() {
        let raw = serde_json::json!({
            "RESOURCEID": 9,
            "DOMAINID": 5,
            "NAME": "www",
            "TYPE": "A",
            "TARGET": "192.0.2.10"
        });
        let resource: Resource = serde_json::from_value(raw).unwrap();
        assert_eq!(resource.priority, 0);
        assert_eq!(resource.ttl_sec, 0);
        assert_eq!(resource.port, 0);
    }

    #[test]
    fn linode_roundtrips_through_wire_keys() {
        let linode = Linode {
            linode_id: 701,
            status: 1,
            host_hostname: "host3.dal.example.net".to_string(),
            lish_username: "linode701".to_string(),
            label: "web01".to_string(),
            total_ram: 2048,
            total_hd: 49152,
            total_xfer: 2000,
        };
        let json = serde_json::to_value(&linode).unwrap();
        assert_eq!(json["LINODEID"], 701);
        assert_eq!(json["LABEL"], "web01");
        let back: Linode = serde_json::from_value(json).unwrap();
        assert_eq!(back, linode);
    }
}
