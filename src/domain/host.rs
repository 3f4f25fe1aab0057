// Copyright (c) 2026 - The scm-inventory Authors
//! Host records and the normalized attribute bag
//!
//! [`HostRecord`] is the wire contract: one host as the cluster-management
//! API reports it, with its cluster reference and role associations.
//! [`HostAttributes`] is the flattened, immutable view of the same host
//! that filter expressions and group-name templates consume.

use serde::{Deserialize, Serialize};

/// Reference to the cluster a host belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRef {
    pub cluster_name: String,
}

/// One role association on a host
///
/// `role_name` carries the instance-suffixed role identifier
/// (e.g. `HDFS-DATANODE-3`); `service_name` the owning service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub role_name: String,
    pub service_name: String,
}

/// One host as returned by the cluster-management API
///
/// A host without a cluster reference does not deserialize; supplying
/// well-formed records is the data source's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRecord {
    pub host_id: String,
    pub hostname: String,
    pub ip_address: String,
    pub cluster_ref: ClusterRef,
    #[serde(default)]
    pub role_refs: Vec<RoleRef>,
}

/// Normalized per-host attribute bag
///
/// Built once per fetched host record and never mutated afterwards.
/// Field names double as the attribute names visible to filter
/// expressions and group-name templates.
///
/// # Normalization
///
/// - `role_names`: each raw role name keeps only its first two
///   hyphen-separated segments (`HDFS-DATANODE-3` → `HDFS-DATANODE`,
///   a single-segment name passes through unchanged).
/// - `service_names`: one entry per role association, verbatim.
///   Duplicates are expected when a host runs several roles of the
///   same service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAttributes {
    pub host_id: String,
    pub host_name: String,
    pub ip_address: String,
    pub cluster_name: String,
    pub role_names: Vec<String>,
    pub service_names: Vec<String>,
}

/// A single attribute value, as seen by filters and templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue<'a> {
    Str(&'a str),
    List(&'a [String]),
}

impl HostAttributes {
    /// The attribute names resolvable via [`HostAttributes::get`]
    pub const FIELD_NAMES: [&'static str; 6] = [
        "host_id",
        "host_name",
        "ip_address",
        "cluster_name",
        "role_names",
        "service_names",
    ];

    /// Normalize one raw host record into its attribute bag
    pub fn from_record(record: &HostRecord) -> Self {
        let role_names = record
            .role_refs
            .iter()
            .map(|role_ref| truncate_role_name(&role_ref.role_name))
            .collect();
        let service_names = record
            .role_refs
            .iter()
            .map(|role_ref| role_ref.service_name.clone())
            .collect();

        Self {
            host_id: record.host_id.clone(),
            host_name: record.hostname.clone(),
            ip_address: record.ip_address.clone(),
            cluster_name: record.cluster_ref.cluster_name.clone(),
            role_names,
            service_names,
        }
    }

    /// Look up an attribute by name
    pub fn get(&self, name: &str) -> Option<AttrValue<'_>> {
        match name {
            "host_id" => Some(AttrValue::Str(&self.host_id)),
            "host_name" => Some(AttrValue::Str(&self.host_name)),
            "ip_address" => Some(AttrValue::Str(&self.ip_address)),
            "cluster_name" => Some(AttrValue::Str(&self.cluster_name)),
            "role_names" => Some(AttrValue::List(&self.role_names)),
            "service_names" => Some(AttrValue::List(&self.service_names)),
            _ => None,
        }
    }
}

/// Collapse an instance-suffixed role identifier to its first two
/// hyphen-separated segments
fn truncate_role_name(raw: &str) -> String {
    raw.split('-').take(2).collect::<Vec<_>>().join("-")
}
