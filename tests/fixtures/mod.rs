// Copyright (c) 2026 - The scm-inventory Authors
//! Test fixtures for scm-inventory
//!
//! Deterministic host records for the pipeline tests. All IDs,
//! hostnames, and addresses are fixed constants so repeated runs are
//! reproducible. Tests build records through these helpers rather than
//! constructing wire structs inline.

use async_trait::async_trait;

use scm_inventory::domain::{ClusterRef, HostRecord, RoleRef};
use scm_inventory::{HostSource, InventoryResult};

pub fn role_ref(role_name: &str, service_name: &str) -> RoleRef {
    RoleRef {
        role_name: role_name.to_string(),
        service_name: service_name.to_string(),
    }
}

pub fn host_record(
    host_id: &str,
    hostname: &str,
    ip_address: &str,
    cluster_name: &str,
    role_refs: Vec<RoleRef>,
) -> HostRecord {
    HostRecord {
        host_id: host_id.to_string(),
        hostname: hostname.to_string(),
        ip_address: ip_address.to_string(),
        cluster_ref: ClusterRef {
            cluster_name: cluster_name.to_string(),
        },
        role_refs,
    }
}

/// Host A: prod cluster, one HDFS namenode role
pub fn host_a() -> HostRecord {
    host_record(
        "0001-aaaa",
        "a.example.com",
        "10.0.0.1",
        "prod",
        vec![role_ref("HDFS-NAMENODE-1", "HDFS")],
    )
}

/// Host B: prod cluster, HDFS datanode + YARN nodemanager
pub fn host_b() -> HostRecord {
    host_record(
        "0002-bbbb",
        "b.example.com",
        "10.0.0.2",
        "prod",
        vec![
            role_ref("HDFS-DATANODE-1", "HDFS"),
            role_ref("YARN-NODEMANAGER-2", "YARN"),
        ],
    )
}

/// Host C: staging cluster, HDFS datanode
pub fn host_c() -> HostRecord {
    host_record(
        "0003-cccc",
        "c.example.com",
        "10.0.1.3",
        "staging",
        vec![role_ref("HDFS-DATANODE-7", "HDFS")],
    )
}

/// In-memory stand-in for the cluster-management API
pub struct InMemorySource {
    records: Vec<HostRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<HostRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl HostSource for InMemorySource {
    async fn fetch_hosts(&self) -> InventoryResult<Vec<HostRecord>> {
        Ok(self.records.clone())
    }
}
