// Copyright (c) 2026 - The scm-inventory Authors
//! Inventory aggregation and assembly
//!
//! One pass over the filtered host stream accumulates per-host metadata
//! plus three independent group-name → host-set mappings (by cluster, by
//! service, by role). Assembly union-merges the three dimensions into one
//! flat mapping and sorts every group's host list, so output is fully
//! determined by the input set regardless of fetch order.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::HostAttributes;
use crate::errors::{InventoryError, InventoryResult};
use crate::filter::FilterPredicate;
use crate::template::GroupTemplate;

/// The three group-name templates, one per grouping dimension
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTemplates {
    pub cluster: GroupTemplate,
    pub service: GroupTemplate,
    pub role: GroupTemplate,
}

/// Per-host metadata block consumed by the orchestration tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostVars {
    pub ansible_ssh_host: String,
    pub ip_address: String,
    pub scm_host_id: String,
    pub scm_cluster_name: String,
    pub scm_role_names: Vec<String>,
    pub scm_service_names: Vec<String>,
}

impl From<&HostAttributes> for HostVars {
    fn from(attrs: &HostAttributes) -> Self {
        Self {
            ansible_ssh_host: attrs.ip_address.clone(),
            ip_address: attrs.ip_address.clone(),
            scm_host_id: attrs.host_id.clone(),
            scm_cluster_name: attrs.cluster_name.clone(),
            scm_role_names: attrs.role_names.clone(),
            scm_service_names: attrs.service_names.clone(),
        }
    }
}

/// The `_meta` block of the inventory document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

/// The final inventory document
///
/// Serializes as `{ "_meta": { "hostvars": … }, "<group>": [hosts…], … }`
/// with every host list lexicographically sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Inventory {
    #[serde(rename = "_meta")]
    pub meta: Meta,
    #[serde(flatten)]
    pub groups: BTreeMap<String, Vec<String>>,
}

/// Accumulates filtered hosts into group sets and hostvars
#[derive(Debug, Default)]
pub struct InventoryBuilder {
    templates: GroupTemplates,
    hostvars: BTreeMap<String, HostVars>,
    cluster_groups: BTreeMap<String, BTreeSet<String>>,
    service_groups: BTreeMap<String, BTreeSet<String>>,
    role_groups: BTreeMap<String, BTreeSet<String>>,
}

impl InventoryBuilder {
    pub fn new(templates: GroupTemplates) -> Self {
        Self {
            templates,
            ..Self::default()
        }
    }

    /// Record one host that passed the filter
    ///
    /// A duplicate host name overwrites the earlier hostvars entry and
    /// re-adds set memberships, which is a no-op. Group membership is
    /// idempotent.
    pub fn add_host(&mut self, attrs: &HostAttributes) -> InventoryResult<()> {
        self.hostvars
            .insert(attrs.host_name.clone(), HostVars::from(attrs));

        let cluster_group = render(&self.templates.cluster, &attrs.cluster_name, attrs)?;
        self.cluster_groups
            .entry(cluster_group)
            .or_default()
            .insert(attrs.host_name.clone());

        for service_name in &attrs.service_names {
            let service_group = render(&self.templates.service, service_name, attrs)?;
            self.service_groups
                .entry(service_group)
                .or_default()
                .insert(attrs.host_name.clone());
        }

        for role_name in &attrs.role_names {
            let role_group = render(&self.templates.role, role_name, attrs)?;
            self.role_groups
                .entry(role_group)
                .or_default()
                .insert(attrs.host_name.clone());
        }

        Ok(())
    }

    /// Assemble the final document
    ///
    /// The three dimensions merge into one flat mapping; when two
    /// dimensions render the same group name their host sets are
    /// unioned, never overwritten.
    pub fn build(self) -> Inventory {
        let mut merged: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for dimension in [self.cluster_groups, self.service_groups, self.role_groups] {
            for (group_name, host_names) in dimension {
                merged.entry(group_name).or_default().extend(host_names);
            }
        }

        let groups = merged
            .into_iter()
            .map(|(group_name, host_names)| (group_name, host_names.into_iter().collect()))
            .collect();

        Inventory {
            meta: Meta {
                hostvars: self.hostvars,
            },
            groups,
        }
    }
}

fn render(
    template: &GroupTemplate,
    seed: &str,
    attrs: &HostAttributes,
) -> InventoryResult<String> {
    template
        .render(seed, attrs)
        .map_err(|source| InventoryError::GroupFormat {
            template: template.as_str().to_string(),
            source,
        })
}

/// Run the full filter-and-group pass over normalized host records
///
/// `filter` of `None` includes every host. Any filter-evaluation or
/// template-rendering failure aborts the whole run; no partial
/// inventory is returned.
pub fn build_inventory(
    hosts: &[HostAttributes],
    filter: Option<&FilterPredicate>,
    templates: &GroupTemplates,
) -> InventoryResult<Inventory> {
    let mut builder = InventoryBuilder::new(templates.clone());

    for attrs in hosts {
        let included = match filter {
            Some(predicate) => {
                predicate
                    .matches(attrs)
                    .map_err(|source| InventoryError::FilterEvaluation {
                        host: attrs.host_name.clone(),
                        source,
                    })?
            }
            None => true,
        };
        if included {
            builder.add_host(attrs)?;
        }
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn host(name: &str, cluster: &str, services: &[&str], roles: &[&str]) -> HostAttributes {
        HostAttributes {
            host_id: format!("id-{}", name),
            host_name: name.to_string(),
            ip_address: format!("10.0.0.{}", name.len()),
            cluster_name: cluster.to_string(),
            role_names: roles.iter().map(|s| s.to_string()).collect(),
            service_names: services.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_group_membership_completeness() {
        let mut builder = InventoryBuilder::new(GroupTemplates::default());
        builder
            .add_host(&host(
                "a",
                "prod",
                &["HDFS", "YARN"],
                &["HDFS-DATANODE", "YARN-NODEMANAGER"],
            ))
            .unwrap();
        let inventory = builder.build();

        for group in ["prod", "HDFS", "YARN", "HDFS-DATANODE", "YARN-NODEMANAGER"] {
            assert_eq!(
                inventory.groups.get(group),
                Some(&vec!["a".to_string()]),
                "host missing from group {}",
                group
            );
        }
    }

    #[test]
    fn test_membership_is_idempotent() {
        let mut builder = InventoryBuilder::new(GroupTemplates::default());
        let attrs = host("a", "prod", &["HDFS", "HDFS"], &["HDFS-DATANODE"]);
        builder.add_host(&attrs).unwrap();
        builder.add_host(&attrs).unwrap();
        let inventory = builder.build();

        assert_eq!(inventory.groups["HDFS"], vec!["a".to_string()]);
        assert_eq!(inventory.groups["prod"], vec!["a".to_string()]);
        assert_eq!(inventory.meta.hostvars.len(), 1);
    }

    #[test]
    fn test_cross_dimension_collision_unions() {
        // Cluster "shared" and service "shared" render to the same
        // group name under identity templates; the host sets union.
        let mut builder = InventoryBuilder::new(GroupTemplates::default());
        builder.add_host(&host("a", "shared", &[], &[])).unwrap();
        builder.add_host(&host("b", "prod", &["shared"], &[])).unwrap();
        let inventory = builder.build();

        assert_eq!(
            inventory.groups["shared"],
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_group_lists_sorted_lexicographically() {
        let mut builder = InventoryBuilder::new(GroupTemplates::default());
        for name in ["zeta", "alpha", "mike"] {
            builder.add_host(&host(name, "prod", &[], &[])).unwrap();
        }
        let inventory = builder.build();
        assert_eq!(inventory.groups["prod"], vec!["alpha", "mike", "zeta"]);
    }

    #[test]
    fn test_duplicate_host_name_overwrites_hostvars() {
        let mut builder = InventoryBuilder::new(GroupTemplates::default());
        builder.add_host(&host("a", "prod", &[], &[])).unwrap();
        let mut updated = host("a", "staging", &[], &[]);
        updated.ip_address = "10.9.9.9".to_string();
        builder.add_host(&updated).unwrap();
        let inventory = builder.build();

        assert_eq!(inventory.meta.hostvars["a"].scm_cluster_name, "staging");
        assert_eq!(inventory.meta.hostvars["a"].ansible_ssh_host, "10.9.9.9");
        // Both cluster groups still list the host.
        assert_eq!(inventory.groups["prod"], vec!["a".to_string()]);
        assert_eq!(inventory.groups["staging"], vec!["a".to_string()]);
    }

    #[test]
    fn test_custom_templates() {
        let templates = GroupTemplates {
            cluster: GroupTemplate::new("cluster_{}"),
            service: GroupTemplate::new("{cluster_name}_{}"),
            role: GroupTemplate::new("role_{0}"),
        };
        let mut builder = InventoryBuilder::new(templates);
        builder
            .add_host(&host("a", "prod", &["HDFS"], &["HDFS-DATANODE"]))
            .unwrap();
        let inventory = builder.build();

        assert!(inventory.groups.contains_key("cluster_prod"));
        assert!(inventory.groups.contains_key("prod_HDFS"));
        assert!(inventory.groups.contains_key("role_HDFS-DATANODE"));
    }

    #[test]
    fn test_template_failure_aborts() {
        let templates = GroupTemplates {
            cluster: GroupTemplate::new("{rack_id}"),
            ..GroupTemplates::default()
        };
        let mut builder = InventoryBuilder::new(templates);
        let err = builder.add_host(&host("a", "prod", &[], &[])).unwrap_err();
        assert!(matches!(err, InventoryError::GroupFormat { .. }));
    }

    #[test]
    fn test_build_inventory_filters_hosts() {
        let hosts = vec![
            host("a", "prod", &["HDFS"], &["HDFS-NAMENODE"]),
            host("c", "staging", &["HDFS"], &["HDFS-DATANODE"]),
        ];
        let predicate = FilterPredicate::compile("cluster_name == 'prod'").unwrap();
        let inventory =
            build_inventory(&hosts, Some(&predicate), &GroupTemplates::default()).unwrap();

        assert!(inventory.meta.hostvars.contains_key("a"));
        assert!(!inventory.meta.hostvars.contains_key("c"));
        for hosts in inventory.groups.values() {
            assert!(!hosts.contains(&"c".to_string()));
        }
    }

    #[test]
    fn test_build_inventory_filter_error_names_host() {
        let hosts = vec![host("a", "prod", &[], &[])];
        let predicate = FilterPredicate::compile("rack_id == 'r1'").unwrap();
        let err =
            build_inventory(&hosts, Some(&predicate), &GroupTemplates::default()).unwrap_err();
        match err {
            InventoryError::FilterEvaluation { host, .. } => assert_eq!(host, "a"),
            other => panic!("expected FilterEvaluation, got {:?}", other),
        }
    }

    #[test]
    fn test_document_serialization_shape() {
        let mut builder = InventoryBuilder::new(GroupTemplates::default());
        builder
            .add_host(&host("a", "prod", &["HDFS"], &["HDFS-NAMENODE"]))
            .unwrap();
        let json = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(json["_meta"]["hostvars"]["a"]["scm_cluster_name"], "prod");
        assert_eq!(json["_meta"]["hostvars"]["a"]["ansible_ssh_host"], "10.0.0.1");
        assert_eq!(json["prod"][0], "a");
        assert_eq!(json["HDFS"][0], "a");
        assert_eq!(json["HDFS-NAMENODE"][0], "a");
    }
}
