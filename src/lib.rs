//! Dynamic Ansible inventory generation from a Cloudera-Manager-style
//! cluster-management API
//!
//! One invocation fetches every known host with its cluster, service,
//! and role memberships, optionally filters hosts with a configured
//! boolean expression, groups the survivors along three dimensions
//! (cluster, service, role) using configurable group-name templates,
//! and emits a single JSON inventory document.
//!
//! Pipeline: raw host records → [`domain::HostAttributes`] →
//! [`filter::FilterPredicate`] gate → [`template::GroupTemplate`] × 3 →
//! [`inventory::InventoryBuilder`] → [`inventory::Inventory`].

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod filter;
pub mod inventory;
pub mod template;

// Re-export commonly used types
pub use adapters::{HostSource, ScmClient};
pub use config::Config;
pub use domain::{HostAttributes, HostRecord};
pub use errors::{InventoryError, InventoryResult};
pub use filter::FilterPredicate;
pub use inventory::{build_inventory, GroupTemplates, Inventory};
pub use template::GroupTemplate;
