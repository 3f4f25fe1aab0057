// Copyright (c) 2026 - The scm-inventory Authors
//! Inventory Domain Models
//!
//! Core domain concepts for inventory generation: the wire shape of a
//! host record as returned by the cluster-management API, and the
//! normalized per-host attribute bag the filtering and grouping layers
//! operate on.

pub mod host;

pub use host::{AttrValue, ClusterRef, HostAttributes, HostRecord, RoleRef};
