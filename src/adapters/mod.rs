// Copyright (c) 2026 - The scm-inventory Authors
//! Data-source adapters
//!
//! This module contains the cluster-management API client and the
//! [`HostSource`] seam the pipeline consumes, so tests can substitute
//! an in-memory record source.

pub mod scm;

pub use scm::{HostSource, ScmClient};
