// Copyright (c) 2026 - The scm-inventory Authors
//! Cluster-management API client
//!
//! One authenticated GET of `/api/v19/hosts?view=full` per run. The API
//! answers with an `{"items": [...]}` envelope of host records. There is
//! no retrying, caching, or pagination; a failed fetch aborts the run
//! before any host is processed.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::domain::HostRecord;
use crate::errors::{InventoryError, InventoryResult};

/// Source of raw host records
///
/// The pipeline only ever sees this trait; [`ScmClient`] is the
/// production implementation.
#[async_trait]
pub trait HostSource {
    /// Fetch every known host with its cluster and role memberships
    async fn fetch_hosts(&self) -> InventoryResult<Vec<HostRecord>>;
}

/// List envelope the API wraps collection responses in
#[derive(Debug, Deserialize)]
struct HostListResponse {
    items: Vec<HostRecord>,
}

/// HTTP client for the cluster-management API
pub struct ScmClient {
    config: ConnectionConfig,
    client: Client,
}

impl ScmClient {
    /// Create a client from connection settings
    pub fn new(config: ConnectionConfig) -> InventoryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn base_url(&self) -> String {
        let scheme = if self.config.tls { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.config.host, self.config.port())
    }

    fn hosts_url(&self) -> String {
        format!("{}/api/v19/hosts?view=full", self.base_url())
    }
}

#[async_trait]
impl HostSource for ScmClient {
    async fn fetch_hosts(&self) -> InventoryResult<Vec<HostRecord>> {
        let url = self.hosts_url();
        debug!("fetching hosts from {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "".to_string());
            return Err(InventoryError::Api(format!(
                "SCM API returned {}: {}",
                status, body
            )));
        }

        let list: HostListResponse = response
            .json()
            .await
            .map_err(|e| InventoryError::Api(format!("invalid SCM response: {}", e)))?;

        info!("fetched {} hosts from SCM", list.items.len());
        Ok(list.items)
    }
}
