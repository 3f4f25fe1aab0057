// Copyright (c) 2026 - The scm-inventory Authors
//! Dynamic inventory executable
//!
//! Loads configuration, fetches the host list from the cluster-management
//! API, runs the filter-and-group pass, and prints the inventory document
//! on stdout. Logs go to stderr so stdout stays machine-readable.
//!
//! Either the complete document is written, or nothing is written and the
//! process exits non-zero.

use anyhow::{Context, Result};
use tracing::{debug, info};

use scm_inventory::{
    build_inventory, Config, FilterPredicate, HostAttributes, HostSource, InventoryError,
    ScmClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("failed to load configuration")?;

    let predicate = match config.inventory.filter() {
        Some(expr) => Some(FilterPredicate::compile(expr).map_err(|e| {
            InventoryError::Configuration(format!("invalid filter expression: {}", e))
        })?),
        None => None,
    };
    let templates = config.inventory.group_templates();

    let client = ScmClient::new(config.connection)?;
    let records = client
        .fetch_hosts()
        .await
        .context("failed to fetch hosts from SCM")?;
    debug!("normalizing {} host records", records.len());

    let hosts: Vec<HostAttributes> = records.iter().map(HostAttributes::from_record).collect();
    let inventory = build_inventory(&hosts, predicate.as_ref(), &templates)?;
    info!(
        "inventory built: {} hosts, {} groups",
        inventory.meta.hostvars.len(),
        inventory.groups.len()
    );

    // Render the whole document before touching stdout; a failure here
    // must not leave partial output behind.
    let document = serde_json::to_string_pretty(&inventory).map_err(InventoryError::from)?;
    println!("{}", document);

    Ok(())
}
