// Copyright (c) 2026 - The scm-inventory Authors
//! Configuration loading
//!
//! Settings live in a TOML file with a `[connection]` table for the
//! cluster-management API and an optional `[inventory]` table for group
//! templates and the host filter:
//!
//! ```toml
//! [connection]
//! host = "cm.example.com"
//! port = 7180
//! user = "inventory"
//! password = "secret"
//!
//! [inventory]
//! cluster_group_format = "cluster_{}"
//! filter = "cluster_name == 'prod'"
//! ```
//!
//! The file path comes from `SCM_CONFIG_FILE` (default `scm.toml`); a
//! relative path is looked up next to the executable first, then in the
//! working directory. `SCM_HOST`, `SCM_PORT`, `SCM_USER`, and
//! `SCM_PASSWORD` override the file values.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use tracing::debug;

use crate::errors::{InventoryError, InventoryResult};
use crate::inventory::GroupTemplates;
use crate::template::{GroupTemplate, IDENTITY_TEMPLATE};

/// Environment variable naming the config file
pub const CONFIG_FILE_ENV: &str = "SCM_CONFIG_FILE";

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "scm.toml";

const DEFAULT_PORT: u16 = 7180;

/// Full configuration for one inventory run
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

/// Cluster-management API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    /// API host (default "localhost")
    #[serde(default = "default_api_host")]
    pub host: String,

    /// API port (default 7180)
    pub port: Option<u16>,

    /// Username for Basic authentication
    pub user: String,

    /// Password for Basic authentication
    pub password: String,

    /// Use https instead of http
    #[serde(default)]
    pub tls: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ConnectionConfig {
    /// The effective port (configured or default)
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

/// Grouping and filtering settings
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    #[serde(default = "default_group_format")]
    pub cluster_group_format: String,

    #[serde(default = "default_group_format")]
    pub service_group_format: String,

    #[serde(default = "default_group_format")]
    pub role_group_format: String,

    /// Optional host filter expression; absent or empty means no filter
    pub filter: Option<String>,
}

impl InventoryConfig {
    /// The filter expression, with empty/blank strings treated as absent
    pub fn filter(&self) -> Option<&str> {
        self.filter
            .as_deref()
            .map(str::trim)
            .filter(|expr| !expr.is_empty())
    }

    /// The three group-name templates
    pub fn group_templates(&self) -> GroupTemplates {
        GroupTemplates {
            cluster: GroupTemplate::new(&self.cluster_group_format),
            service: GroupTemplate::new(&self.service_group_format),
            role: GroupTemplate::new(&self.role_group_format),
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            cluster_group_format: default_group_format(),
            service_group_format: default_group_format(),
            role_group_format: default_group_format(),
            filter: None,
        }
    }
}

fn default_api_host() -> String {
    "localhost".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_group_format() -> String {
    IDENTITY_TEMPLATE.to_string()
}

impl Config {
    /// Discover, read, and parse the config file, then apply env overrides
    pub fn load() -> InventoryResult<Self> {
        let path = discover_config_file()?;
        debug!("loading configuration from {}", path.display());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Read and parse a specific config file
    pub fn from_file(path: &Path) -> InventoryResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            InventoryError::Configuration(format!(
                "cannot read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(raw: &str) -> InventoryResult<Self> {
        toml::from_str(raw).map_err(|e| InventoryError::Configuration(e.to_string()))
    }

    fn apply_env_overrides(&mut self) -> InventoryResult<()> {
        if let Ok(host) = env::var("SCM_HOST") {
            self.connection.host = host;
        }
        if let Ok(port) = env::var("SCM_PORT") {
            let port = port.parse::<u16>().map_err(|_| {
                InventoryError::Configuration(format!("invalid value for SCM_PORT: {}", port))
            })?;
            self.connection.port = Some(port);
        }
        if let Ok(user) = env::var("SCM_USER") {
            self.connection.user = user;
        }
        if let Ok(password) = env::var("SCM_PASSWORD") {
            self.connection.password = password;
        }
        Ok(())
    }
}

/// Resolve the config file path
///
/// A relative name is tried next to the executable first, then as given
/// (relative to the working directory). An absolute path is used as-is.
fn discover_config_file() -> InventoryResult<PathBuf> {
    let name = env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let path = PathBuf::from(&name);
    if path.is_absolute() {
        return Ok(path);
    }

    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(&path);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }
    if path.exists() {
        return Ok(path);
    }

    Err(InventoryError::Configuration(format!(
        "config file '{}' not found",
        name
    )))
}
