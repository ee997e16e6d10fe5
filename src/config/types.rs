//! Configuration types for the tracker service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so any section may be omitted.

use serde::{Deserialize, Serialize};

use crate::rules::LeavePolicy;

/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8001";

/// Default path prefix for every route.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Default cap on records returned by a list endpoint.
pub const DEFAULT_LIST_LIMIT: usize = 1000;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Socket address to listen on.
    pub bind_address: String,
    /// Path prefix shared by all routes (e.g., "/api").
    pub api_prefix: String,
    /// Allowed CORS origins; `*` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerSection {
    /// Returns true if any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

/// Document store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Maximum records returned by one list call.
    pub list_limit: usize,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// Multi-line human readable output.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Default level filter (e.g., "info"); `RUST_LOG` takes precedence.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP server settings.
    pub server: ServerSection,
    /// Document store settings.
    pub store: StoreSection,
    /// Logging settings.
    pub logging: LoggingSection,
    /// Leave admission policy.
    pub leave_policy: LeavePolicy,
}
