//! Configuration loading and management for the tracker service.
//!
//! This module loads the server, store, logging and leave-policy settings
//! from a YAML file, with environment overrides on top.
//!
//! # Example
//!
//! ```
//! use leave_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::from_yaml_str("store:\n  list_limit: 200\n")
//!     .unwrap()
//!     .into_config();
//! assert_eq!(config.store.list_limit, 200);
//! assert_eq!(config.server.api_prefix, "/api");
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, ENV_BIND_ADDRESS, ENV_CORS_ORIGINS, ENV_LOG_LEVEL};
pub use types::{
    DEFAULT_API_PREFIX, DEFAULT_BIND_ADDRESS, DEFAULT_LIST_LIMIT, LogFormat, LoggingSection,
    ServerConfig, ServerSection, StoreSection,
};
