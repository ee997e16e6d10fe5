//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file and applying environment overrides.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::roster::Roster;

use super::types::ServerConfig;

/// Environment variable overriding `server.bind_address`.
pub const ENV_BIND_ADDRESS: &str = "BIND_ADDRESS";
/// Environment variable overriding `server.cors_origins` (comma separated).
pub const ENV_CORS_ORIGINS: &str = "CORS_ORIGINS";
/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Loads and validates service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind_address: "0.0.0.0:8001"
///   api_prefix: "/api"
///   cors_origins: ["*"]
/// store:
///   list_limit: 1000
/// logging:
///   level: info
///   format: compact
/// leave_policy:
///   default_daily_cap: 7
///   reduced_daily_cap: 3
///   capacity_lead: ayca_cisem
///   exclusive_pair: [rabia, ayca_demir]
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/server.yaml")?.with_env_overrides()?;
/// println!("Listening on {}", loader.config().server.bind_address);
/// # Ok::<(), leave_tracker::error::TrackerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServerConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or holds
    /// inconsistent values.
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            TrackerError::ConfigParseError { message, .. } => TrackerError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> TrackerResult<Self> {
        let config: ServerConfig =
            serde_yaml::from_str(content).map_err(|e| TrackerError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Uses the built-in defaults.
    pub fn defaults() -> Self {
        Self {
            config: ServerConfig::default(),
        }
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(mut config: ServerConfig) -> TrackerResult<Self> {
        normalize(&mut config);
        validate(&config)?;
        Ok(Self { config })
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> TrackerResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> TrackerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(bind_address) = lookup(ENV_BIND_ADDRESS) {
            debug!(bind_address = %bind_address, "bind address overridden");
            self.config.server.bind_address = bind_address.trim().to_string();
        }
        if let Some(origins) = lookup(ENV_CORS_ORIGINS) {
            self.config.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.config.logging.level = level.trim().to_string();
        }

        Self::from_config(self.config)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServerConfig {
        self.config
    }
}

fn normalize(config: &mut ServerConfig) {
    let prefix = config.server.api_prefix.trim().trim_end_matches('/');
    config.server.api_prefix = prefix.to_string();
}

fn validate(config: &ServerConfig) -> TrackerResult<()> {
    let prefix = &config.server.api_prefix;
    if !prefix.is_empty() && !prefix.starts_with('/') {
        return Err(TrackerError::ConfigInvalid {
            message: format!("api_prefix '{prefix}' must start with '/'"),
        });
    }
    if config.store.list_limit == 0 {
        return Err(TrackerError::ConfigInvalid {
            message: "store.list_limit must be positive".to_string(),
        });
    }
    config.leave_policy.validate(&Roster::standard())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "leave-tracker-{}-{}.yaml",
            name,
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_configuration() {
        let path = write_temp(
            "valid",
            r#"
server:
  bind_address: "127.0.0.1:9000"
  api_prefix: "/api/"
  cors_origins: ["http://localhost:3000"]
store:
  list_limit: 50
logging:
  level: debug
  format: json
leave_policy:
  default_daily_cap: 6
"#,
        );

        let loader = ConfigLoader::load(&path).unwrap();
        let config = loader.config();
        assert_eq!(config.server.bind_address, "127.0.0.1:9000");
        assert_eq!(config.server.api_prefix, "/api");
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.store.list_limit, 50);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.leave_policy.default_daily_cap, 6);
        assert_eq!(config.leave_policy.reduced_daily_cap, 3);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/server.yaml");
        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config(), ConfigLoader::defaults().config());
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load("/nonexistent/server.yaml");
        assert!(matches!(
            result,
            Err(TrackerError::ConfigNotFound { ref path }) if path == "/nonexistent/server.yaml"
        ));
    }

    #[test]
    fn test_load_invalid_yaml_reports_path() {
        let path = write_temp("invalid", "server: [unclosed");
        let err = ConfigLoader::load(&path).unwrap_err();
        match err {
            TrackerError::ConfigParseError { path: reported, .. } => {
                assert_eq!(reported, path.display().to_string());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let result = ConfigLoader::from_yaml_str("leave_policy:\n  capacity_lead: nobody\n");
        assert!(matches!(result, Err(TrackerError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_prefix_must_be_absolute() {
        let result = ConfigLoader::from_yaml_str("server:\n  api_prefix: api\n");
        assert!(matches!(result, Err(TrackerError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_zero_list_limit_rejected() {
        let result = ConfigLoader::from_yaml_str("store:\n  list_limit: 0\n");
        assert!(matches!(result, Err(TrackerError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_BIND_ADDRESS, "127.0.0.1:7000"),
            (ENV_CORS_ORIGINS, "http://a.example, http://b.example,"),
            (ENV_LOG_LEVEL, "   "),
        ]);

        let config = ConfigLoader::defaults()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap()
            .into_config();

        assert_eq!(config.server.bind_address, "127.0.0.1:7000");
        assert_eq!(
            config.server.cors_origins,
            vec!["http://a.example", "http://b.example"]
        );
        // blank values are ignored
        assert_eq!(config.logging.level, "info");
    }
}
