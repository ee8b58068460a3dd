//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `imperihome.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

const CONFIG_FILE: &str = "imperihome.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Integration toggles.
    pub integrations: IntegrationsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Per-integration toggles.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    /// Serve the virtual demo devices.
    pub virtual_enabled: bool,
}

impl Config {
    /// Load configuration from `imperihome.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides read through `lookup` (the process environment in
    /// production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("IMPERIHOME_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("IMPERIHOME_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("IMPERIHOME_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("IMPERIHOME_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation("host must not be empty".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8095,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "imperihomed=info,imperihome=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            virtual_enabled: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8095);
        assert_eq!(
            config.logging.filter,
            "imperihomed=info,imperihome=info,tower_http=debug"
        );
        assert!(config.integrations.virtual_enabled);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8095);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [integrations]
            virtual_enabled = false
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert!(!config.integrations.virtual_enabled);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.integrations.virtual_enabled);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8095);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_empty_host() {
        let mut config = Config::default();
        config.server.host = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_port() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        assert_eq!(Config::default().bind_addr(), "0.0.0.0:8095");
    }

    #[test]
    fn should_override_host_and_port_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("IMPERIHOME_HOST", "127.0.0.1"),
            ("IMPERIHOME_PORT", "9000"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn should_ignore_unparsable_port_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("IMPERIHOME_PORT", "http")]));
        assert_eq!(config.server.port, 8095);
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("IMPERIHOME_HOST", "127.0.0.1"),
            ("IMPERIHOME_PORT", "9000"),
            ("IMPERIHOME_BIND", "10.0.0.2:8100"),
        ]));
        assert_eq!(config.bind_addr(), "10.0.0.2:8100");
    }

    #[test]
    fn should_prefer_rust_log_over_imperihome_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("IMPERIHOME_LOG", "imperihomed=debug"),
            ("RUST_LOG", "trace"),
        ]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_keep_file_values_without_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[]));
        assert_eq!(config.bind_addr(), "0.0.0.0:8095");
    }
}
