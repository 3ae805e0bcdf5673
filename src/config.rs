//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use hackportal_core::{default_spotlight_events, SiteContent, SpotlightEvent};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub push: PushConfig,

    #[serde(default)]
    pub site: SiteContent,

    #[serde(default = "default_spotlight_events")]
    pub spotlight: Vec<SpotlightEvent>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled browser bundle, served under `/pkg`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_assets_dir() -> String {
    "hackportal-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assets_dir: default_assets_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Internal portal API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Fixed API base URL. When unset, the base is derived from each inbound
    /// request's `Referer` and `Host` headers.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_upstream_timeout")]
    pub request_timeout_ms: u64,
}

fn default_upstream_timeout() -> u64 {
    5000
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout_ms: default_upstream_timeout(),
        }
    }
}

/// Push channel configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PushConfig {
    /// Maximum number of concurrent push sessions
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

fn default_max_connections() -> usize {
    1000
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("hackportal").join("config.toml")),
            Some(PathBuf::from("/etc/hackportal/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("HACKPORTAL_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("HACKPORTAL_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(dir) = std::env::var("HACKPORTAL_ASSETS_DIR") {
            self.server.assets_dir = dir;
        }

        if let Ok(url) = std::env::var("HACKPORTAL_API_URL") {
            self.upstream.base_url = Some(url);
        }

        if let Ok(level) = std::env::var("HACKPORTAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("HACKPORTAL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            push: PushConfig::default(),
            site: SiteContent::default(),
            spotlight: default_spotlight_events(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# HackPortal Configuration
#
# Environment variables override these settings:
# - HACKPORTAL_HOST
# - HACKPORTAL_PORT
# - HACKPORTAL_ASSETS_DIR
# - HACKPORTAL_API_URL
# - HACKPORTAL_LOG_LEVEL
# - HACKPORTAL_LOG_FORMAT

[server]
host = "0.0.0.0"
port = 3000

# Compiled browser bundle (trunk build output)
assets_dir = "hackportal-ui/dist"

# Allowed CORS origins for the push endpoint; empty allows any
cors_origins = []

[upstream]
# Internal portal API. Leave unset to call back to the host that served the
# page (scheme from Referer, host from Host).
# base_url = "http://localhost:8080"

# Request timeout in milliseconds
request_timeout_ms = 5000

[push]
# Maximum concurrent push sessions
max_connections = 1000

[site]
title = "HackPortal"
tagline = "A Project by ACM Engineering and HackUTD"
video_url = "https://www.youtube.com/embed/niFBblrblqo"
contact_email = "email@organization.com"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.upstream.base_url.is_none());
        assert_eq!(config.upstream.request_timeout_ms, 5000);
        assert_eq!(config.push.max_connections, 1000);
        assert_eq!(config.site.title, "HackPortal");
        // Unlisted site fields fall back to defaults
        assert_eq!(config.site.buttons.len(), 4);
        assert_eq!(config.spotlight.len(), 4);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 8080

[upstream]
base_url = "http://from-file:8080"
"#
        )
        .unwrap();

        // Only this test touches HACKPORTAL_* variables
        std::env::set_var("HACKPORTAL_API_URL", "http://from-env:9090");
        std::env::set_var("HACKPORTAL_PORT", "not-a-port");
        std::env::set_var("HACKPORTAL_LOG_FORMAT", "json");

        let config = Config::load_with_env(file.path());

        std::env::remove_var("HACKPORTAL_API_URL");
        std::env::remove_var("HACKPORTAL_PORT");
        std::env::remove_var("HACKPORTAL_LOG_FORMAT");

        let config = config.unwrap();
        assert_eq!(
            config.upstream.base_url.as_deref(),
            Some("http://from-env:9090")
        );
        // Unparseable port keeps the file value
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[upstream]
base_url = "http://api.internal:8080"

[[spotlight]]
title = "Rust Workshop"
date = "Sunday"
location = "Hall B"
time = "10:00 AM"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(
            config.upstream.base_url.as_deref(),
            Some("http://api.internal:8080")
        );
        assert_eq!(config.spotlight.len(), 1);
        assert_eq!(config.spotlight[0].title, "Rust Workshop");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/hackportal.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
