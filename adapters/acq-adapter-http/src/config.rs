//! Connection settings for the HTTP adapter.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with ACQ_ prefix)
//! 3. .env files
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Production service endpoint.
pub const DEFAULT_BASE_URL: &str = "http://quantumcomputer.ac.cn";

/// Connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Service base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// CSRF token of an established session (set via ACQ_CSRF_TOKEN)
    #[serde(default)]
    pub csrf_token: Option<String>,

    /// Session cookie header value (set via ACQ_SESSION_COOKIE)
    #[serde(default)]
    pub session_cookie: Option<String>,
}

impl fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .field("csrf_token", &self.csrf_token.as_ref().map(|_| "[REDACTED]"))
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            csrf_token: None,
            session_cookie: None,
        }
    }
}

impl ConnectorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml_ng::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load .env file if it exists
    /// 2. Load from file if provided
    /// 3. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge `ACQ_*` environment variables into this configuration.
    ///
    /// Only variables that are set override the current values.
    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge overrides from an arbitrary variable source.
    pub fn merge_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = var("ACQ_BASE_URL") {
            self.base_url = v;
        }
        if let Some(val) = var("ACQ_TIMEOUT").and_then(|v| v.parse().ok()) {
            self.timeout_seconds = val;
        }
        if let Some(val) = var("ACQ_CONNECT_TIMEOUT").and_then(|v| v.parse().ok()) {
            self.connect_timeout_seconds = val;
        }
        if let Some(v) = var("ACQ_CSRF_TOKEN") {
            self.csrf_token = Some(v);
        }
        if let Some(v) = var("ACQ_SESSION_COOKIE") {
            self.session_cookie = Some(v);
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_seconds == 0 || self.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "timeouts must be greater than 0".to_string(),
            ));
        }
        if self.csrf_token.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "csrf_token must not be empty; omit the field instead".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// The session described by this configuration.
    pub fn session(&self) -> Result<Session, ConfigError> {
        let token = self
            .csrf_token
            .clone()
            .ok_or(ConfigError::MissingCsrfToken)?;
        Ok(Session::new(token, self.session_cookie.clone()))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing CSRF token: set ACQ_CSRF_TOKEN or csrf_token in the config file")]
    MissingCsrfToken,
}
