//! Server configuration.
//!
//! Configuration is read from environment variables:
//! - `HOST` - Optional. Bind address. Defaults to `0.0.0.0`.
//! - `PORT` - Optional. Listening port. Defaults to `5000`.
//! - `AGENTS_FILE` - Optional. Catalog document. Defaults to `./valorant-agents-v1.json`.
//! - `API_KEYS_FILE` - Optional. Issued-key document. Defaults to `./api-keys.json`.
//! - `ADMIN_KEY` - Optional. Secret required by `/generate-api-key`. When unset,
//!   key issuance is refused.
//! - `REQUIRE_API_KEY` - Optional. `false` serves every route without a key.
//!   Defaults to `true`.
//! - `AGENTS_RESPONSE_SHAPE` - Optional. `array` or `wrapped`. Defaults to `array`.

use std::path::PathBuf;

use agent_catalog_core::ListShape;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub agents_file: PathBuf,
    pub api_keys_file: PathBuf,
    pub admin_key: Option<String>,
    pub require_api_key: bool,
    pub list_shape: ListShape,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            agents_file: PathBuf::from("./valorant-agents-v1.json"),
            api_keys_file: PathBuf::from("./api-keys.json"),
            admin_key: None,
            require_api_key: true,
            list_shape: ListShape::Array,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?,
            None => defaults.port,
        };

        let agents_file = lookup("AGENTS_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.agents_file);

        let api_keys_file = lookup("API_KEYS_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.api_keys_file);

        let admin_key = lookup("ADMIN_KEY").filter(|k| !k.is_empty());

        let require_api_key = match lookup("REQUIRE_API_KEY") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::InvalidValue("REQUIRE_API_KEY".to_string(), raw.clone())
            })?,
            None => defaults.require_api_key,
        };

        let list_shape = match lookup("AGENTS_RESPONSE_SHAPE") {
            Some(raw) => raw.parse().map_err(|e| {
                ConfigError::InvalidValue("AGENTS_RESPONSE_SHAPE".to_string(), e)
            })?,
            None => defaults.list_shape,
        };

        Ok(Self {
            host,
            port,
            agents_file,
            api_keys_file,
            admin_key,
            require_api_key,
            list_shape,
        })
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_agents_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.agents_file = path.into();
        self
    }

    pub fn with_api_keys_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.api_keys_file = path.into();
        self
    }

    pub fn with_admin_key(mut self, key: impl Into<String>) -> Self {
        self.admin_key = Some(key.into());
        self
    }

    pub fn with_require_api_key(mut self, required: bool) -> Self {
        self.require_api_key = required;
        self
    }

    pub fn with_list_shape(mut self, shape: ListShape) -> Self {
        self.list_shape = shape;
        self
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
