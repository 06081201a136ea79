//! Configuration management
//!
//! idmapper reads a single TOML file describing where the document store
//! lives and which hosts map to which authority:
//!
//! ```toml
//! [document_store]
//! base_url = "http://localhost:8080/__document-store-api"
//! timeout_secs = 10
//!
//! [authorities]
//! "ftalphaville.ft.com" = "FT-LABS-WP-1-24"
//! ```
//!
//! The file is found via `--config`, then `IDMAPPER_CONFIG`, then
//! `~/.idmapper/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::AuthorityMapping;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "IDMAPPER_CONFIG";

const GLOBAL_DIR: &str = ".idmapper";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Config file could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but holds an unusable value
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Document store connection settings
    pub document_store: DocStoreConfig,
    /// Hostname to authority table
    #[serde(default)]
    pub authorities: AuthorityMapping,
}

/// Document store connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocStoreConfig {
    /// Base URL of the document store API
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("idmapper/{}", env!("CARGO_PKG_VERSION"))
}

impl DocStoreConfig {
    /// Settings for a document store at `base_url` with default timeout and agent
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Get the config file path used when none is given explicitly
    #[must_use]
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV).map_or_else(
            || {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(GLOBAL_DIR)
                    .join(GLOBAL_CONFIG_FILE)
            },
            PathBuf::from,
        )
    }

    /// Load config from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        let trimmed = config.document_store.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid("document_store.base_url must not be empty".to_string()));
        }
        config.document_store.base_url = trimmed.to_string();

        if config.document_store.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "document_store.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }
}
