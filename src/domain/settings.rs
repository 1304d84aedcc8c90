//! Configuration file model.
//!
//! Every section is optional; anything left out falls back to the
//! defaults below or, for credentials, to the interactive prompt.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Server location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Full address including protocol and port.
    #[serde(default)]
    pub address: Option<String>,
}

/// Stored API keys.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct KeysConfig {
    /// Key used for the orphan report.
    #[serde(default)]
    pub admin_api_key: Option<String>,

    /// Key used for deletion.
    #[serde(default)]
    pub user_api_key: Option<String>,
}

impl std::fmt::Debug for KeysConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |k: &Option<String>| k.as_ref().map(|_| "<redacted>");
        f.debug_struct("KeysConfig")
            .field("admin_api_key", &mask(&self.admin_api_key))
            .field("user_api_key", &mask(&self.user_api_key))
            .finish()
    }
}

/// HTTP client tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds. `0` disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub keys: KeysConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".immich-purge-orphans")
    }

    /// Get the default config file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }

    /// Request timeout, if one is configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        match self.http.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
