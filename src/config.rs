//! Application configuration
//!
//! Optional `ratib.toml` in the data directory. Every field has a default,
//! so a missing file or a partial file is fine; a file that does not parse
//! is an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Name of the config file inside the data directory
pub const CONFIG_FILE: &str = "ratib.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default data directory
pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_local_dir()
        .map(|p| p.join("ratib"))
        .ok_or(ConfigError::DataDirNotFound)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub quran: QuranConfig,
    pub reflection: ReflectionConfig,
}

/// Reading text source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuranConfig {
    pub base_url: String,
    /// Text edition, e.g. `ar.warsh` (Warsh narration from Nafi')
    pub edition: String,
    pub timeout_secs: u64,
}

impl Default for QuranConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.alquran.cloud/v1".to_string(),
            edition: "ar.warsh".to_string(),
            timeout_secs: 30,
        }
    }
}

impl QuranConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Reflection text generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectionConfig {
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ReflectionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key from the configured environment variable, if set and non-empty
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl AppConfig {
    /// Load `ratib.toml` from `data_dir`, falling back to defaults when absent
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}
