//! Application Configuration
//!
//! Explicit configuration object built once at startup and threaded through
//! the composition root. Theme preference lives here instead of in process
//! globals so every consumer receives it as a dependency.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// UI theme preference, persisted with the rest of the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Remote rationale service settings. No endpoint means the deterministic
/// fallback sentence is used for every recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RationaleConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for RationaleConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    #[serde(default)]
    pub theme: ThemePreference,
    #[serde(default)]
    pub rationale: RationaleConfig,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("closetly.db")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            theme: ThemePreference::default(),
            rationale: RationaleConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from a JSON file; a missing file yields the defaults.
    pub fn load(path: &Path) -> DomainResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Internal(format!("Failed to read config: {}", e)))?;
        serde_json::from_str(&raw).map_err(|e| DomainError::Serialization(e.to_string()))
    }
}
