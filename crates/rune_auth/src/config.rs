//! Configuration for the authorization layer
//!
//! Only quota and saved-login switches are configurable. The developer
//! allowlist is compiled in.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AuthError, Result, error::ConfigError};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneConfig {
    /// Whether users may save new logins on this instance
    #[serde(default = "default_true")]
    pub allow_users_to_save_logins: bool,

    /// Saved login quotas
    #[serde(default)]
    pub saved_logins: QuotaSettings,
}

/// How many saved logins a user may keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaSettings {
    /// Limit for non-premium accounts old enough to qualify
    pub max_for_complimentary: usize,

    /// Limit for premium users regardless of account age
    pub max_for_premium: usize,

    /// Minimum Discord account age for the complimentary limit
    pub min_account_age_days_for_complimentary: u32,
}

fn default_true() -> bool {
    true
}

impl Default for RuneConfig {
    fn default() -> Self {
        Self {
            allow_users_to_save_logins: true,
            saved_logins: QuotaSettings::default(),
        }
    }
}

impl Default for QuotaSettings {
    fn default() -> Self {
        Self {
            max_for_complimentary: 1,
            max_for_premium: 10,
            min_account_age_days_for_complimentary: 90,
        }
    }
}

/// Load configuration from a TOML file
pub async fn load_config(path: &Path) -> Result<RuneConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AuthError::Configuration {
            config_path: path.display().to_string(),
            field: "file".to_string(),
            expected: "readable TOML file".to_string(),
            cause: ConfigError::Io(e),
        })?;

    let config = toml::from_str(&content).map_err(|e| AuthError::Configuration {
        config_path: path.display().to_string(),
        field: "content".to_string(),
        expected: "valid TOML configuration".to_string(),
        cause: ConfigError::TomlParse(e),
    })?;

    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Candidate configuration files, in priority order
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("rune.toml")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("rune").join("config.toml"));
    }

    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".rune").join("config.toml"));
    }

    paths
}

/// Load the first configuration file found, or defaults if there is none
pub async fn load_config_from_standard_locations() -> Result<RuneConfig> {
    load_first_existing(&config_paths()).await
}

async fn load_first_existing(paths: &[PathBuf]) -> Result<RuneConfig> {
    for path in paths {
        if path.exists() {
            return load_config(path).await;
        }
    }

    debug!("No configuration file found, using defaults");
    Ok(RuneConfig::default())
}
