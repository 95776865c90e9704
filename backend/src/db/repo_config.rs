//! Repository configuration file support.
//!
//! ```toml
//! [repository]
//! type = "local"
//!
//! [local]
//! seed_file = "data/sample_data.json"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Environment variable pointing at an explicit `repository.toml`.
pub const CONFIG_PATH_ENV: &str = "REPOSITORY_CONFIG";

/// Environment variable overriding the configured seed file.
pub const SEED_PATH_ENV: &str = "SEED_DATA_PATH";

/// Repository configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub local: LocalSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: "local".to_string(),
        }
    }
}

/// In-memory repository settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalSettings {
    /// JSON file loaded into the repository at startup. Relative paths are
    /// resolved against the directory of the configuration file.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let (Some(seed), Some(dir)) = (config.local.seed_file.as_ref(), path.parent()) {
            if seed.is_relative() && !dir.as_os_str().is_empty() {
                config.local.seed_file = Some(dir.join(seed));
            }
        }
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load repository configuration from the default location.
    ///
    /// Uses `REPOSITORY_CONFIG` when set, otherwise the first `repository.toml`
    /// found in the current directory, `backend/` or the parent directory.
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        search_paths
            .iter()
            .find(|path| path.exists())
            .map(Self::from_file)
            .unwrap_or_else(|| {
                Err(RepositoryError::configuration(
                    "No repository.toml found in standard locations",
                ))
            })
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::from_str(&self.repository.repo_type).map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })
    }

    /// Seed file to load, with `SEED_DATA_PATH` taking precedence.
    pub fn seed_file(&self) -> Option<PathBuf> {
        env::var(SEED_PATH_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| self.local.seed_file.clone())
    }
}
