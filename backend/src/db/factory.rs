//! Repository factory for dependency injection.
//!
//! Creates repository instances from runtime configuration and, for the
//! in-memory backend, loads the configured seed file.

use log::info;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use super::seed;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryType {
    /// In-memory local repository
    #[default]
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Reads `REPOSITORY_TYPE`, falling back to `Local`.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or_default()
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use ecovision::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::from_config_file("repository.toml").await?;
/// let locations = repo.list_locations().await?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty repository of the given type.
    pub fn create(repo_type: RepositoryType) -> Arc<dyn FullRepository> {
        match repo_type {
            RepositoryType::Local => Self::create_local(),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a repository and load `seed_file` into it when given.
    pub async fn create_seeded(
        repo_type: RepositoryType,
        seed_file: Option<&Path>,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo = Self::create(repo_type);
        if let Some(path) = seed_file {
            let summary = seed::seed_from_file(repo.as_ref(), path)
                .await
                .map_err(|e| RepositoryError::configuration(e.to_string()))?;
            info!(
                "Seeded {:?} repository from {}: {}",
                repo_type,
                path.display(),
                summary
            );
        }
        Ok(repo)
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` and seeds from `SEED_DATA_PATH` when set.
    pub async fn from_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        let seed_file = RepositoryConfig::default().seed_file();
        Self::create_seeded(RepositoryType::from_env(), seed_file.as_deref()).await
    }

    /// Create repository from a TOML configuration file.
    pub async fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config).await
    }

    /// Create repository from a RepositoryConfig instance.
    pub async fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = config.repository_type()?;
        let seed_file = config.seed_file();
        Self::create_seeded(repo_type, seed_file.as_deref()).await
    }
}

/// Builder for configuring repository creation.
///
/// # Example
/// ```ignore
/// let repo = RepositoryBuilder::new()
///     .repository_type(RepositoryType::Local)
///     .seed_file("data/sample_data.json")
///     .build()
///     .await?;
/// ```
pub struct RepositoryBuilder {
    repo_type: RepositoryType,
    seed_file: Option<PathBuf>,
}

impl RepositoryBuilder {
    /// Defaults to `REPOSITORY_TYPE`, or `Local`, without a seed file.
    pub fn new() -> Self {
        Self {
            repo_type: RepositoryType::from_env(),
            seed_file: None,
        }
    }

    pub fn repository_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = repo_type;
        self
    }

    pub fn seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_file = Some(path.into());
        self
    }

    /// Load type and seed file from a TOML file.
    pub fn from_config_file<P: AsRef<Path>>(
        mut self,
        config_path: P,
    ) -> Result<Self, RepositoryError> {
        let config = RepositoryConfig::from_file(config_path)?;
        self.repo_type = config.repository_type()?;
        self.seed_file = config.seed_file();
        Ok(self)
    }

    pub async fn build(self) -> RepositoryResult<Arc<dyn FullRepository>> {
        RepositoryFactory::create_seeded(self.repo_type, self.seed_file.as_deref()).await
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
