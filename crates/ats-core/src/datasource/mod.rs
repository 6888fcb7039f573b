//! Pluggable backing stores for the entity services. The mode is chosen once
//! at startup: in-memory repositories seeded from fixtures, or REST-backed
//! repositories talking to a remote backend with a bearer credential.

pub mod fixtures;
pub mod memory;
pub mod remote;

use std::sync::Arc;

use crate::config::{AppConfig, DataSourceMode};
use crate::hiring::applications::repository::ApplicationRepository;
use crate::hiring::jobs::repository::JobRepository;
use crate::hiring::users::repository::UserGateway;

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("credential missing or rejected")]
    Unauthorized,
    #[error("operation not supported by this data source: {0}")]
    Unsupported(&'static str),
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// The full capability set a running service needs, resolved once at startup.
#[derive(Clone)]
pub struct DataSource {
    pub jobs: Arc<dyn JobRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub users: Arc<dyn UserGateway>,
}

impl DataSource {
    /// In-memory repositories seeded from the bundled fixtures.
    pub fn mock() -> Self {
        Self {
            jobs: Arc::new(memory::InMemoryJobRepository::seeded()),
            applications: Arc::new(memory::InMemoryApplicationRepository::seeded()),
            users: Arc::new(memory::InMemoryUserGateway::seeded()),
        }
    }

    /// REST-backed repositories against the configured base URL.
    pub fn remote(config: &AppConfig) -> Result<Self, RepositoryError> {
        let backend = Arc::new(remote::RemoteBackend::connect(&config.data_source)?);
        Ok(Self {
            jobs: backend.clone(),
            applications: backend.clone(),
            users: backend,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RepositoryError> {
        match config.data_source.mode {
            DataSourceMode::Mock => Ok(Self::mock()),
            DataSourceMode::Remote => Self::remote(config),
        }
    }
}
