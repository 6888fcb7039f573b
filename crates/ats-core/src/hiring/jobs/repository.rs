use async_trait::async_trait;

use super::domain::{Job, JobId, JobStatus};
use super::query::JobQuery;
use crate::datasource::RepositoryError;
use crate::hiring::PageMeta;

/// Storage abstraction for the job catalog. The in-memory source applies the
/// query with the pure functions in [`super::query`]; the remote source
/// forwards it as request parameters.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn list(&self, query: &JobQuery) -> Result<(Vec<Job>, Option<PageMeta>), RepositoryError>;
    async fn get(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    async fn insert(&self, job: Job) -> Result<Job, RepositoryError>;
    async fn update(&self, job: Job) -> Result<Job, RepositoryError>;
    /// Status-only patch. The default rewrites the whole record; the remote
    /// source overrides it to hit the backend's dedicated status endpoint.
    async fn set_status(&self, id: &JobId, status: JobStatus) -> Result<Job, RepositoryError> {
        let mut job = self.get(id).await?.ok_or(RepositoryError::NotFound)?;
        job.status = status;
        self.update(job).await
    }
    /// Hard removal. Only the mock source supports it; the remote backend
    /// never deletes and reports `Unsupported`.
    async fn delete(&self, id: &JobId) -> Result<(), RepositoryError>;
}
